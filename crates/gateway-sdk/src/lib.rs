/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Gateway SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod sdk;
pub mod types;
pub mod wallet;

// Re-export commonly used types from auth
pub use auth::{
    AuthManager,
    AuthMiddleware,
    JwtManager,
    MiddlewareParams,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    GatewayClient,
    GatewayError,
    RequestInterceptor,
    Result,
};

pub use sdk::{GatewaySdk, SdkConfig, WalletDetails};

// Re-export all types
pub use types::*;

pub use wallet::{WalletError, WalletService};
