/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;

pub use error::{GatewayError, Result};

pub use client::{ApiKeyAuth, ClientConfig, DEFAULT_BASE_URL, GatewayClient, RequestInterceptor};
