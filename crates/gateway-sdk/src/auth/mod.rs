/*
[INPUT]:  Wallet signatures, JWTs and outgoing requests
[OUTPUT]: Verified logins, issued tokens and authenticated requests
[POS]:    Auth layer - handles Gateway API authentication
[UPDATE]: When auth flow or token handling changes
*/

pub mod jwt;
pub mod login;
pub mod manager;
pub mod middleware;

pub use jwt::{JwtManager, check_token_expiration};
pub use login::{detect_wallet_type, verify_login};
pub use manager::AuthManager;
pub use middleware::{AuthMiddleware, DEFAULT_UNPROTECTED_ROUTES, MiddlewareParams};
