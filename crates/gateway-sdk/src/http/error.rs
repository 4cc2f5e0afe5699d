/*
[INPUT]:  Error sources (HTTP, API, serialization, auth, wallet)
[OUTPUT]: Structured error types with context and auth classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::wallet::WalletError;

/// Main error type for the Gateway SDK
#[derive(Error, Debug)]
pub enum GatewayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Signature check before login failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Fetching a fresh token for an outgoing request failed
    #[error("failed to issue new token: {0}")]
    TokenIssue(#[source] Box<GatewayError>),

    /// JWT could not be decoded
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Key construction, signing or verification failed
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Header value rejected by the HTTP stack
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            GatewayError::Authentication { .. }
            | GatewayError::TokenIssue(_)
            | GatewayError::InvalidToken(_) => true,
            GatewayError::Api { code, .. } => *code == 401 || *code == 403,
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        GatewayError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }

    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        GatewayError::Authentication {
            message: message.into(),
        }
    }
}

/// Result type alias for Gateway SDK operations
pub type Result<T> = std::result::Result<T, GatewayError>;
