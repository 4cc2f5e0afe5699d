/*
[INPUT]:  Auth endpoint JSON bodies
[OUTPUT]: Typed response structs
[POS]:    Data layer - response schemas
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Response of `GET /auth/message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `POST /auth` and `GET /auth/refresh-token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
