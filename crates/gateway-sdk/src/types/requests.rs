/*
[INPUT]:  Signed login payloads
[OUTPUT]: Typed request bodies for auth endpoints
[POS]:    Data layer - request schemas
[UPDATE]: When request bodies change
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /auth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub message: String,
    pub signature: String,
    pub wallet_address: String,
}
