/*
[INPUT]:  JWT strings from Authorization headers and login responses
[OUTPUT]: Expiration status and a shared cache of the last issued token
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When changing token inspection or cache strategy
*/

use std::future::Future;
use std::sync::Arc;

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::http::{GatewayError, Result};

/// Stored token data with metadata
#[derive(Debug, Clone)]
pub(crate) struct TokenData {
    pub token: String,
    /// `None` when the token carries no `exp` claim
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenData {
    /// Inspect `token`; fails if it is not a decodable JWT
    pub fn from_token(token: &str) -> Result<Self> {
        Ok(Self {
            token: token.to_string(),
            expires_at: token_expiry(token)?,
        })
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp < Utc::now())
    }
}

/// Thread-safe JWT cache shared by concurrent requests
///
/// Reissue happens under the lock, so requests that find the token missing or
/// expired at the same time wait for a single login instead of each starting one.
#[derive(Debug, Clone)]
pub struct JwtManager {
    data: Arc<Mutex<Option<TokenData>>>,
}

impl JwtManager {
    /// Create a new empty JWT manager
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(None)),
        }
    }

    /// Return the cached token, or run `issue` and cache its result
    ///
    /// Tokens that cannot be decoded are returned but not cached.
    pub async fn get_or_issue<F, Fut>(&self, issue: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut guard = self.data.lock().await;
        if let Some(data) = guard.as_ref().filter(|data| !data.is_expired()) {
            return Ok(data.token.clone());
        }

        let token = issue().await?;
        *guard = TokenData::from_token(&token).ok();
        Ok(token)
    }
}

impl Default for JwtManager {
    fn default() -> Self {
        Self::new()
    }
}

/// `Ok(true)` if `token` is unexpired (or has no `exp`), `Ok(false)` if expired
///
/// The signature is not checked; the client has no way to verify it.
pub fn check_token_expiration(token: &str) -> Result<bool> {
    let expires_at = token_expiry(token)?;
    Ok(!expires_at.is_some_and(|exp| exp < Utc::now()))
}

/// Read the `exp` claim of an unverified JWT
pub fn token_expiry(token: &str) -> Result<Option<DateTime<Utc>>> {
    let claims = decode_claims(token)?;

    let Some(exp) = claims.get("exp") else {
        return Ok(None);
    };
    let seconds = exp
        .as_f64()
        .ok_or_else(|| GatewayError::InvalidToken("'exp' claim is not numeric".to_string()))?;

    DateTime::from_timestamp(seconds.trunc() as i64, 0)
        .map(Some)
        .ok_or_else(|| GatewayError::InvalidToken(format!("'exp' claim out of range: {seconds}")))
}

/// Strip an optional `Bearer ` scheme from an Authorization header value
pub fn bearer_token(header_value: &str) -> &str {
    let value = header_value.trim();
    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => value,
    }
}

fn decode_claims(token: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(GatewayError::InvalidToken(
            "token contains an invalid number of segments".to_string(),
        ));
    };

    decode_segment(header)?;
    match decode_segment(payload)? {
        serde_json::Value::Object(claims) => Ok(claims),
        _ => Err(GatewayError::InvalidToken("claims are not a JSON object".to_string())),
    }
}

fn decode_segment(segment: &str) -> Result<serde_json::Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .map_err(|e| GatewayError::InvalidToken(format!("invalid base64 segment: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| GatewayError::InvalidToken(format!("invalid JSON segment: {e}")))
}
