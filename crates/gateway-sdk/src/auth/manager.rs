/*
[INPUT]:  Gateway HTTP client and a wallet that can sign the login message
[OUTPUT]: JWT tokens from the auth endpoints
[POS]:    Auth layer - orchestrates the message, sign, login flow
[UPDATE]: When auth endpoints or flow steps change
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{GatewayClient, Result};
use crate::types::{AuthRequest, MessageResponse, TokenResponse};
use crate::wallet::WalletService;

use super::login::verify_login;

pub const GENERATE_SIGN_MESSAGE: &str = "/auth/message";
pub const REFRESH_TOKEN: &str = "/auth/refresh-token";
pub const AUTHENTICATE_ACCOUNT: &str = "/auth";

/// Client for the auth endpoints
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: GatewayClient,
}

impl AuthManager {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    /// Get the message a wallet must sign to log in
    ///
    /// GET /auth/message
    pub async fn get_message(&self) -> Result<String> {
        let response: MessageResponse = self.client.get(GENERATE_SIGN_MESSAGE).await?;
        Ok(response.message)
    }

    /// Exchange a signed message for a JWT
    ///
    /// The signature is checked locally against the chain detected from
    /// `wallet_address` before anything is sent.
    ///
    /// POST /auth
    pub async fn login(&self, message: &str, signature: &str, wallet_address: &str) -> Result<String> {
        let wallet_type = verify_login(message, signature, wallet_address)?;
        debug!(wallet_type = %wallet_type, wallet_address, "login signature verified locally");

        let body = AuthRequest {
            message: message.to_string(),
            signature: signature.to_string(),
            wallet_address: wallet_address.to_string(),
        };
        let response: TokenResponse = self.client.post(AUTHENTICATE_ACCOUNT, &body).await?;
        Ok(response.token)
    }

    /// Get a new JWT using the current one
    ///
    /// GET /auth/refresh-token
    pub async fn refresh_token(&self, current_token: &str) -> Result<String> {
        let builder = self
            .client
            .request(Method::GET, REFRESH_TOKEN)?
            .bearer_auth(current_token);
        let response: TokenResponse = self.client.send_json(REFRESH_TOKEN, builder).await?;
        Ok(response.token)
    }

    /// Complete authentication flow
    ///
    /// 1. Fetch the login message
    /// 2. Sign it with the wallet
    /// 3. Log in with the signature and the wallet address
    pub async fn issue_token(&self, wallet: &WalletService) -> Result<String> {
        let message = self.get_message().await?;
        let signed = wallet.sign_message(&message)?;
        self.login(&message, &signed.signature, &signed.signing_key).await
    }
}
