/*
[INPUT]:  Outgoing requests, a wallet and an uninstrumented HTTP client
[OUTPUT]: Requests carrying a valid bearer JWT
[POS]:    Auth layer - re-authentication interceptor for protected routes
[UPDATE]: When route protection or token reuse rules change
*/

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{debug, info, warn};

use crate::http::{GatewayClient, GatewayError, RequestInterceptor, Result};
use crate::wallet::WalletService;

use super::jwt::{JwtManager, bearer_token, check_token_expiration};
use super::manager::{AUTHENTICATE_ACCOUNT, AuthManager, GENERATE_SIGN_MESSAGE, REFRESH_TOKEN};

/// Routes that never require a token
pub const DEFAULT_UNPROTECTED_ROUTES: [&str; 3] =
    [GENERATE_SIGN_MESSAGE, REFRESH_TOKEN, AUTHENTICATE_ACCOUNT];

/// Dependencies of [`AuthMiddleware`]
///
/// `http_client` is used for the auth calls themselves and must not carry
/// the middleware.
#[derive(Debug, Clone)]
pub struct MiddlewareParams {
    pub http_client: GatewayClient,
    pub wallet_service: Arc<WalletService>,
}

/// Attaches a JWT to every request on a protected route
///
/// A request that already carries an unexpired token is left alone. Otherwise
/// the cached token is used, or a new one is issued through the wallet login
/// flow. Concurrent requests share one issuance.
pub struct AuthMiddleware {
    auth: AuthManager,
    wallet: Arc<WalletService>,
    jwt_manager: JwtManager,
    unprotected_routes: HashSet<String>,
}

impl AuthMiddleware {
    pub fn new<I, S>(params: MiddlewareParams, unprotected_routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            auth: AuthManager::new(params.http_client),
            wallet: params.wallet_service,
            jwt_manager: JwtManager::new(),
            unprotected_routes: unprotected_routes.into_iter().map(Into::into).collect(),
        }
    }

    /// Middleware protecting everything except the auth endpoints
    pub fn with_default_routes(params: MiddlewareParams) -> Self {
        Self::new(params, DEFAULT_UNPROTECTED_ROUTES)
    }

    pub fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    pub fn is_protected(&self, route: &str) -> bool {
        !self.unprotected_routes.contains(route)
    }

    async fn token(&self) -> Result<String> {
        let auth = &self.auth;
        let wallet = self.wallet.as_ref();

        self.jwt_manager
            .get_or_issue(move || {
                info!(
                    wallet_type = %wallet.wallet_type(),
                    address = wallet.address(),
                    "issuing new auth token"
                );
                auth.issue_token(wallet)
            })
            .await
            .map_err(|e| GatewayError::TokenIssue(Box::new(e)))
    }
}

impl fmt::Debug for AuthMiddleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthMiddleware")
            .field("wallet", &self.wallet)
            .field("unprotected_routes", &self.unprotected_routes)
            .finish_non_exhaustive()
    }
}

/// True if the request already carries a token that has not expired
fn has_valid_token(request: &Request) -> bool {
    let Some(value) = request.headers().get(AUTHORIZATION) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        warn!("authorization header is not valid UTF-8, reissuing");
        return false;
    };

    match check_token_expiration(bearer_token(value)) {
        Ok(true) => true,
        Ok(false) => {
            debug!("request token expired, reissuing");
            false
        }
        Err(e) => {
            debug!(error = %e, "request token unreadable, reissuing");
            false
        }
    }
}

#[async_trait]
impl RequestInterceptor for AuthMiddleware {
    async fn intercept(&self, route: &str, request: &mut Request) -> Result<()> {
        if !self.is_protected(route) || has_valid_token(request) {
            return Ok(());
        }

        let token = self.token().await?;
        let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
