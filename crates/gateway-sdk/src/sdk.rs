/*
[INPUT]:  API key or wallet credentials, base URL
[OUTPUT]: GatewaySdk with an authenticated HTTP client
[POS]:    SDK entry point - wires transport, auth and wallet together
[UPDATE]: When credential sources or construction rules change
*/

use std::env;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{AuthManager, AuthMiddleware, MiddlewareParams};
use crate::http::{ApiKeyAuth, ClientConfig, DEFAULT_BASE_URL, GatewayClient, GatewayError, Result};
use crate::types::WalletType;
use crate::wallet::WalletService;

pub const API_KEY_ENV: &str = "GATEWAY_API_KEY";
pub const PRIVATE_KEY_ENV: &str = "GATEWAY_PRIVATE_KEY";
pub const WALLET_TYPE_ENV: &str = "GATEWAY_WALLET_TYPE";
pub const URL_ENV: &str = "GATEWAY_URL";

/// Wallet used to log in when no API key is configured
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDetails {
    pub private_key: String,
    pub wallet_type: WalletType,
}

impl fmt::Debug for WalletDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletDetails")
            .field("private_key", &"<redacted>")
            .field("wallet_type", &self.wallet_type)
            .finish()
    }
}

/// SDK configuration
///
/// An API key takes precedence over wallet credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SdkConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_wallet(private_key: impl Into<String>, wallet_type: WalletType) -> Self {
        Self {
            wallet: Some(WalletDetails {
                private_key: private_key.into(),
                wallet_type,
            }),
            ..Self::default()
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Read `GATEWAY_API_KEY`, `GATEWAY_PRIVATE_KEY`, `GATEWAY_WALLET_TYPE` and `GATEWAY_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from `lookup(name)` for each `GATEWAY_*` name; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let wallet = match (read(PRIVATE_KEY_ENV), read(WALLET_TYPE_ENV)) {
            (Some(private_key), Some(wallet_type)) => Some(WalletDetails {
                private_key,
                wallet_type: wallet_type.parse()?,
            }),
            (Some(_), None) => {
                return Err(GatewayError::Config(format!(
                    "{WALLET_TYPE_ENV} must be set together with {PRIVATE_KEY_ENV}"
                )));
            }
            (None, _) => None,
        };

        Ok(Self {
            api_key: read(API_KEY_ENV),
            wallet,
            url: read(URL_ENV),
        })
    }

    fn base_url(&self) -> &str {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Entry point for the Gateway API
#[derive(Debug, Clone)]
pub struct GatewaySdk {
    client: GatewayClient,
    auth: AuthManager,
    wallet: Option<Arc<WalletService>>,
    client_config: ClientConfig,
}

impl GatewaySdk {
    pub fn new(config: SdkConfig) -> Result<Self> {
        Self::with_client_config(config, ClientConfig::default())
    }

    pub fn with_client_config(config: SdkConfig, client_config: ClientConfig) -> Result<Self> {
        let transport = GatewayClient::with_config_and_base_url(client_config.clone(), config.base_url())?;
        let api_key = config.api_key.as_deref().filter(|key| !key.trim().is_empty());

        let (client, wallet) = match (api_key, &config.wallet) {
            (Some(api_key), _) => {
                info!(base_url = %transport.base_url(), "using API key authentication");
                let client = transport.with_interceptor(Arc::new(ApiKeyAuth::new(api_key)));
                (client, None)
            }
            (None, Some(details)) => {
                let wallet = Arc::new(WalletService::new(&details.private_key, details.wallet_type)?);
                info!(
                    base_url = %transport.base_url(),
                    wallet_type = %wallet.wallet_type(),
                    address = wallet.address(),
                    "using wallet authentication"
                );
                let middleware = AuthMiddleware::with_default_routes(MiddlewareParams {
                    http_client: transport.clone(),
                    wallet_service: Arc::clone(&wallet),
                });
                (transport.with_interceptor(Arc::new(middleware)), Some(wallet))
            }
            (None, None) => {
                return Err(GatewayError::Config(
                    "either an API key or wallet details must be provided".to_string(),
                ));
            }
        };

        Ok(Self {
            auth: AuthManager::new(client.clone()),
            client,
            wallet,
            client_config,
        })
    }

    /// Build a fresh SDK from `config`, keeping the transport settings
    pub fn reinitialize(&self, config: SdkConfig) -> Result<Self> {
        Self::with_client_config(config, self.client_config.clone())
    }

    /// HTTP client with authentication applied to every request
    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// `None` when authenticating with an API key
    pub fn wallet(&self) -> Option<&WalletService> {
        self.wallet.as_deref()
    }
}
