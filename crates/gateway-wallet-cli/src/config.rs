/*
[INPUT]:  YAML configuration file, CLI flags, environment variables
[OUTPUT]: Resolved SdkConfig
[POS]:    Configuration layer - credential resolution
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use gateway_sdk::{SdkConfig, WalletDetails, WalletType};

/// Credential flags; each falls back to its `GATEWAY_*` variable
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// Wallet private key (hex, base58 or suiprivkey)
    #[arg(long, global = true, env = "GATEWAY_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
    /// Wallet type: ethereum, solana or sui
    #[arg(long, global = true, env = "GATEWAY_WALLET_TYPE")]
    pub wallet_type: Option<WalletType>,
    /// Static API key; when set, `login` has nothing to do and exits without a request
    #[arg(long, global = true, env = "GATEWAY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// API base URL
    #[arg(long, global = true, env = "GATEWAY_URL")]
    pub url: Option<String>,
}

impl CredentialArgs {
    /// Overlay these values on `base`; set fields win
    pub fn apply(&self, mut base: SdkConfig) -> Result<SdkConfig> {
        if let Some(api_key) = &self.api_key {
            base.api_key = Some(api_key.clone());
        }
        if let Some(url) = &self.url {
            base.url = Some(url.clone());
        }

        match (&self.private_key, self.wallet_type) {
            (Some(private_key), Some(wallet_type)) => {
                base.wallet = Some(WalletDetails {
                    private_key: private_key.clone(),
                    wallet_type,
                });
            }
            (Some(private_key), None) => match base.wallet.as_mut() {
                Some(wallet) => wallet.private_key = private_key.clone(),
                None => anyhow::bail!("--wallet-type is required when --private-key is given"),
            },
            (None, Some(wallet_type)) => {
                if let Some(wallet) = base.wallet.as_mut() {
                    wallet.wallet_type = wallet_type;
                }
            }
            (None, None) => {}
        }

        Ok(base)
    }
}

/// Load the optional YAML file and apply flag/environment overrides
pub fn load_config(path: Option<&Path>, args: &CredentialArgs) -> Result<SdkConfig> {
    let base = match path {
        Some(path) => from_file(path)?,
        None => SdkConfig::default(),
    };
    args.apply(base)
}

fn from_file(path: &Path) -> Result<SdkConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: SdkConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}
