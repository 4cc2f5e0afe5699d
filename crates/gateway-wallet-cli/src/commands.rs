/*
[INPUT]:  Resolved SdkConfig and per-command arguments
[OUTPUT]: Addresses, signatures, verification results and tokens
[POS]:    Command layer - thin wrappers over gateway-sdk
[UPDATE]: When adding subcommands or changing their output
*/

use anyhow::{Context, Result, anyhow};
use gateway_sdk::auth::verify_login;
use gateway_sdk::wallet::{self, WalletService};
use gateway_sdk::{ChainIdentity, GatewaySdk, SdkConfig, SignedMessage, WalletType};
use tracing::{debug, info};

fn wallet_service(config: &SdkConfig) -> Result<WalletService> {
    let details = config
        .wallet
        .as_ref()
        .context("wallet credentials required: set --private-key and --wallet-type")?;
    WalletService::new(&details.private_key, details.wallet_type).context("load wallet")
}

/// Identity derived from the configured private key
pub fn address(config: &SdkConfig) -> Result<ChainIdentity> {
    Ok(wallet_service(config)?.identity())
}

pub fn sign(config: &SdkConfig, message: &str) -> Result<SignedMessage> {
    let wallet = wallet_service(config)?;
    debug!(wallet_type = %wallet.wallet_type(), len = message.len(), "signing message");
    wallet.sign_message(message).context("sign message")
}

/// Verify with the given chain, or detect it from the address like the login endpoint does
pub fn verify(
    message: &str,
    signature: &str,
    address: &str,
    wallet_type: Option<WalletType>,
) -> Result<WalletType> {
    let Some(wallet_type) = wallet_type else {
        return Ok(verify_login(message, signature, address)?);
    };

    match wallet::verify_message(wallet_type, message, signature, address) {
        Ok(true) => Ok(wallet_type),
        Ok(false) => Err(anyhow!("invalid {} signature", wallet_type.display_name())),
        Err(e) => Err(anyhow!(e).context(format!("{wallet_type} signature verification failed"))),
    }
}

/// Run the wallet login flow and return the issued JWT
///
/// `None` when an API key is configured; the SDK then authenticates with the
/// key and no login is needed.
pub async fn login(config: SdkConfig) -> Result<Option<String>> {
    let sdk = GatewaySdk::new(config).context("build sdk")?;
    let Some(wallet) = sdk.wallet() else {
        info!("API key configured, skipping wallet login");
        return Ok(None);
    };

    info!(
        wallet_type = %wallet.wallet_type(),
        address = wallet.address(),
        base_url = %sdk.client().base_url(),
        "logging in"
    );
    let token = sdk.auth().issue_token(wallet).await.context("login")?;
    Ok(Some(token))
}
