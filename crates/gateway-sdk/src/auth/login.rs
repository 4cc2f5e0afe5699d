/*
[INPUT]:  Login message, signature and claimed wallet address
[OUTPUT]: The chain the address was verified against
[POS]:    Auth layer - local signature check before the login request
[UPDATE]: When a chain is added or address detection order changes
*/

use crate::http::{GatewayError, Result};
use crate::types::WalletType;
use crate::wallet::{ethereum, solana, sui, verify_message};

/// Chain a wallet address belongs to, judged by its format alone
///
/// Checked in order Ethereum, Sui, Solana. A Sui-format address is a 20-byte
/// hex string, which always matches Ethereum first, so the Sui branch is only
/// reachable if the Ethereum format check changes. Addresses derived by
/// [`sui::SuiSigner`] are 32 bytes and match none of the three.
pub fn detect_wallet_type(address: &str) -> Option<WalletType> {
    if ethereum::validate_address(address) {
        Some(WalletType::Ethereum)
    } else if sui::validate_address(address) {
        Some(WalletType::Sui)
    } else if solana::validate_address(address) {
        Some(WalletType::Solana)
    } else {
        None
    }
}

/// Verify a login signature against the chain detected from `wallet_address`
pub fn verify_login(message: &str, signature: &str, wallet_address: &str) -> Result<WalletType> {
    let wallet_type = detect_wallet_type(wallet_address).ok_or_else(|| {
        GatewayError::authentication(format!("unsupported wallet address: {wallet_address}"))
    })?;

    match verify_message(wallet_type, message, signature, wallet_address) {
        Ok(true) => Ok(wallet_type),
        Ok(false) => Err(GatewayError::authentication(invalid_signature_message(wallet_type))),
        Err(e) => Err(GatewayError::authentication(format!(
            "{} signature verification failed: {e}",
            wallet_type.as_str()
        ))),
    }
}

/// Sui keeps the lowercase chain name in this message
fn invalid_signature_message(wallet_type: WalletType) -> String {
    let name = match wallet_type {
        WalletType::Sui => wallet_type.as_str(),
        WalletType::Ethereum | WalletType::Solana => wallet_type.display_name(),
    };
    format!("invalid {name} signature")
}
