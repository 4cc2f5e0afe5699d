/*
[INPUT]:  Private key material and an explicit chain tag
[OUTPUT]: One signer per chain behind a closed enum
[POS]:    Wallet layer - chain dispatch for signing
[UPDATE]: When adding new wallet types or changing signature format
*/

use crate::types::{ChainIdentity, SignedMessage, WalletType};
use crate::wallet::{EthereumSigner, SolanaSigner, SuiSigner, WalletError};

/// Signer for one of the supported chains
///
/// - Ethereum: `0x`-hex `[r, s, v]` signature
/// - Solana: base58 Ed25519 signature
/// - Sui: base64 `flag || signature || pubkey`
#[derive(Debug)]
pub enum ChainSigner {
    Ethereum(EthereumSigner),
    Solana(SolanaSigner),
    Sui(SuiSigner),
}

impl ChainSigner {
    /// Build the signer matching `wallet_type`
    pub fn new(private_key: &str, wallet_type: WalletType) -> Result<Self, WalletError> {
        Ok(match wallet_type {
            WalletType::Ethereum => ChainSigner::Ethereum(EthereumSigner::new(private_key)?),
            WalletType::Solana => ChainSigner::Solana(SolanaSigner::new(private_key)?),
            WalletType::Sui => ChainSigner::Sui(SuiSigner::new(private_key)?),
        })
    }

    pub fn wallet_type(&self) -> WalletType {
        match self {
            ChainSigner::Ethereum(_) => WalletType::Ethereum,
            ChainSigner::Solana(_) => WalletType::Solana,
            ChainSigner::Sui(_) => WalletType::Sui,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            ChainSigner::Ethereum(signer) => signer.address(),
            ChainSigner::Solana(signer) => signer.address(),
            ChainSigner::Sui(signer) => signer.address(),
        }
    }

    pub fn identity(&self) -> ChainIdentity {
        ChainIdentity {
            wallet_type: self.wallet_type(),
            address: self.address().to_string(),
        }
    }

    pub fn sign(&self, message: &str) -> Result<SignedMessage, WalletError> {
        match self {
            ChainSigner::Ethereum(signer) => signer.sign(message),
            ChainSigner::Solana(signer) => signer.sign(message),
            ChainSigner::Sui(signer) => signer.sign(message),
        }
    }
}

/// Verify `signature` with the validator of `wallet_type`
pub fn verify_message(
    wallet_type: WalletType,
    message: &str,
    signature: &str,
    wallet_address: &str,
) -> Result<bool, WalletError> {
    match wallet_type {
        WalletType::Ethereum => super::ethereum::verify_message(signature, message, wallet_address),
        WalletType::Solana => super::solana::verify_message(message, signature, wallet_address),
        WalletType::Sui => super::sui::verify_message(signature, message, wallet_address),
    }
}

/// Check `address` against the format of `wallet_type`
pub fn validate_address(wallet_type: WalletType, address: &str) -> bool {
    match wallet_type {
        WalletType::Ethereum => super::ethereum::validate_address(address),
        WalletType::Solana => super::solana::validate_address(address),
        WalletType::Sui => super::sui::validate_address(address),
    }
}
