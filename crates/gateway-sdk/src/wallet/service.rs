/*
[INPUT]:  Private key string and declared wallet type
[OUTPUT]: SignedMessage for the configured identity
[POS]:    Wallet layer - chain-polymorphic signing facade
[UPDATE]: When wallet construction or signing surface changes
*/

use std::fmt;

use crate::types::{ChainIdentity, SignedMessage, WalletType};
use crate::wallet::{ChainSigner, WalletError};

/// Holds one signer selected at construction, for the life of the session
///
/// Keys are never rotated; build a new service to change them.
pub struct WalletService {
    signer: ChainSigner,
    wallet_type: WalletType,
    private_key: String,
}

impl WalletService {
    pub fn new(private_key: &str, wallet_type: WalletType) -> Result<Self, WalletError> {
        let signer = ChainSigner::new(private_key, wallet_type)?;
        Ok(Self {
            signer,
            wallet_type,
            private_key: private_key.to_string(),
        })
    }

    /// Construct from a wallet type name such as `"sui"`
    pub fn from_config(private_key: &str, wallet_type: &str) -> Result<Self, WalletError> {
        Self::new(private_key, wallet_type.parse()?)
    }

    pub fn sign_message(&self, message: &str) -> Result<SignedMessage, WalletError> {
        self.signer.sign(message)
    }

    pub fn wallet_type(&self) -> WalletType {
        self.wallet_type
    }

    pub fn address(&self) -> &str {
        self.signer.address()
    }

    pub fn identity(&self) -> ChainIdentity {
        self.signer.identity()
    }

    /// Key material exactly as supplied at construction
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for WalletService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletService")
            .field("wallet_type", &self.wallet_type)
            .field("address", &self.address())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_KEY: &str = "edb0ba5a63c5f9e4f4394560907794fca750704b355413bc04baab896254036a";
    const SOL_KEY: &str =
        "T8HMDTLmyQgY6VjvLdEwSSZsexAtiFvfiKBzEsT3ajNQg7jJgnTBK2qDSShz98ND3ihtrwrQcUWokdQr4ozPQt3";

    #[test]
    fn test_wallet_service_ethereum() {
        let service = WalletService::new(ETH_KEY, WalletType::Ethereum).unwrap();
        assert_eq!(service.wallet_type(), WalletType::Ethereum);
        assert_eq!(service.private_key(), ETH_KEY);

        let signed = service.sign_message("test message").unwrap();
        assert!(!signed.signature.is_empty());
        assert_eq!(signed.signing_key, service.address());
    }

    #[test]
    fn test_wallet_service_solana() {
        let service = WalletService::new(SOL_KEY, WalletType::Solana).unwrap();
        assert_eq!(service.address(), "AqzrrxaBCXRsq2BaY32djAp38B42asRRahbsYvD5uvSF");
        assert_eq!(service.identity().wallet_type, WalletType::Solana);
    }

    #[test]
    fn test_wallet_service_unsupported_type() {
        let err = WalletService::from_config(ETH_KEY, "bitcoin").unwrap_err();
        assert_eq!(err, WalletError::UnsupportedWalletType("bitcoin".to_string()));
    }

    #[test]
    fn test_wallet_service_wrong_key_for_type() {
        assert!(WalletService::new(SOL_KEY, WalletType::Ethereum).is_err());
        assert!(WalletService::new(ETH_KEY, WalletType::Sui).is_err());
    }

    #[test]
    fn test_wallet_service_debug_redacts_key() {
        let service = WalletService::new(ETH_KEY, WalletType::Ethereum).unwrap();
        let debug = format!("{service:?}");
        assert!(!debug.contains(ETH_KEY));
        assert!(debug.contains("<redacted>"));
    }
}
