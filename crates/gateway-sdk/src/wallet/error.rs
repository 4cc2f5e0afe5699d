/*
[INPUT]:  Key decoding, signing and verification failures
[OUTPUT]: WalletError with chain-specific context
[POS]:    Wallet layer - error types for signers and validators
[UPDATE]: When adding new failure modes to a chain scheme
*/

use thiserror::Error;

use crate::types::WalletType;

/// Errors raised while building signers, signing, or verifying signatures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Private key could not be decoded or turned into a keypair
    #[error("invalid {wallet_type} private key: {reason}")]
    InvalidPrivateKey {
        wallet_type: WalletType,
        reason: String,
    },

    /// Wallet type name is not one of the supported chains
    #[error("unsupported wallet type: {0}")]
    UnsupportedWalletType(String),

    /// Signing backend failed
    #[error("failed to sign message: {0}")]
    Signing(String),

    /// Sui length-prefixes messages with a single byte
    #[error("message too long: {len} bytes exceeds the 255-byte limit")]
    MessageTooLong { len: usize },

    #[error("failed to decode signature: {0}")]
    DecodeSignature(String),

    #[error("failed to decode public key: {0}")]
    DecodePublicKey(String),

    #[error("failed to recover public key: {0}")]
    Recovery(String),

    /// Recovered signer does not match the claimed address
    #[error("invalid signature")]
    InvalidSignature,

    /// Cryptographic verification of the signature failed
    #[error("signature verification failed")]
    VerificationFailed,
}

impl WalletError {
    pub(crate) fn invalid_key(wallet_type: WalletType, reason: impl Into<String>) -> Self {
        WalletError::InvalidPrivateKey {
            wallet_type,
            reason: reason.into(),
        }
    }
}
