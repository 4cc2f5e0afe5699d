/*
[INPUT]:  Solana private key (base58), messages, base58 public keys
[OUTPUT]: Base58 Ed25519 signatures and verification results
[POS]:    Wallet layer - Solana (raw-message Ed25519) scheme
[UPDATE]: When Solana signature format or key encoding changes
*/

use ed25519_dalek::{
    KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH, Signature, Signer,
    SigningKey, Verifier, VerifyingKey,
};

use crate::types::{SignedMessage, WalletType};
use crate::wallet::WalletError;

/// Solana wallet signer implementation
pub struct SolanaSigner {
    signing_key: SigningKey,
    address: String,
}

impl SolanaSigner {
    /// Create a new Solana wallet signer from a base58-encoded private key
    ///
    /// Supports 64-byte keypair or 32-byte seed.
    pub fn new(private_key_base58: &str) -> Result<Self, WalletError> {
        let bytes = bs58::decode(private_key_base58.trim())
            .into_vec()
            .map_err(|e| WalletError::invalid_key(WalletType::Solana, format!("invalid base58: {e}")))?;

        let signing_key = match bytes.len() {
            KEYPAIR_LENGTH => {
                let mut keypair = [0u8; KEYPAIR_LENGTH];
                keypair.copy_from_slice(&bytes);
                SigningKey::from_keypair_bytes(&keypair).map_err(|e| {
                    WalletError::invalid_key(WalletType::Solana, format!("invalid keypair bytes: {e}"))
                })?
            }
            SECRET_KEY_LENGTH => {
                let mut seed = [0u8; SECRET_KEY_LENGTH];
                seed.copy_from_slice(&bytes);
                SigningKey::from_bytes(&seed)
            }
            other => {
                return Err(WalletError::invalid_key(
                    WalletType::Solana,
                    format!("expected 32 or 64 bytes, got {other}"),
                ));
            }
        };

        let address = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Base58 public key
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Ed25519-sign the raw UTF-8 bytes of `message`
    pub fn sign(&self, message: &str) -> Result<SignedMessage, WalletError> {
        let signature = self.signing_key.sign(message.as_bytes());

        Ok(SignedMessage {
            signature: bs58::encode(signature.to_bytes()).into_string(),
            signing_key: self.address.clone(),
        })
    }
}

impl std::fmt::Debug for SolanaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Verify a base58 signature over `message` with a base58 public key
pub fn verify_message(message: &str, signature: &str, public_key: &str) -> Result<bool, WalletError> {
    let signature_bytes = bs58::decode(signature)
        .into_vec()
        .map_err(|e| WalletError::DecodeSignature(format!("invalid base58: {e}")))?;
    let signature_bytes: [u8; SIGNATURE_LENGTH] =
        signature_bytes.as_slice().try_into().map_err(|_| {
            WalletError::DecodeSignature(format!(
                "expected {SIGNATURE_LENGTH} bytes, got {}",
                signature_bytes.len()
            ))
        })?;

    let public_key_bytes = bs58::decode(public_key)
        .into_vec()
        .map_err(|e| WalletError::DecodePublicKey(format!("invalid base58: {e}")))?;
    let public_key_bytes: [u8; PUBLIC_KEY_LENGTH] =
        public_key_bytes.as_slice().try_into().map_err(|_| {
            WalletError::DecodePublicKey(format!(
                "expected {PUBLIC_KEY_LENGTH} bytes, got {}",
                public_key_bytes.len()
            ))
        })?;

    let verifying_key = VerifyingKey::from_bytes(&public_key_bytes)
        .map_err(|e| WalletError::DecodePublicKey(e.to_string()))?;
    let signature = Signature::from_bytes(&signature_bytes);

    Ok(verifying_key.verify(message.as_bytes(), &signature).is_ok())
}

/// True iff `wallet` is base58 that decodes to a 32-byte public key
pub fn validate_address(wallet: &str) -> bool {
    bs58::decode(wallet)
        .into_vec()
        .map(|bytes| bytes.len() == PUBLIC_KEY_LENGTH)
        .unwrap_or(false)
}
