/*
[INPUT]:  Ethereum private key (hex string), messages, claimed addresses
[OUTPUT]: Personal-message signatures, recovered-address verification
[POS]:    Wallet layer - Ethereum (secp256k1 + Keccak256) scheme
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::str::FromStr;

use alloy_primitives::{Signature, U256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

use crate::types::{SignedMessage, WalletType};
use crate::wallet::WalletError;

const SIGNATURE_LEN: usize = 65;
const RECOVERY_ID_OFFSET: usize = 64;
const RECOVERY_ID_BASE: u8 = 27;

/// Signer for Ethereum wallets
pub struct EthereumSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EthereumSigner {
    /// Create a new Ethereum signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self, WalletError> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| WalletError::invalid_key(WalletType::Ethereum, e.to_string()))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }

    /// Checksummed `0x` address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sign `message` with the EIP-191 personal-message hash
    pub fn sign(&self, message: &str) -> Result<SignedMessage, WalletError> {
        let signature = self
            .signer
            .sign_message_sync(message.as_bytes())
            .map_err(|e| WalletError::Signing(e.to_string()))?;

        // [r, s, v]
        let mut bytes = signature.as_bytes();
        if bytes[RECOVERY_ID_OFFSET] < RECOVERY_ID_BASE {
            bytes[RECOVERY_ID_OFFSET] += RECOVERY_ID_BASE;
        }

        Ok(SignedMessage {
            signature: format!("0x{}", hex::encode(bytes)),
            signing_key: self.address.clone(),
        })
    }
}

impl std::fmt::Debug for EthereumSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Verify a personal-message signature against a claimed address
///
/// Returns `Err(WalletError::InvalidSignature)` when the recovered signer differs
/// from `wallet_address`.
pub fn verify_message(
    signature: &str,
    message: &str,
    wallet_address: &str,
) -> Result<bool, WalletError> {
    let mut bytes = hex::decode(strip_hex_prefix(signature.trim()))
        .map_err(|e| WalletError::DecodeSignature(e.to_string()))?;
    if bytes.len() != SIGNATURE_LEN {
        return Err(WalletError::DecodeSignature(format!(
            "expected {SIGNATURE_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    if bytes[RECOVERY_ID_OFFSET] >= RECOVERY_ID_BASE {
        bytes[RECOVERY_ID_OFFSET] -= RECOVERY_ID_BASE;
    }
    let y_parity = match bytes[RECOVERY_ID_OFFSET] {
        0 => false,
        1 => true,
        other => {
            return Err(WalletError::Recovery(format!("invalid recovery id {other}")));
        }
    };

    let signature = Signature::new(
        U256::from_be_slice(&bytes[..32]),
        U256::from_be_slice(&bytes[32..64]),
        y_parity,
    );
    let recovered = signature
        .recover_address_from_msg(message.as_bytes())
        .map_err(|e| WalletError::Recovery(e.to_string()))?;

    if normalize_address(wallet_address) != hex::encode(recovered.as_slice()) {
        return Err(WalletError::InvalidSignature);
    }

    Ok(true)
}

/// True iff `wallet` is 20 bytes of hex, with or without `0x`, in any casing
pub fn validate_address(wallet: &str) -> bool {
    let digits = strip_hex_prefix(wallet);
    digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

pub(crate) fn normalize_address(address: &str) -> String {
    strip_hex_prefix(address.trim()).to_ascii_lowercase()
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
