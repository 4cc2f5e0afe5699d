/*
[INPUT]:  Sui private key (bech32 "suiprivkey..."), messages, claimed addresses
[OUTPUT]: Intent-framed Ed25519 signatures, Sui address derivation and checks
[POS]:    Wallet layer - Sui (Ed25519 + BLAKE2b intent digest) scheme
[UPDATE]: When Sui key export, intent framing, or signature layout changes
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bech32::FromBase32;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{
    PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH, Signature, Signer, SigningKey, Verifier,
    VerifyingKey,
};
use tracing::warn;

use crate::types::{SignedMessage, WalletType};
use crate::wallet::WalletError;

type Blake2b256 = Blake2b<U32>;

pub const SUI_PRIVATE_KEY_PREFIX: &str = "suiprivkey";
/// Byte length accepted by [`validate_address`]
pub const SUI_ADDRESS_LENGTH: usize = 20;
pub const ED25519_FLAG: u8 = 0x00;

/// PersonalMessage intent, scope 0, version 0
const PERSONAL_MESSAGE_INTENT: [u8; 3] = [3, 0, 0];
const VALIDATION_MESSAGE: &[u8] = b"sui validation";

/// Sui wallet signer implementation
pub struct SuiSigner {
    signing_key: SigningKey,
    address: String,
}

impl SuiSigner {
    /// Import a bech32 `suiprivkey` export
    pub fn new(private_key: &str) -> Result<Self, WalletError> {
        let seed = decode_private_key(private_key)?;
        let signing_key = SigningKey::from_bytes(&seed);

        let check = signing_key.sign(VALIDATION_MESSAGE);
        if signing_key.verifying_key().verify(VALIDATION_MESSAGE, &check).is_err() {
            return Err(WalletError::invalid_key(
                WalletType::Sui,
                "provided secret key is invalid",
            ));
        }

        let address = public_key_to_address(signing_key.verifying_key().as_bytes());

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// `0x` + 64 hex chars derived from the public key
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Raw Ed25519 public key
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a personal message; the result is Base64 `flag || signature || pubkey`
    pub fn sign(&self, message: &str) -> Result<SignedMessage, WalletError> {
        let digest = personal_message_digest(message)?;
        let signature = self.signing_key.sign(&digest);

        let public_key = self.public_key_bytes();
        let mut serialized = Vec::with_capacity(1 + SIGNATURE_LENGTH + PUBLIC_KEY_LENGTH);
        serialized.push(ED25519_FLAG);
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&public_key);

        Ok(SignedMessage {
            signature: BASE64.encode(serialized),
            signing_key: self.address.clone(),
        })
    }
}

impl std::fmt::Debug for SuiSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Verify a serialized Sui signature and compare the embedded key's address
///
/// A bad signature is an error; a good signature from a different address is `Ok(false)`.
pub fn verify_message(signature: &str, message: &str, wallet_address: &str) -> Result<bool, WalletError> {
    let bytes = BASE64
        .decode(signature.trim())
        .map_err(|e| WalletError::DecodeSignature(e.to_string()))?;
    if bytes.len() < 1 + PUBLIC_KEY_LENGTH {
        return Err(WalletError::DecodeSignature(format!(
            "serialized signature too short: {} bytes",
            bytes.len()
        )));
    }

    let (signature_bytes, public_key_bytes) = bytes[1..].split_at(bytes.len() - 1 - PUBLIC_KEY_LENGTH);

    let signature = Signature::from_slice(signature_bytes)
        .map_err(|e| WalletError::DecodeSignature(e.to_string()))?;
    let public_key: [u8; PUBLIC_KEY_LENGTH] = public_key_bytes
        .try_into()
        .map_err(|_| WalletError::DecodePublicKey("expected 32 bytes".to_string()))?;
    let verifying_key = VerifyingKey::from_bytes(&public_key)
        .map_err(|e| WalletError::DecodePublicKey(e.to_string()))?;

    let digest = personal_message_digest(message)?;
    if verifying_key.verify(&digest, &signature).is_err() {
        return Err(WalletError::VerificationFailed);
    }

    let derived = public_key_to_address(&public_key);
    Ok(derived.eq_ignore_ascii_case(wallet_address.trim()))
}

/// True iff `wallet` is even-length hex (optional `0x`) of exactly 20 bytes
///
/// Addresses produced by [`public_key_to_address`] are 32 bytes and do not pass.
pub fn validate_address(wallet: &str) -> bool {
    let digits = wallet
        .strip_prefix("0x")
        .or_else(|| wallet.strip_prefix("0X"))
        .unwrap_or(wallet);

    !digits.is_empty()
        && digits.len() % 2 == 0
        && digits.bytes().all(|b| b.is_ascii_hexdigit())
        && digits.len() / 2 == SUI_ADDRESS_LENGTH
}

/// `0x` + hex(BLAKE2b-256(flag || pubkey))
pub fn public_key_to_address(public_key: &[u8]) -> String {
    let mut hasher = Blake2b256::new();
    hasher.update([ED25519_FLAG]);
    hasher.update(public_key);
    let hash = hex::encode(hasher.finalize());
    format!("0x{}", &hash[..64])
}

fn decode_private_key(value: &str) -> Result<[u8; SECRET_KEY_LENGTH], WalletError> {
    let (prefix, words, _variant) = bech32::decode(value.trim())
        .map_err(|e| WalletError::invalid_key(WalletType::Sui, e.to_string()))?;
    if prefix != SUI_PRIVATE_KEY_PREFIX {
        return Err(WalletError::invalid_key(
            WalletType::Sui,
            format!("invalid private key prefix: {prefix}"),
        ));
    }

    let extended = Vec::<u8>::from_base32(&words)
        .map_err(|e| WalletError::invalid_key(WalletType::Sui, e.to_string()))?;
    let (flag, secret) = extended
        .split_first()
        .ok_or_else(|| WalletError::invalid_key(WalletType::Sui, "empty key payload"))?;

    if *flag != ED25519_FLAG {
        warn!(flag = *flag, "sui private key is not flagged as ED25519");
    }

    secret.try_into().map_err(|_| {
        WalletError::invalid_key(
            WalletType::Sui,
            format!(
                "wrong secret key size, expected {SECRET_KEY_LENGTH} bytes, got {}",
                secret.len()
            ),
        )
    })
}

/// BLAKE2b-256 of `intent || len(message) || message`
fn personal_message_digest(message: &str) -> Result<[u8; 32], WalletError> {
    let bytes = message.as_bytes();
    let len = u8::try_from(bytes.len()).map_err(|_| WalletError::MessageTooLong { len: bytes.len() })?;

    let mut hasher = Blake2b256::new();
    hasher.update(PERSONAL_MESSAGE_INTENT);
    hasher.update([len]);
    hasher.update(bytes);

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    Ok(digest)
}
