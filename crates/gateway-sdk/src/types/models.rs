/*
[INPUT]:  Signer output and derived wallet addresses
[OUTPUT]: ChainIdentity and SignedMessage value types
[POS]:    Data layer - wallet identity models
[UPDATE]: When signer output shape changes
*/

use serde::{Deserialize, Serialize};

use super::enums::WalletType;

/// Chain tag plus the wallet address in that chain's native encoding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainIdentity {
    pub wallet_type: WalletType,
    pub address: String,
}

/// Signature produced by a chain signer
///
/// The signature encoding is chain specific and must be passed through untouched:
/// `0x`-hex for Ethereum, Base58 for Solana, Base64 `flag || sig || pubkey` for Sui.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    pub signature: String,
    #[serde(rename = "signingKey")]
    pub signing_key: String,
}
