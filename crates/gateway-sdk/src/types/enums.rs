/*
[INPUT]:  Wallet type names from configuration
[OUTPUT]: Typed WalletType enum with serialization support
[POS]:    Data layer - chain tags
[UPDATE]: When a new chain family is supported
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wallet::WalletError;

/// Chain family a wallet key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    Ethereum,
    Solana,
    Sui,
}

impl WalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Ethereum => "ethereum",
            WalletType::Solana => "solana",
            WalletType::Sui => "sui",
        }
    }

    /// Capitalized chain name used in user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            WalletType::Ethereum => "Ethereum",
            WalletType::Solana => "Solana",
            WalletType::Sui => "Sui",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethereum" => Ok(WalletType::Ethereum),
            "solana" => Ok(WalletType::Solana),
            "sui" => Ok(WalletType::Sui),
            other => Err(WalletError::UnsupportedWalletType(other.to_string())),
        }
    }
}
