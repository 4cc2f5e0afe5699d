/*
[INPUT]:  Private keys, messages, signatures and claimed addresses
[OUTPUT]: Per-chain signers, validators and the WalletService facade
[POS]:    Wallet layer - multi-chain message signing
[UPDATE]: When a chain scheme is added or its encoding changes
*/

pub mod error;
pub mod ethereum;
pub mod service;
pub mod signer;
pub mod solana;
pub mod sui;

pub use error::WalletError;
pub use ethereum::EthereumSigner;
pub use service::WalletService;
pub use signer::{ChainSigner, validate_address, verify_message};
pub use solana::SolanaSigner;
pub use sui::SuiSigner;
