/*
[INPUT]:  Gateway SDK wallet and auth APIs
[OUTPUT]: Configuration loading and command implementations for the CLI
[POS]:    Library root - shared by the binary and its tests
[UPDATE]: When adding commands or configuration sources
*/

pub mod commands;
pub mod config;

pub use config::{CredentialArgs, load_config};
