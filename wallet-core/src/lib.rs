// wallet-core/src/lib.rs

//! Deterministic wallet core for Hycon.
//!
//! Mnemonic → seed → BIP-32 key → `H`-address, plus fixed-point amounts and
//! recoverable transaction signatures. Host applications normally go through [`api`].

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod types;

pub use config::NetworkConfig;
pub use error::{WalletError, WalletResult};
pub use types::{SignedTransaction, WalletCredential};
