// wallet-core/src/chains/hycon/mod.rs

//! Hycon Chain Support
//!
//! # Key Features
//! - **Addresses**: `H`-prefixed Base58 strings with an embedded BLAKE2b checksum via [`Address`].
//! - **Amounts**: 9-decimal fixed-point parsing and formatting (see [`amount`]).
//! - **Transactions**: protobuf wire form and hashing via [`Transaction`].
//! - **Signing**: recoverable secp256k1 signatures via [`HyconSigner`].

pub mod address;
pub mod amount;
pub mod signer;
pub mod transaction;

// Re-exports for cleaner API access
pub use address::Address;
pub use amount::{amount_from_string, format_amount, parse_amount};
pub use signer::{HyconSigner, TxSignature};
pub use transaction::Transaction;
