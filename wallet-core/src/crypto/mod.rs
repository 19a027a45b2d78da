// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic Generation**: BIP-39 phrases (12-24 words) via [`WalletMnemonic`], wordlists via [`Language`].
//! - **Key Stretching**: PBKDF2 over HMAC-SHA256/512 via [`kdf::Pbkdf2`].
//! - **Key Derivation**: BIP-32 secp256k1 nodes via [`HdNode`], Hycon account keys via [`KeyDeriver`].
//! - **Derivation Paths**: the fixed `m/44'/1397'/0'/0/index` path via [`DerivationPaths`].
//! - **Encoding**: digests ([`hash`]) and Base58 / Base58Check ([`base58`]).

pub mod base58;
pub mod hash;
pub mod kdf;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;
pub mod wordlist;

// Re-exports for cleaner API access
pub use key_deriver::{HdNode, KeyDeriver, KeyPair};
pub use mnemonic::{mnemonic_to_seed, WalletMnemonic, WordCount};
pub use paths::DerivationPaths;
pub use wordlist::Language;
