// wallet-core/src/chains/mod.rs

//! Per-chain encodings and signing.

pub mod hycon;
