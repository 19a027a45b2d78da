// wallet-core/src/crypto/base58.rs
//
// Base58 (Bitcoin alphabet) and Base58Check with a double-SHA-256 checksum.

use super::hash::sha256d;
use crate::error::Base58Error;

const CHECKSUM_LEN: usize = 4;

/// Encode bytes as Base58. Leading zero bytes become leading '1's.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode a Base58 string.
pub fn decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| Base58Error::InvalidCharacter(e.to_string()))
}

/// `encode(data || sha256d(data)[..4])`
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode Base58Check and strip the verified 4-byte checksum.
pub fn check_decode(s: &str) -> Result<Vec<u8>, Base58Error> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(Base58Error::TooShort(decoded.len()));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum != &sha256d(payload)[..CHECKSUM_LEN] {
        return Err(Base58Error::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
