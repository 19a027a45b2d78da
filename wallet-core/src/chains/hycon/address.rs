// wallet-core/src/chains/hycon/address.rs
//
// Hycon Address Module
// BLAKE2b-256, Base58, 4-char embedded checksum

use crate::crypto::base58;
use crate::crypto::hash::blake2b_256;
use crate::crypto::key_deriver::KeyPair;
use crate::error::{AddressError, WalletResult};
use std::fmt;
use std::str::FromStr;

/// Address payload length.
pub const ADDRESS_LEN: usize = 20;
/// Leading character of every address string.
pub const ADDRESS_PREFIX: char = 'H';
/// Characters of Base58(BLAKE2b-256(address)) appended as checksum.
pub const CHECKSUM_LEN: usize = 4;

/// 20-byte Hycon account address
///
/// # Flow:  Private Key (32B) → Public Key (33B, compressed) → BLAKE2b-256 → Address (20B)
///
/// String form: `"H" + Base58(address) + Base58(BLAKE2b-256(address))[..4]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Wrap raw address bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Bytes 12..32 of BLAKE2b-256(public key).
    ///
    /// `public_key` is the serialized key as given; Hycon uses the 33-byte
    /// compressed form.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let hash = blake2b_256(public_key);
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&hash[32 - ADDRESS_LEN..]);
        Self(address)
    }

    /// Address of a raw 32-byte private key.
    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        let key_pair = KeyPair::from_private_key(private_key)?;
        Ok(Self::from_public_key(key_pair.public_key_bytes()))
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Whether `s` decodes to an address.
    #[inline]
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Address>().is_ok()
    }

    fn checksum(bytes: &[u8]) -> String {
        base58::encode(&blake2b_256(bytes))
            .chars()
            .take(CHECKSUM_LEN)
            .collect()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            ADDRESS_PREFIX,
            base58::encode(&self.0),
            Self::checksum(&self.0)
        )
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Checks run in order: prefix, payload length, checksum.
    ///
    /// A body that does not decode as Base58 has no 20-byte payload and is
    /// reported as `InvalidAddressLength(0)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = match s.strip_prefix(ADDRESS_PREFIX) {
            Some(rest) => rest,
            None => return Err(AddressError::InvalidAddressPrefix(s.chars().next())),
        };

        if !rest.is_ascii() || rest.len() <= CHECKSUM_LEN {
            return Err(AddressError::InvalidAddressLength(0));
        }

        let (body, expected) = rest.split_at(rest.len() - CHECKSUM_LEN);
        let decoded = base58::decode(body).map_err(|_| AddressError::InvalidAddressLength(0))?;

        let bytes: [u8; ADDRESS_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidAddressLength(decoded.len()))?;

        let computed = Self::checksum(&bytes);
        if computed != expected {
            return Err(AddressError::ChecksumMismatch {
                computed,
                expected: expected.to_string(),
            });
        }

        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
