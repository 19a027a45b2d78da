// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Hycon account keys
//
// Layout:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │                    ▼                            │
// │  master (HMAC-SHA512 "Bitcoin seed")            │
// │                    │                            │
// │  44' / 1397' / 0' / 0   (change node)           │
// │                    │                            │
// │        ┌───────────┼───────────┐                │
// │        ▼           ▼           ▼                │
// │     index 0     index 1  ...  index n           │
// └─────────────────────────────────────────────────┘

pub mod secp256k1;

// Re-exports
pub use secp256k1::HdNode;

use crate::crypto::paths::{coin_type, DerivationPaths};
use crate::error::{CryptoError, WalletResult};
use k256::SecretKey;
use zeroize::Zeroizing;

/// Expected BIP-39 seed length.
pub const SEED_LEN: usize = 64;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// secp256k1 key pair at the end of a derivation path
///
/// # Security
/// - Private key bytes sit in `Zeroizing<[u8; 32]>` (auto-zeroize on drop)
/// - `Debug` only prints the public key
#[derive(Clone)]
pub struct KeyPair {
    private_key: Zeroizing<[u8; 32]>,
    public_key: [u8; 33],
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl KeyPair {
    pub(crate) fn from_secret_key(secret: &SecretKey) -> Self {
        let mut private_key = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&secret.to_bytes());
        Self {
            private_key,
            public_key: secp256k1::compressed_bytes(&secret.public_key()),
        }
    }

    /// Key pair from raw private key bytes.
    pub fn from_private_key(bytes: &[u8]) -> WalletResult<Self> {
        if bytes.len() != 32 {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            ))
            .into());
        }
        let secret = SecretKey::from_slice(bytes)
            .map_err(|_| CryptoError::InvalidPrivateKey("not a valid secp256k1 scalar".into()))?;
        Ok(Self::from_secret_key(&secret))
    }

    #[inline]
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// Hex private key (64 chars). Handle with care.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(*self.private_key))
    }

    /// SEC1 compressed public key.
    #[inline]
    pub fn public_key_bytes(&self) -> &[u8; 33] {
        &self.public_key
    }
}

// =============================================================================
// DERIVER
// =============================================================================
/// Derives Hycon account keys along `m/44'/1397'/0'/0/index`.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Key pair for `account_index` from a 64-byte seed
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `account_index` - last (non-hardened) path level
    pub fn derive(seed: &[u8], account_index: u32) -> WalletResult<KeyPair> {
        Self::validate_seed(seed)?;
        let master = HdNode::master_from_seed(seed)?;
        Self::derive_path(&master, account_index)
    }

    /// Walk the five fixed levels below `master`.
    pub fn derive_path(master: &HdNode, account_index: u32) -> WalletResult<KeyPair> {
        Self::derive_path_for(master, coin_type::HYCON, account_index)
    }

    /// `derive_path` with `coin` at the coin-type level.
    pub fn derive_path_for(
        master: &HdNode,
        coin: u32,
        account_index: u32,
    ) -> WalletResult<KeyPair> {
        let node = Self::walk(master, &DerivationPaths::levels_for(coin, account_index))?;
        node.key_pair()
    }

    /// Derive many indices (batch)
    ///
    /// The change node `m/44'/1397'/0'/0` is computed once, then fanned out.
    /// Equal to calling `derive` per index.
    pub fn derive_batch(
        seed: &[u8],
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<KeyPair>> {
        Self::validate_seed(seed)?;
        let master = HdNode::master_from_seed(seed)?;
        let change = Self::walk(&master, &DerivationPaths::change_levels())?;

        let mut keys = Vec::with_capacity(indices.len());
        for index in indices {
            keys.push(change.derive_child(index, false)?.key_pair()?);
        }
        Ok(keys)
    }

    fn walk(from: &HdNode, levels: &[(u32, bool)]) -> WalletResult<HdNode> {
        let mut node = from.clone();
        for &(index, hardened) in levels {
            node = node.derive_child(index, hardened)?;
            tracing::trace!(depth = node.depth(), index, hardened, "derived child");
        }
        Ok(node)
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(CryptoError::InvalidMasterKey.into());
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    // Seed of "ring crime symptom enough erupt lady behave ramp apart settle citizen junk"
    const TEST_MNEMONIC: &str =
        "ring crime symptom enough erupt lady behave ramp apart settle citizen junk";
    const TEST_PRIVATE_KEY_0: &str =
        "f35776c86f811d9ab1c66cadc0f503f519bf21898e589c2f26d646e472bfacb2";

    fn test_seed() -> Zeroizing<[u8; 64]> {
        crate::crypto::mnemonic::mnemonic_to_seed(TEST_MNEMONIC, "").unwrap()
    }

    #[test]
    fn test_derive_index_0_vector() {
        let key = KeyDeriver::derive(&*test_seed(), 0).unwrap();
        assert_eq!(key.private_key_hex().as_str(), TEST_PRIVATE_KEY_0);
        assert_eq!(
            hex::encode(key.public_key_bytes()),
            "02c4199d83e47650b854e027188eade5378d19c94c13b226f43310fb144bc224af"
        );
    }

    #[test]
    fn test_batch_matches_single() {
        let seed = test_seed();
        let batch = KeyDeriver::derive_batch(&*seed, 0..4).unwrap();
        assert_eq!(batch.len(), 4);

        for (i, batch_key) in batch.iter().enumerate() {
            let single = KeyDeriver::derive(&*seed, i as u32).unwrap();
            assert_eq!(
                batch_key.private_key_bytes(),
                single.private_key_bytes(),
                "Batch[{}] != Single[{}]",
                i,
                i
            );
        }
    }

    #[test]
    fn test_batch_keys_differ() {
        let keys = KeyDeriver::derive_batch(&*test_seed(), 0..5).unwrap();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i].private_key_bytes(), keys[j].private_key_bytes());
            }
        }
    }

    #[test]
    fn test_consistency() {
        let seed = test_seed();
        let k1 = KeyDeriver::derive(&*seed, 3).unwrap();
        let k2 = KeyDeriver::derive(&*seed, 3).unwrap();
        assert_eq!(k1.private_key_bytes(), k2.private_key_bytes());
        assert_eq!(k1.public_key_bytes(), k2.public_key_bytes());
    }

    #[test]
    fn test_coin_type_changes_key() {
        let master = HdNode::master_from_seed(&*test_seed()).unwrap();
        let hycon = KeyDeriver::derive_path_for(&master, coin_type::HYCON, 0).unwrap();
        assert_eq!(hycon.private_key_hex().as_str(), TEST_PRIVATE_KEY_0);

        let other = KeyDeriver::derive_path_for(&master, 0, 0).unwrap();
        assert_ne!(other.private_key_bytes(), hycon.private_key_bytes());
    }

    #[test]
    fn test_invalid_seed() {
        let bad_seed = [0u8; 32];
        assert_eq!(
            KeyDeriver::derive(&bad_seed, 0).unwrap_err(),
            WalletError::Crypto(CryptoError::InvalidMasterKey)
        );
    }

    #[test]
    fn test_from_private_key_rejects_zero() {
        assert!(matches!(
            KeyPair::from_private_key(&[0u8; 32]),
            Err(WalletError::Crypto(CryptoError::InvalidPrivateKey(_)))
        ));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key = KeyDeriver::derive(&*test_seed(), 0).unwrap();
        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains(TEST_PRIVATE_KEY_0));
    }
}
