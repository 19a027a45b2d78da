// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
//
// ┌──────────────┐  HMAC-SHA512("Bitcoin seed", seed)
// │  Seed (64B)  │ ─────────────────────────────────▶ master (IL = key, IR = chain code)
// └──────────────┘
//   CKDpriv: HMAC-SHA512(c, 0x00 || k || i)   hardened
//            HMAC-SHA512(c, K || i)           normal
//   CKDpub:  HMAC-SHA512(c, K || i)           normal only

use super::KeyPair;
use crate::crypto::base58;
use crate::crypto::hash::hash160;
use crate::crypto::kdf::HmacSha512;
use crate::crypto::paths::HARDENED_BIT;
use crate::error::{CryptoError, WalletResult};
use hmac::Mac;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, NonZeroScalar, ProjectivePoint, PublicKey, Scalar, SecretKey};
use zeroize::Zeroizing;

/// HMAC key for the master node.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Mainnet private extended key version (`xprv`).
pub const XPRV_VERSION: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];
/// Mainnet public extended key version (`xpub`).
pub const XPUB_VERSION: [u8; 4] = [0x04, 0x88, 0xB2, 0x1E];

/// Serialized extended key length (before the Base58Check checksum).
pub const EXTENDED_KEY_LEN: usize = 78;

/// One node of the BIP-32 tree.
///
/// Nodes are immutable: `derive_child` and `neuter` return new values.
///
/// # Security
/// - `SecretKey` zeroizes itself on drop; the chain code sits in `Zeroizing`.
/// - `Debug` prints only public metadata.
#[derive(Clone)]
pub struct HdNode {
    private_key: Option<SecretKey>,
    public_key: PublicKey,
    chain_code: Zeroizing<[u8; 32]>,
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
}

impl std::fmt::Debug for HdNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdNode")
            .field("depth", &self.depth)
            .field("child_number", &self.child_number)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("has_private_key", &self.private_key.is_some())
            .finish_non_exhaustive()
    }
}

impl HdNode {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Master node from a BIP-39 seed.
    pub fn master_from_seed(seed: &[u8]) -> WalletResult<Self> {
        let mut mac =
            HmacSha512::new_from_slice(MASTER_HMAC_KEY).map_err(|_| CryptoError::InvalidMasterKey)?;
        mac.update(seed);
        let i = split_hmac(mac);

        let private_key = SecretKey::from_bytes(FieldBytes::from_slice(&i[..32]))
            .map_err(|_| CryptoError::InvalidMasterKey)?;

        let mut chain_code = Zeroizing::new([0u8; 32]);
        chain_code.copy_from_slice(&i[32..]);

        Ok(Self {
            public_key: private_key.public_key(),
            private_key: Some(private_key),
            chain_code,
            depth: 0,
            parent_fingerprint: [0; 4],
            child_number: 0,
        })
    }

    // =========================================================================
    // DERIVATION
    // =========================================================================

    /// Child at `index`; `hardened` sets bit 31.
    ///
    /// An index that already carries bit 31 is treated as hardened.
    /// Returns `DerivationOverflow` for the (~2^-127) invalid children; the
    /// caller decides whether to move to the next index.
    pub fn derive_child(&self, index: u32, hardened: bool) -> WalletResult<Self> {
        let child_number = if hardened { index | HARDENED_BIT } else { index };
        let hardened = child_number & HARDENED_BIT != 0;

        let depth = self
            .depth
            .checked_add(1)
            .ok_or(CryptoError::DerivationOverflow(child_number))?;

        let mut mac = HmacSha512::new_from_slice(self.chain_code.as_slice())
            .map_err(|_| CryptoError::DerivationOverflow(child_number))?;
        if hardened {
            let secret = self
                .private_key
                .as_ref()
                .ok_or(CryptoError::MissingPrivateKey)?;
            mac.update(&[0u8]);
            mac.update(&secret.to_bytes());
        } else {
            mac.update(&self.public_key_bytes());
        }
        mac.update(&child_number.to_be_bytes());
        let i = split_hmac(mac);

        let tweak: Scalar =
            Option::from(Scalar::from_repr(*FieldBytes::from_slice(&i[..32])))
                .ok_or(CryptoError::DerivationOverflow(child_number))?;

        let (private_key, public_key) = match &self.private_key {
            Some(parent) => {
                let child = tweak + *parent.to_nonzero_scalar();
                let child: NonZeroScalar = Option::from(NonZeroScalar::new(child))
                    .ok_or(CryptoError::DerivationOverflow(child_number))?;
                let secret = SecretKey::from(child);
                let public = secret.public_key();
                (Some(secret), public)
            }
            None => {
                let point = ProjectivePoint::GENERATOR * tweak + self.public_key.to_projective();
                let public = PublicKey::from_affine(point.to_affine())
                    .map_err(|_| CryptoError::DerivationOverflow(child_number))?;
                (None, public)
            }
        };

        let mut chain_code = Zeroizing::new([0u8; 32]);
        chain_code.copy_from_slice(&i[32..]);

        Ok(Self {
            private_key,
            public_key,
            chain_code,
            depth,
            parent_fingerprint: self.fingerprint(),
            child_number,
        })
    }

    /// Same node without the private key.
    pub fn neuter(&self) -> Self {
        Self {
            private_key: None,
            ..self.clone()
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn child_number(&self) -> u32 {
        self.child_number
    }

    #[inline]
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        self.private_key.is_some()
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// SEC1 compressed public key (33 bytes).
    pub fn public_key_bytes(&self) -> [u8; 33] {
        compressed_bytes(&self.public_key)
    }

    /// First 4 bytes of HASH160(compressed public key).
    pub fn fingerprint(&self) -> [u8; 4] {
        let mut fp = [0u8; 4];
        fp.copy_from_slice(&hash160(&self.public_key_bytes())[..4]);
        fp
    }

    /// Private/public key pair of this node. Fails on neutered nodes.
    pub fn key_pair(&self) -> WalletResult<KeyPair> {
        let secret = self
            .private_key
            .as_ref()
            .ok_or(CryptoError::MissingPrivateKey)?;
        Ok(KeyPair::from_secret_key(secret))
    }

    // =========================================================================
    // EXTENDED KEY SERIALIZATION
    // =========================================================================

    /// `xprv...` for private nodes, `xpub...` for public ones.
    pub fn to_extended_string(&self) -> Zeroizing<String> {
        let mut payload = Zeroizing::new([0u8; EXTENDED_KEY_LEN]);
        let version = if self.is_private() {
            XPRV_VERSION
        } else {
            XPUB_VERSION
        };

        payload[0..4].copy_from_slice(&version);
        payload[4] = self.depth;
        payload[5..9].copy_from_slice(&self.parent_fingerprint);
        payload[9..13].copy_from_slice(&self.child_number.to_be_bytes());
        payload[13..45].copy_from_slice(self.chain_code.as_slice());
        match &self.private_key {
            Some(secret) => {
                payload[45] = 0;
                payload[46..78].copy_from_slice(&secret.to_bytes());
            }
            None => payload[45..78].copy_from_slice(&self.public_key_bytes()),
        }

        Zeroizing::new(base58::check_encode(payload.as_slice()))
    }

    /// Parse `xprv...` / `xpub...`.
    ///
    /// # Validation
    /// - Base58Check checksum, 78-byte payload
    /// - Version (mainnet xprv / xpub)
    /// - Depth 0 implies zero parent fingerprint and child number
    /// - Key prefix (0x00 private, 0x02/0x03 public) and key validity
    pub fn from_extended_str(s: &str) -> WalletResult<Self> {
        let payload = Zeroizing::new(
            base58::check_decode(s.trim())
                .map_err(|e| CryptoError::InvalidExtendedKey(e.to_string()))?,
        );

        if payload.len() != EXTENDED_KEY_LEN {
            return Err(CryptoError::InvalidExtendedKey(format!(
                "payload must be {} bytes, got {}",
                EXTENDED_KEY_LEN,
                payload.len()
            ))
            .into());
        }

        let version = &payload[0..4];
        let depth = payload[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&payload[5..9]);
        let child_number = u32::from_be_bytes([payload[9], payload[10], payload[11], payload[12]]);

        if depth == 0 && (parent_fingerprint != [0; 4] || child_number != 0) {
            return Err(
                CryptoError::InvalidExtendedKey("master key with non-zero parent".into()).into(),
            );
        }

        let mut chain_code = Zeroizing::new([0u8; 32]);
        chain_code.copy_from_slice(&payload[13..45]);
        let key = &payload[45..78];

        let (private_key, public_key) = if version == XPRV_VERSION {
            if key[0] != 0 {
                return Err(
                    CryptoError::InvalidExtendedKey("private key prefix must be 0x00".into())
                        .into(),
                );
            }
            let secret = SecretKey::from_bytes(FieldBytes::from_slice(&key[1..]))
                .map_err(|_| CryptoError::InvalidExtendedKey("private key out of range".into()))?;
            let public = secret.public_key();
            (Some(secret), public)
        } else if version == XPUB_VERSION {
            if key[0] != 0x02 && key[0] != 0x03 {
                return Err(CryptoError::InvalidExtendedKey(
                    "public key must be compressed".into(),
                )
                .into());
            }
            let public = PublicKey::from_sec1_bytes(key)
                .map_err(|_| CryptoError::InvalidExtendedKey("public key not on curve".into()))?;
            (None, public)
        } else {
            return Err(CryptoError::InvalidExtendedKey(format!(
                "unknown version {}",
                hex::encode(version)
            ))
            .into());
        };

        Ok(Self {
            private_key,
            public_key,
            chain_code,
            depth,
            parent_fingerprint,
            child_number,
        })
    }
}

/// SEC1 compressed encoding.
pub(crate) fn compressed_bytes(public_key: &PublicKey) -> [u8; 33] {
    let mut out = [0u8; 33];
    out.copy_from_slice(public_key.to_encoded_point(true).as_bytes());
    out
}

fn split_hmac(mac: HmacSha512) -> Zeroizing<[u8; 64]> {
    let mut i = Zeroizing::new([0u8; 64]);
    i.copy_from_slice(&mac.finalize().into_bytes());
    i
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    // BIP-32 test vector 1
    const TV1_SEED: &str = "000102030405060708090a0b0c0d0e0f";
    const TV1_M_XPRV: &str = "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi";
    const TV1_M_XPUB: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";
    const TV1_M0H_XPRV: &str = "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7";
    const TV1_M0H_XPUB: &str = "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw";

    // Seed of "length segment syrup visa lava beach rain crush false reveal alone olympic"
    const HYCON_SEED: &str = "3004383fca206432bac44b9ee6a3db0302421b4eaa5ce53e29cc837d47a8143ec0d809982935cb2b4b664b2a922f5b7d8c431bd0a38341b60eafc76b8561529d";
    const HYCON_MASTER_XPRV: &str = "xprv9s21ZrQH143K2gffZBzfnUUUjR5MfiQKNj1xXfwuHtxu7yzAPTMC6Gr6D5Krx2nPWVHoe6xDFTV6h6A2oZqXd5DbQowofFLS2fuk2RaU4tE";

    // =========================================================================
    // MASTER / SERIALIZATION
    // =========================================================================

    #[test]
    fn test_master_bip32_vector() {
        let seed = hex::decode(TV1_SEED).unwrap();
        let master = HdNode::master_from_seed(&seed).unwrap();
        assert_eq!(master.to_extended_string().as_str(), TV1_M_XPRV);
        assert_eq!(master.neuter().to_extended_string().as_str(), TV1_M_XPUB);
    }

    #[test]
    fn test_master_hycon_vector() {
        let seed = hex::decode(HYCON_SEED).unwrap();
        let master = HdNode::master_from_seed(&seed).unwrap();
        assert_eq!(master.depth(), 0);
        assert_eq!(master.to_extended_string().as_str(), HYCON_MASTER_XPRV);
    }

    #[test]
    fn test_hardened_child_vector() {
        let seed = hex::decode(TV1_SEED).unwrap();
        let child = HdNode::master_from_seed(&seed)
            .unwrap()
            .derive_child(0, true)
            .unwrap();
        assert_eq!(child.depth(), 1);
        assert_eq!(child.child_number(), HARDENED_BIT);
        assert_eq!(child.to_extended_string().as_str(), TV1_M0H_XPRV);
        assert_eq!(child.neuter().to_extended_string().as_str(), TV1_M0H_XPUB);
    }

    #[test]
    fn test_extended_roundtrip() {
        for s in [TV1_M_XPRV, TV1_M_XPUB, TV1_M0H_XPRV, TV1_M0H_XPUB] {
            let node = HdNode::from_extended_str(s).unwrap();
            assert_eq!(node.to_extended_string().as_str(), s);
        }
    }

    #[test]
    fn test_parsed_xpub_is_public_only() {
        let node = HdNode::from_extended_str(TV1_M_XPUB).unwrap();
        assert!(!node.is_private());
        assert!(matches!(
            node.key_pair(),
            Err(WalletError::Crypto(CryptoError::MissingPrivateKey))
        ));
    }

    #[test]
    fn test_from_extended_str_rejects_garbage() {
        assert!(matches!(
            HdNode::from_extended_str("xprv-not-base58"),
            Err(WalletError::Crypto(CryptoError::InvalidExtendedKey(_)))
        ));

        // Valid Base58Check, wrong length
        let short = base58::check_encode(&XPRV_VERSION);
        assert!(matches!(
            HdNode::from_extended_str(&short),
            Err(WalletError::Crypto(CryptoError::InvalidExtendedKey(_)))
        ));
    }

    #[test]
    fn test_from_extended_str_rejects_unknown_version() {
        let node = HdNode::from_extended_str(TV1_M_XPRV).unwrap();
        let mut payload = base58::check_decode(&node.to_extended_string()).unwrap();
        payload[0..4].copy_from_slice(&[0x04, 0x35, 0x83, 0x94]); // tprv
        let tampered = base58::check_encode(&payload);
        assert!(matches!(
            HdNode::from_extended_str(&tampered),
            Err(WalletError::Crypto(CryptoError::InvalidExtendedKey(_)))
        ));
    }

    #[test]
    fn test_from_extended_str_rejects_bad_private_prefix() {
        let mut payload = base58::check_decode(TV1_M_XPRV).unwrap();
        payload[45] = 0x01;
        let tampered = base58::check_encode(&payload);
        assert!(HdNode::from_extended_str(&tampered).is_err());
    }

    #[test]
    fn test_from_extended_str_rejects_orphan_master() {
        let mut payload = base58::check_decode(TV1_M_XPRV).unwrap();
        payload[5] = 0xff; // parent fingerprint on a depth-0 key
        let tampered = base58::check_encode(&payload);
        assert!(HdNode::from_extended_str(&tampered).is_err());
    }

    // =========================================================================
    // DERIVATION
    // =========================================================================

    #[test]
    fn test_public_derivation_matches_private() {
        let seed = hex::decode(TV1_SEED).unwrap();
        let parent = HdNode::master_from_seed(&seed)
            .unwrap()
            .derive_child(0, true)
            .unwrap();

        let via_private = parent.derive_child(1, false).unwrap().neuter();
        let via_public = parent.neuter().derive_child(1, false).unwrap();

        assert_eq!(via_private.public_key_bytes(), via_public.public_key_bytes());
        assert_eq!(
            via_private.to_extended_string().as_str(),
            via_public.to_extended_string().as_str()
        );
    }

    #[test]
    fn test_hardened_from_public_fails() {
        let seed = hex::decode(TV1_SEED).unwrap();
        let public = HdNode::master_from_seed(&seed).unwrap().neuter();
        assert_eq!(
            public.derive_child(0, true).unwrap_err(),
            WalletError::Crypto(CryptoError::MissingPrivateKey)
        );
    }

    #[test]
    fn test_derive_past_max_depth_fails() {
        let mut payload = base58::check_decode(TV1_M0H_XPRV).unwrap();
        payload[4] = u8::MAX;
        let deepest = HdNode::from_extended_str(&base58::check_encode(&payload)).unwrap();
        assert_eq!(deepest.depth(), 255);
        assert_eq!(
            deepest.derive_child(7, true).unwrap_err(),
            WalletError::Crypto(CryptoError::DerivationOverflow(7 | HARDENED_BIT))
        );
    }

    #[test]
    fn test_index_with_hardened_bit() {
        let seed = hex::decode(TV1_SEED).unwrap();
        let master = HdNode::master_from_seed(&seed).unwrap();
        let a = master.derive_child(HARDENED_BIT, false).unwrap();
        let b = master.derive_child(0, true).unwrap();
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_fingerprint_links_parent() {
        let seed = hex::decode(HYCON_SEED).unwrap();
        let master = HdNode::master_from_seed(&seed).unwrap();
        let child = master.derive_child(44, true).unwrap();
        assert_eq!(child.parent_fingerprint(), master.fingerprint());
    }

    #[test]
    fn test_matches_bip32_crate() {
        let seed = hex::decode(HYCON_SEED).unwrap();
        let path: bip32::DerivationPath = "m/44'/1397'/0'/0/0".parse().unwrap();
        let reference = bip32::XPrv::derive_from_path(&seed, &path).unwrap();

        let mut node = HdNode::master_from_seed(&seed).unwrap();
        for (index, hardened) in crate::crypto::paths::DerivationPaths::levels(0) {
            node = node.derive_child(index, hardened).unwrap();
        }

        let ours = node.key_pair().unwrap();
        let theirs: [u8; 32] = reference.private_key().to_bytes().into();
        assert_eq!(ours.private_key_bytes(), &theirs);
        assert_eq!(
            node.to_extended_string().as_str(),
            reference.to_string(bip32::Prefix::XPRV).as_str()
        );
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let seed = hex::decode(TV1_SEED).unwrap();
        let master = HdNode::master_from_seed(&seed).unwrap();
        let debug_output = format!("{:?}", master);
        assert!(debug_output.contains("has_private_key: true"));
        assert!(!debug_output.contains("chain_code"));
    }
}
