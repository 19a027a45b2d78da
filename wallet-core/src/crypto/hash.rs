// wallet-core/src/crypto/hash.rs
//
// Digest helpers shared by the mnemonic, HD and address code.
// BLAKE2b-256 is the keyless 256-bit hash used for addresses and transaction hashes.

use blake2::{digest::consts::U32, Blake2b, Digest};
use ripemd::Ripemd160;
use sha2::Sha256;

type Blake2b256 = Blake2b<U32>;

/// BLAKE2b with a 32-byte output (no key, no personalization).
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256(SHA-256(data)), the Base58Check checksum hash.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160(SHA-256(data)), used for BIP-32 key fingerprints.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake2b_256_public_key() {
        let input =
            hex::decode("02c4199d83e47650b854e027188eade5378d19c94c13b226f43310fb144bc224af")
                .unwrap();
        assert_eq!(
            hex::encode(blake2b_256(&input)),
            "dafec57d0062e2317f6d0f294366e2a531a891233fd59cfa5f062a0f1018af6a"
        );
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash160_length() {
        assert_eq!(hash160(b"hycon").len(), 20);
        assert_ne!(hash160(b"hycon"), hash160(b"hycon "));
    }
}
