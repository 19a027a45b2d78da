// wallet-core/src/crypto/kdf.rs
//
// PBKDF2 (PKCS #5 v2.0, scheme 2) over a pluggable HMAC.
// BIP-39 seeds use PBKDF2-HMAC-SHA512, 2048 iterations, 64-byte output.

use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};
use zeroize::{Zeroize, Zeroizing};

pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

/// Key and IV cut from one contiguous derived stream.
pub struct DerivedKeyIv {
    pub key: Zeroizing<Vec<u8>>,
    pub iv: Vec<u8>,
}

/// PBKDF2 parameters generator.
///
/// The PRF is any MAC that can be keyed with the password, normally
/// [`HmacSha512`]. The keyed MAC is computed once and cloned per block.
///
/// ```
/// use wallet_core::crypto::kdf::{HmacSha512, Pbkdf2};
///
/// let kdf = Pbkdf2::<HmacSha512>::new(b"password", b"salt", 2048).unwrap();
/// let key = kdf.derive_key(64);
/// assert_eq!(key.len(), 64);
/// ```
pub struct Pbkdf2<M: Mac + KeyInit + Clone> {
    prf: M,
    salt: Vec<u8>,
    iterations: u32,
}

impl<M: Mac + KeyInit + Clone> Pbkdf2<M> {
    pub fn new(password: &[u8], salt: &[u8], iterations: u32) -> WalletResult<Self> {
        if iterations == 0 {
            return Err(CryptoError::InvalidIterationCount.into());
        }
        let prf = <M as KeyInit>::new_from_slice(password)
            .map_err(|e| WalletError::Validation(format!("PRF rejected password: {}", e)))?;

        Ok(Self {
            prf,
            salt: salt.to_vec(),
            iterations,
        })
    }

    /// Derived key of `key_len` bytes.
    pub fn derive_key(&self, key_len: usize) -> Zeroizing<Vec<u8>> {
        let mut stream = self.derive_stream(key_len);
        stream.truncate(key_len);
        stream
    }

    /// Key of `key_len` bytes followed by an IV of `iv_len` bytes, both sliced
    /// from a single derivation of `key_len + iv_len` bytes.
    pub fn derive_key_with_iv(&self, key_len: usize, iv_len: usize) -> DerivedKeyIv {
        let stream = self.derive_stream(key_len + iv_len);
        DerivedKeyIv {
            key: Zeroizing::new(stream[..key_len].to_vec()),
            iv: stream[key_len..key_len + iv_len].to_vec(),
        }
    }

    /// Whole blocks covering `len` bytes.
    fn derive_stream(&self, len: usize) -> Zeroizing<Vec<u8>> {
        let block_len = M::output_size();
        let blocks = (len + block_len - 1) / block_len;
        let mut out = Zeroizing::new(vec![0u8; blocks * block_len]);

        for (i, chunk) in out.chunks_mut(block_len).enumerate() {
            self.fill_block(i as u32 + 1, chunk);
        }
        out
    }

    /// T_i = U_1 ^ U_2 ^ ... ^ U_c
    fn fill_block(&self, counter: u32, block: &mut [u8]) {
        let mut mac = self.prf.clone();
        mac.update(&self.salt);
        mac.update(&counter.to_be_bytes());
        let mut u = mac.finalize().into_bytes();
        block.copy_from_slice(&u);

        for _ in 1..self.iterations {
            let mut mac = self.prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            block.iter_mut().zip(u.iter()).for_each(|(b, x)| *b ^= x);
        }
        u.as_mut_slice().zeroize();
    }
}
