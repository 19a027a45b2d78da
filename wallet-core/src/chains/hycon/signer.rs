// wallet-core/src/chains/hycon/signer.rs
//
// Hycon Signer Module - Offline Transaction Signing
// BLAKE2b-256 digest, ECDSA secp256k1 (RFC 6979, low-s), recovery id 0/1

use super::address::Address;
use super::transaction::Transaction;
use crate::crypto::key_deriver::secp256k1::compressed_bytes;
use crate::error::{CryptoError, WalletResult};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use k256::PublicKey;
use zeroize::Zeroizing;

/// Recoverable signature over a 32-byte digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// `v - 27`, always 0 or 1.
    pub recovery_id: u8,
}

impl TxSignature {
    /// `r || s` as 128 hex chars.
    pub fn to_hex(&self) -> String {
        let mut rs = [0u8; 64];
        rs[..32].copy_from_slice(&self.r);
        rs[32..].copy_from_slice(&self.s);
        hex::encode(rs)
    }

    fn to_k256(self) -> WalletResult<(Signature, RecoveryId)> {
        let signature = Signature::from_scalars(self.r, self.s)
            .map_err(|e| CryptoError::InvalidSignature(format!("malformed r/s: {}", e)))?;
        let recovery_id = RecoveryId::from_byte(self.recovery_id).ok_or_else(|| {
            CryptoError::InvalidSignature(format!("recovery id {} out of range", self.recovery_id))
        })?;
        Ok((signature, recovery_id))
    }

    /// Address of the key that produced this signature over `hash`.
    pub fn recover_address(&self, hash: &[u8; 32]) -> WalletResult<Address> {
        let (signature, recovery_id) = self.to_k256()?;
        let verifying_key = VerifyingKey::recover_from_prehash(hash, &signature, recovery_id)
            .map_err(|e| CryptoError::InvalidSignature(format!("recovery failed: {}", e)))?;
        let public_key = PublicKey::from(&verifying_key);
        Ok(Address::from_public_key(&compressed_bytes(&public_key)))
    }
}

/// Hycon Signer - Offline signing with one private key
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: `SigningKey` wipes its scalar on drop
/// - **No Debug Leak**: custom `Debug` shows the address only
/// - **Network binding**: the network id is part of every signed digest
pub struct HyconSigner {
    signing_key: SigningKey,
    address: Address,
}

// Custom Debug - never prints the private key
impl std::fmt::Debug for HyconSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyconSigner")
            .field("address", &self.address.to_string())
            .finish_non_exhaustive()
    }
}

impl Drop for HyconSigner {
    fn drop(&mut self) {
        tracing::trace!(address = %self.address, "dropped signer");
    }
}

impl HyconSigner {
    // =========================================================================
    // CONSTRUCTOR
    // =========================================================================

    /// Signer from a 32-byte private key.
    pub fn new(priv_key: &[u8]) -> WalletResult<Self> {
        if priv_key.len() != 32 {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                priv_key.len()
            ))
            .into());
        }
        let signing_key = SigningKey::from_slice(priv_key).map_err(|e| {
            CryptoError::InvalidPrivateKey(format!("not a valid secp256k1 scalar: {}", e))
        })?;

        let public_key = PublicKey::from(signing_key.verifying_key());
        let address = Address::from_public_key(&compressed_bytes(&public_key));

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Signer from a 64-char hex private key.
    pub fn from_hex(priv_key_hex: &str) -> WalletResult<Self> {
        let bytes = Zeroizing::new(
            hex::decode(priv_key_hex)
                .map_err(|e| CryptoError::InvalidPrivateKey(format!("not hex: {}", e)))?,
        );
        Self::new(&bytes)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn address(&self) -> Address {
        self.address
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Sign `tx` for `network_id`.
    pub fn sign_transaction(&self, tx: &Transaction, network_id: &str) -> WalletResult<TxSignature> {
        let hash = tx.signing_hash(network_id);
        let signature = self.sign_hash(&hash)?;
        tracing::debug!(
            from = %tx.from,
            to = %tx.to,
            nonce = tx.nonce,
            network_id,
            "signed transaction"
        );
        Ok(signature)
    }

    /// Sign a 32-byte digest directly.
    ///
    /// # Warning
    /// Only for digests produced by the matching hash function.
    pub fn sign_hash(&self, hash: &[u8; 32]) -> WalletResult<TxSignature> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(hash)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&signature.r().to_bytes());
        s.copy_from_slice(&signature.s().to_bytes());

        Ok(TxSignature {
            r,
            s,
            recovery_id: recovery_id.to_byte(),
        })
    }

    // =========================================================================
    // SIGNATURE VERIFICATION
    // =========================================================================

    /// Whether `signature` over `hash` was made by this signer's key.
    pub fn verify(&self, hash: &[u8; 32], signature: &TxSignature) -> bool {
        let Ok((sig, _)) = signature.to_k256() else {
            return false;
        };
        self.signing_key
            .verifying_key()
            .verify_prehash(hash, &sig)
            .is_ok()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
