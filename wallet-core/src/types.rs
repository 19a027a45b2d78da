// wallet-core/src/types.rs
//
// Values returned across the `api` boundary.

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Address and hex private key of one derived account.
///
/// # Security
/// - `private_key` is wiped on drop
/// - `Debug` prints only the address
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct WalletCredential {
    pub address: String,
    pub private_key: String,
}

impl std::fmt::Debug for WalletCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletCredential")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Signature `r || s` (hex) and recovery id (`"0"` or `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub signature: String,
    pub recovery: String,
}
