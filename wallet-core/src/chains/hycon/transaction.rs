// wallet-core/src/chains/hycon/transaction.rs
//
// Transaction wire form (proto3) and hashing.
//
// message Tx {
//     bytes  from      = 1;
//     bytes  to        = 2;
//     uint64 amount    = 3;
//     uint64 fee       = 4;
//     uint32 nonce     = 5;
//     string networkid = 10;
// }

use super::address::Address;
use crate::crypto::hash::blake2b_256;
use prost::Message;

/// Protobuf message behind [`Transaction`]. Zero/empty fields are omitted.
#[derive(Clone, PartialEq, Message)]
pub struct TxProto {
    #[prost(bytes = "vec", tag = "1")]
    pub from: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub to: Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub amount: u64,
    #[prost(uint64, tag = "4")]
    pub fee: u64,
    #[prost(uint32, tag = "5")]
    pub nonce: u32,
    #[prost(string, tag = "10")]
    pub networkid: String,
}

/// Unsigned transfer between two addresses. Amount and fee are in units of 10^-9 HYC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
    pub fee: u64,
    pub nonce: u32,
}

impl Transaction {
    pub fn new(from: Address, to: Address, amount: u64, fee: u64, nonce: u32) -> Self {
        Self {
            from,
            to,
            amount,
            fee,
            nonce,
        }
    }

    fn to_proto(&self, network_id: &str) -> TxProto {
        TxProto {
            from: self.from.as_bytes().to_vec(),
            to: self.to.as_bytes().to_vec(),
            amount: self.amount,
            fee: self.fee,
            nonce: self.nonce,
            networkid: network_id.to_string(),
        }
    }

    /// First-pass encoding, without a network id.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        self.to_proto("").encode_to_vec()
    }

    /// Encoding that is hashed and signed for `network_id`.
    pub fn signing_bytes(&self, network_id: &str) -> Vec<u8> {
        self.to_proto(network_id).encode_to_vec()
    }

    /// BLAKE2b-256 of the first-pass encoding.
    pub fn hash(&self) -> [u8; 32] {
        blake2b_256(&self.unsigned_bytes())
    }

    /// BLAKE2b-256 of [`signing_bytes`](Self::signing_bytes).
    pub fn signing_hash(&self, network_id: &str) -> [u8; 32] {
        blake2b_256(&self.signing_bytes(network_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: &str = "H3N2sCstx81NvvVy3hkrhGsNS43834YWw";
    const TO: &str = "H497fHm8gbPZxaXySKpV17a7beYBF9Ut3";
    const SIGNING_BYTES: &str = "0a14a9961e18748b1b76e3ebfaef491cef3ab2d5bb081214e161124d4aa41ca0df6bafecb0408971cff6c0961801200128800852056879636f6e";
    const SIGNING_HASH: &str = "c3f92350f0baf80f2fa41f9e6bb3287e1802808b9fa7464cf2beb463b9b05626";

    fn test_tx() -> Transaction {
        Transaction::new(FROM.parse().unwrap(), TO.parse().unwrap(), 1, 1, 1024)
    }

    #[test]
    fn test_signing_bytes_vector() {
        let tx = test_tx();
        assert_eq!(hex::encode(tx.signing_bytes("hycon")), SIGNING_BYTES);
        assert_eq!(hex::encode(tx.signing_hash("hycon")), SIGNING_HASH);
    }

    #[test]
    fn test_unsigned_bytes_omit_network() {
        let tx = test_tx();
        let unsigned = tx.unsigned_bytes();
        // signing form = first-pass form + field 10 ("hycon")
        assert_eq!(hex::encode(&unsigned), &SIGNING_BYTES[..SIGNING_BYTES.len() - 14]);
        assert_eq!(tx.signing_bytes(""), unsigned);
        assert_eq!(tx.hash(), blake2b_256(&unsigned));
    }

    #[test]
    fn test_zero_fields_omitted() {
        let tx = Transaction::new(FROM.parse().unwrap(), TO.parse().unwrap(), 0, 0, 0);
        // two length-delimited 20-byte fields only
        assert_eq!(tx.unsigned_bytes().len(), 2 * (2 + 20));
    }

    #[test]
    fn test_decodes_as_proto() {
        let tx = test_tx();
        let decoded = TxProto::decode(tx.signing_bytes("hycon").as_slice()).unwrap();
        assert_eq!(decoded.amount, 1);
        assert_eq!(decoded.nonce, 1024);
        assert_eq!(decoded.networkid, "hycon");
        assert_eq!(decoded.from, tx.from.as_bytes().to_vec());
    }
}
