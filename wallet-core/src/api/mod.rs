// wallet-core/src/api/mod.rs
//
// Flat, string-in/string-out entry points for host applications (FFI, mobile).
// Every function is synchronous and returns `WalletResult`; nothing here logs secrets.
// The `*_for` variants take a `NetworkConfig`; the plain ones use Hycon mainnet.

use crate::chains::hycon::{amount, Address, HyconSigner, Transaction};
use crate::config::NetworkConfig;
use crate::crypto::key_deriver::{HdNode, KeyDeriver, KeyPair};
use crate::crypto::mnemonic::{self, WalletMnemonic, WordCount, SEED_LEN};
use crate::error::{WalletError, WalletResult};
use crate::types::{SignedTransaction, WalletCredential};
use zeroize::Zeroizing;

// --- Key Management ---

/// New 12-word mnemonic in the language named by `language_tag`.
///
/// Unknown tags use English.
pub fn generate_mnemonic(language_tag: &str) -> String {
    generate_mnemonic_for(&NetworkConfig::default(), language_tag)
}

/// As [`generate_mnemonic`]; a blank tag selects `config.default_language`.
pub fn generate_mnemonic_for(config: &NetworkConfig, language_tag: &str) -> String {
    let language = config.language(language_tag);
    let mnemonic = WalletMnemonic::generate(WordCount::Twelve, language);
    mnemonic.phrase().to_string()
}

/// 64-byte BIP-39 seed.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> WalletResult<Zeroizing<[u8; SEED_LEN]>> {
    mnemonic::mnemonic_to_seed(mnemonic, passphrase)
}

/// Account 0 (`m/44'/1397'/0'/0/0`) of a mnemonic.
pub fn create_wallet(mnemonic: &str, passphrase: &str) -> WalletResult<WalletCredential> {
    create_wallet_for(&NetworkConfig::default(), mnemonic, passphrase)
}

/// Account 0 at `m/44'/{config.coin_type}'/0'/0/0`.
pub fn create_wallet_for(
    config: &NetworkConfig,
    mnemonic: &str,
    passphrase: &str,
) -> WalletResult<WalletCredential> {
    let seed = mnemonic_to_seed(mnemonic, passphrase)?;
    let master = HdNode::master_from_seed(&*seed)?;
    let key_pair = KeyDeriver::derive_path_for(&master, config.coin_type, 0)?;
    let credential = credential(&key_pair);
    tracing::debug!(network = %config.name, address = %credential.address, "created wallet");
    Ok(credential)
}

/// Master `xprv` of a mnemonic.
pub fn create_extended_private_key(mnemonic: &str, passphrase: &str) -> WalletResult<Zeroizing<String>> {
    let seed = mnemonic_to_seed(mnemonic, passphrase)?;
    let master = HdNode::master_from_seed(&*seed)?;
    Ok(master.to_extended_string())
}

/// Account `index` below a master `xprv`.
///
/// An `xpub` parses but fails with `MissingPrivateKey` at the first hardened level.
pub fn derive_wallet_from_extended_key(extended_key: &str, index: u32) -> WalletResult<WalletCredential> {
    derive_wallet_from_extended_key_for(&NetworkConfig::default(), extended_key, index)
}

pub fn derive_wallet_from_extended_key_for(
    config: &NetworkConfig,
    extended_key: &str,
    index: u32,
) -> WalletResult<WalletCredential> {
    let master = HdNode::from_extended_str(extended_key)?;
    tracing::debug!(network = %config.name, depth = master.depth(), index, "deriving from extended key");
    let key_pair = KeyDeriver::derive_path_for(&master, config.coin_type, index)?;
    Ok(credential(&key_pair))
}

fn credential(key_pair: &KeyPair) -> WalletCredential {
    WalletCredential {
        address: Address::from_public_key(key_pair.public_key_bytes()).to_string(),
        private_key: key_pair.private_key_hex().to_string(),
    }
}

// --- Addresses ---

/// Address string of a serialized public key.
pub fn address_to_string(pub_key_bytes: &[u8]) -> String {
    Address::from_public_key(pub_key_bytes).to_string()
}

/// 20 address bytes of an address string.
pub fn string_to_address(s: &str) -> WalletResult<[u8; 20]> {
    let address: Address = s.parse()?;
    Ok(address.to_bytes())
}

// --- Amounts ---

/// Decimal HYC string to units of 10^-9.
pub fn amount_from_string(s: &str) -> WalletResult<u64> {
    amount::amount_from_string(s)
}

/// Units of 10^-9 to canonical decimal HYC string.
pub fn amount_to_string(value: u64) -> String {
    amount::format_amount(value)
}

// --- Signing ---

/// Sign a transfer for `config.network_id`.
pub fn sign_transaction_for(
    config: &NetworkConfig,
    from: &str,
    to: &str,
    amount: &str,
    fee: &str,
    nonce: u32,
    private_key_hex: &str,
) -> WalletResult<SignedTransaction> {
    sign_transaction(from, to, amount, fee, nonce, private_key_hex, &config.network_id)
}

/// Sign a transfer.
///
/// `amount` and `fee` are decimal HYC strings.
pub fn sign_transaction(
    from: &str,
    to: &str,
    amount: &str,
    fee: &str,
    nonce: u32,
    private_key_hex: &str,
    network_id: &str,
) -> WalletResult<SignedTransaction> {
    let from = parse_field("from", from)?;
    let to = parse_field("to", to)?;
    let amount = amount::amount_from_string(amount)?;
    let fee = amount::amount_from_string(fee)?;

    let signer = HyconSigner::from_hex(private_key_hex)?;
    let tx = Transaction::new(from, to, amount, fee, nonce);
    let signature = signer.sign_transaction(&tx, network_id)?;

    Ok(SignedTransaction {
        signature: signature.to_hex(),
        recovery: signature.recovery_id.to_string(),
    })
}

fn parse_field(field: &'static str, s: &str) -> WalletResult<Address> {
    s.parse()
        .map_err(|source| WalletError::InvalidAddress { field, source })
}
