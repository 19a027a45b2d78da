use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Address Error: {0}")]
    Address(#[from] AddressError),

    #[error("Invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        #[source]
        source: AddressError,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid entropy length: {0} bits. Expected 128-256 bits in multiples of 32.")]
    InvalidEntropyLength(usize),

    #[error("Mnemonic is required to generate a seed.")]
    EmptyMnemonic,

    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Iteration count must be at least 1.")]
    InvalidIterationCount,

    #[error("Master key derived from seed is not a valid secp256k1 scalar.")]
    InvalidMasterKey,

    #[error("Child derivation at index {0:#x} produced an invalid key; retry with the next index.")]
    DerivationOverflow(u32),

    #[error("Hardened derivation requires a private key.")]
    MissingPrivateKey,

    #[error("Invalid extended key: {0}")]
    InvalidExtendedKey(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must start with 'H', found {0:?}.")]
    InvalidAddressPrefix(Option<char>),

    #[error("Address payload must be 20 bytes, got {0}.")]
    InvalidAddressLength(usize),

    #[error("Address checksum mismatch: computed '{computed}', expected '{expected}'.")]
    ChecksumMismatch { computed: String, expected: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base58Error {
    #[error("Invalid Base58: {0}")]
    InvalidCharacter(String),

    #[error("Base58Check data too short for checksum ({0} bytes).")]
    TooShort(usize),

    #[error("Base58Check checksum mismatch.")]
    ChecksumMismatch,
}
