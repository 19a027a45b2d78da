// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 encoding, validation and seed derivation
// Entropy -> words: SHA-256 checksum, 11 bits per word
// Words -> seed: PBKDF2-HMAC-SHA512, 2048 iterations, salt "mnemonic" || passphrase

use super::hash::sha256;
use super::kdf::{HmacSha512, Pbkdf2};
use super::wordlist::Language;
use crate::error::{MnemonicError, WalletResult};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// PBKDF2 iterations for seed derivation.
pub const SEED_ITERATIONS: u32 = 2048;
/// Seed length in bytes (512 bits).
pub const SEED_LEN: usize = 64;
/// Salt prefix prepended to the passphrase.
pub const SALT_PREFIX: &str = "mnemonic";

const BITS_PER_WORD: usize = 11;

/// Supported word counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Entropy bytes needed for this word count
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub const fn from_words(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// BIP-39 mnemonic phrase.
///
/// # Security
/// - The phrase is overwritten with zeros on drop.
/// - Entropy is drawn from `OsRng` into a stack buffer and zeroized right after encoding.
/// - `Debug` never prints the phrase.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
    #[zeroize(skip)]
    language: Language,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("language", &self.language)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// New 12-word English mnemonic (128-bit entropy).
    pub fn new() -> Self {
        Self::generate(WordCount::Twelve, Language::English)
    }

    /// New mnemonic with fresh OS entropy.
    pub fn generate(word_count: WordCount, language: Language) -> Self {
        let entropy_size = word_count.entropy_bytes();

        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let phrase = encode_words(&entropy[..entropy_size], language);
        entropy.zeroize();

        tracing::debug!(
            word_count = word_count as usize,
            ?language,
            "generated mnemonic"
        );

        Self {
            phrase,
            word_count: word_count as usize,
            language,
        }
    }

    /// Encode caller-supplied entropy.
    ///
    /// Entropy must be 128-256 bits and a multiple of 32 bits.
    pub fn from_entropy(entropy: &[u8], language: Language) -> WalletResult<Self> {
        let bits = entropy.len() * 8;
        if !(128..=256).contains(&bits) || bits % 32 != 0 {
            return Err(MnemonicError::InvalidEntropyLength(bits).into());
        }

        let phrase = encode_words(entropy, language);
        Ok(Self {
            phrase,
            word_count: (bits + bits / 32) / BITS_PER_WORD,
            language,
        })
    }

    /// Restore from an existing phrase.
    ///
    /// # Validation
    /// - Word count (12, 15, 18, 21, 24)
    /// - Every word is in the wordlist of `language`
    /// - Checksum
    pub fn from_phrase(phrase: &str, language: Language) -> WalletResult<Self> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();

        if WordCount::from_words(count).is_none() {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        // Validation only, entropy is dropped (and zeroed) immediately
        decode_entropy(&words, language)?;

        Ok(Self {
            phrase: words.join(" "),
            word_count: count,
            language,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The phrase. Careful when displaying or logging it.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        self.word_count * BITS_PER_WORD * 32 / 33
    }

    /// Entropy the phrase encodes.
    pub fn to_entropy(&self) -> WalletResult<Zeroizing<Vec<u8>>> {
        decode_entropy(&self.words(), self.language)
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte seed for `passphrase` (use `""` for none).
    pub fn to_seed(&self, passphrase: &str) -> WalletResult<Zeroizing<[u8; SEED_LEN]>> {
        mnemonic_to_seed(&self.phrase, passphrase)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum.
    #[inline]
    pub fn validate(phrase: &str, language: Language) -> bool {
        Self::from_phrase(phrase, language).is_ok()
    }

    pub fn is_valid_word(word: &str, language: Language) -> bool {
        language.find_word(word).is_some()
    }
}

impl Default for WalletMnemonic {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed from a phrase and passphrase (PBKDF2-HMAC-SHA512).
///
/// The phrase is used as-is; words are not checked against any wordlist, so
/// phrases from other wallets still produce their seed. Only a blank phrase
/// is rejected.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> WalletResult<Zeroizing<[u8; SEED_LEN]>> {
    if mnemonic.trim().is_empty() {
        return Err(MnemonicError::EmptyMnemonic.into());
    }

    let salt = Zeroizing::new(format!("{}{}", SALT_PREFIX, passphrase));
    let kdf = Pbkdf2::<HmacSha512>::new(mnemonic.as_bytes(), salt.as_bytes(), SEED_ITERATIONS)?;
    let derived = kdf.derive_key(SEED_LEN);

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    seed.copy_from_slice(&derived);
    Ok(seed)
}

// =============================================================================
// BIT PACKING
// =============================================================================

/// Caller guarantees a valid entropy length.
fn encode_words(entropy: &[u8], language: Language) -> String {
    let total_bits = entropy.len() * 8 + entropy.len() / 4;

    // entropy || first checksum byte; only the top ENT/32 bits of it are read
    let mut data = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    data.extend_from_slice(entropy);
    data.push(sha256(entropy)[0]);

    let word_list = language.word_list();
    (0..total_bits / BITS_PER_WORD)
        .map(|i| word_list[read_index(&data, i * BITS_PER_WORD)])
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_index(data: &[u8], bit_offset: usize) -> usize {
    (bit_offset..bit_offset + BITS_PER_WORD).fold(0, |acc, bit| {
        let set = (data[bit / 8] >> (7 - bit % 8)) & 1;
        (acc << 1) | set as usize
    })
}

fn decode_entropy(words: &[&str], language: Language) -> WalletResult<Zeroizing<Vec<u8>>> {
    let total_bits = words.len() * BITS_PER_WORD;
    let checksum_bits = total_bits / 33;
    let entropy_bits = total_bits - checksum_bits;

    let mut data = Zeroizing::new(vec![0u8; (total_bits + 7) / 8]);
    for (i, word) in words.iter().enumerate() {
        let index = language
            .find_word(word)
            .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))?;
        for j in 0..BITS_PER_WORD {
            if (index >> (BITS_PER_WORD - 1 - j)) & 1 == 1 {
                let bit = i * BITS_PER_WORD + j;
                data[bit / 8] |= 0x80 >> (bit % 8);
            }
        }
    }

    let entropy = Zeroizing::new(data[..entropy_bits / 8].to_vec());
    let shift = 8 - checksum_bits;
    if sha256(&entropy)[0] >> shift != data[entropy_bits / 8] >> shift {
        return Err(MnemonicError::ChecksumFailed.into());
    }

    Ok(entropy)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
