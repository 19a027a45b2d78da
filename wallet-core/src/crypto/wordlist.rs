// wallet-core/src/crypto/wordlist.rs
//
// BIP-39 wordlists, selected by language tag.
// The 2048-word tables themselves come from the `bip39` crate.

use serde::{Deserialize, Serialize};

/// Number of words in every BIP-39 wordlist (2^11).
pub const WORDLIST_SIZE: usize = 2048;

/// Supported mnemonic languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Korean,
    Japanese,
    ChineseSimplified,
    ChineseTraditional,
    French,
    Italian,
    Spanish,
}

/// Tag -> language table. Lookups are case-insensitive; unknown tags use English.
const LANGUAGE_TAGS: &[(&str, Language)] = &[
    ("english", Language::English),
    ("en", Language::English),
    ("korean", Language::Korean),
    ("ko", Language::Korean),
    ("japanese", Language::Japanese),
    ("ja", Language::Japanese),
    ("chinese_simplified", Language::ChineseSimplified),
    ("zh-cn", Language::ChineseSimplified),
    ("chinese_traditional", Language::ChineseTraditional),
    ("zh-tw", Language::ChineseTraditional),
    ("french", Language::French),
    ("fr", Language::French),
    ("italian", Language::Italian),
    ("it", Language::Italian),
    ("spanish", Language::Spanish),
    ("es", Language::Spanish),
];

impl Language {
    /// Resolve a language tag such as `"english"` or `"ko"`.
    ///
    /// Never fails: an unrecognized tag selects [`Language::English`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        LANGUAGE_TAGS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, language)| *language)
            .unwrap_or_default()
    }

    /// The 2048 words of this language, in index order.
    #[inline]
    pub fn word_list(self) -> &'static [&'static str; WORDLIST_SIZE] {
        self.as_bip39().word_list()
    }

    /// Index of `word` in this language's list.
    pub fn find_word(self, word: &str) -> Option<u16> {
        self.word_list()
            .iter()
            .position(|candidate| *candidate == word)
            .map(|index| index as u16)
    }

    fn as_bip39(self) -> bip39::Language {
        match self {
            Language::English => bip39::Language::English,
            Language::Korean => bip39::Language::Korean,
            Language::Japanese => bip39::Language::Japanese,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Spanish => bip39::Language::Spanish,
        }
    }
}
