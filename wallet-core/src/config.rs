// wallet-core/src/config.rs
//
// Network configuration: what differs between Hycon networks.
// Address prefix, decimals and the BIP-39/BIP-32 constants are protocol
// constants and live next to the code that uses them.

use crate::crypto::paths::coin_type;
use crate::crypto::wordlist::Language;
use serde::{Deserialize, Serialize};

/// Network id signed into mainnet transactions.
pub const HYCON_NETWORK_ID: &str = "hycon";

/// Settings read by the `api::*_for` operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Display name (e.g., "Hycon Mainnet"), used in log events
    pub name: String,
    /// Network id included in signed transactions
    pub network_id: String,
    /// SLIP-44 coin type used in `m/44'/coin'/0'/0/index`
    pub coin_type: u32,
    /// Wordlist used when the requested language tag is blank
    #[serde(default)]
    pub default_language: Language,
}

impl NetworkConfig {
    /// Hycon mainnet.
    pub fn hycon() -> Self {
        Self {
            name: "Hycon Mainnet".to_string(),
            network_id: HYCON_NETWORK_ID.to_string(),
            coin_type: coin_type::HYCON,
            default_language: Language::English,
        }
    }

    /// Same settings, different network id.
    pub fn with_network_id(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = network_id.into();
        self
    }

    /// Language for `tag`; a blank tag selects `default_language`.
    pub fn language(&self, tag: &str) -> Language {
        if tag.trim().is_empty() {
            self.default_language
        } else {
            Language::from_tag(tag)
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::hycon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hycon_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.network_id, "hycon");
        assert_eq!(config.coin_type, 1397);
        assert_eq!(config.default_language, Language::English);
    }

    #[test]
    fn test_language_for_tag() {
        let config = NetworkConfig {
            default_language: Language::Korean,
            ..NetworkConfig::hycon()
        };
        assert_eq!(config.language(""), Language::Korean);
        assert_eq!(config.language("  "), Language::Korean);
        assert_eq!(config.language("ja"), Language::Japanese);
        // Unknown tags still fall back to English
        assert_eq!(config.language("klingon"), Language::English);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = NetworkConfig::hycon().with_network_id("testnet");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"networkId\":\"testnet\""));
        assert!(json.contains("\"coinType\":1397"));
        assert!(json.contains("\"defaultLanguage\":\"english\""));

        let parsed: NetworkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_language_defaults_to_english() {
        let json = r#"{
            "name": "Hycon Mainnet",
            "networkId": "hycon",
            "coinType": 1397
        }"#;
        let parsed: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, NetworkConfig::hycon());
    }
}
