// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - Hycon account path
// BIP-44 (Purpose), SLIP-44 (Coin Type 1397)

// =============================================================================
// CONSTANTS
// =============================================================================
/// Bit marking a hardened child index.
pub const HARDENED_BIT: u32 = 0x8000_0000;

/// BIP-44 purpose level.
pub const PURPOSE: u32 = 44;

/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const HYCON: u32 = 1397;
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Hycon derivation path: `m/44'/1397'/0'/0/index`
///
/// Account and change are fixed at 0; only the address index varies.
pub struct DerivationPaths;

impl DerivationPaths {
    pub const HYCON_0: &'static str = "m/44'/1397'/0'/0/0";

    /// Number of levels below the master node.
    pub const DEPTH: usize = 5;

    /// Path string for an address index
    #[inline]
    pub fn hycon(index: u32) -> String {
        Self::format(&Self::levels(index))
    }

    /// `(index, hardened)` for each level, master first.
    pub const fn levels(index: u32) -> [(u32, bool); Self::DEPTH] {
        Self::levels_for(coin_type::HYCON, index)
    }

    /// Same five levels with another coin type at level 2.
    pub const fn levels_for(coin: u32, index: u32) -> [(u32, bool); Self::DEPTH] {
        let change = Self::change_levels_for(coin);
        [change[0], change[1], change[2], change[3], (index, false)]
    }

    /// The change-level prefix (`m/44'/1397'/0'/0`) shared by every address index.
    pub const fn change_levels() -> [(u32, bool); Self::DEPTH - 1] {
        Self::change_levels_for(coin_type::HYCON)
    }

    pub const fn change_levels_for(coin: u32) -> [(u32, bool); Self::DEPTH - 1] {
        [(PURPOSE, true), (coin, true), (0, true), (0, false)]
    }

    /// Render `(index, hardened)` levels as `m/..` with `'` on hardened levels.
    pub fn format(levels: &[(u32, bool)]) -> String {
        levels.iter().fold(String::from("m"), |mut path, (idx, hardened)| {
            path.push('/');
            path.push_str(&idx.to_string());
            if *hardened {
                path.push('\'');
            }
            path
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
