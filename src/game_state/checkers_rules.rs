//! Canonical board masks and rule configuration.
//!
//! All masks are evaluated at compile time; nothing here depends on module
//! initialization order.

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// Squares where `rank + file` is odd.
pub const DARK_SQUARES: u64 = compute_dark_squares();

/// Red men at game start: dark squares of ranks 1-3.
pub const RED_START: u64 = DARK_SQUARES & 0x0000_0000_00FF_FFFF;
/// Black men at game start: dark squares of ranks 6-8.
pub const BLACK_START: u64 = DARK_SQUARES & 0xFFFF_FF00_0000_0000;

/// Men per side in the standard setup.
pub const PIECES_PER_SIDE: u32 = 12;

const fn compute_dark_squares() -> u64 {
    let mut mask = 0u64;
    let mut sq = 0u32;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        if (rank + file) % 2 == 1 {
            mask |= 1u64 << sq;
        }
        sq += 1;
    }
    mask
}

/// House-rule switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Whether a player may end a multi-jump while further captures remain
    /// from the landing square.
    pub allow_stop_mid_chain: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allow_stop_mid_chain: true,
        }
    }
}

impl RulesConfig {
    /// Standard checkers: a started chain must be jumped to the end.
    pub const fn mandatory_chains() -> Self {
        Self {
            allow_stop_mid_chain: false,
        }
    }
}
