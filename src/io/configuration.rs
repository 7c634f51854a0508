//! Engine constants and runtime configuration defaults

use crate::io::error::{Result, invalid_input};

/// Number of logical color slots
pub const COLOR_COUNT: usize = 4;

/// Number of edges on a hexagonal tile
pub const EDGE_COUNT: usize = 6;

/// Color units carried by every tile regardless of combo arity
pub const UNITS_PER_TILE: usize = 3;

/// Default board radius in hexes (radius 6 yields 127 tiles)
pub const DEFAULT_RADIUS: i32 = 6;

/// Number of combos drawn for an interactive palette
pub const PALETTE_SIZE: usize = 4;

/// Reshuffle attempts to clear major == minor positions in bi-color pairing
pub const BI_MINOR_RESHUFFLE_ATTEMPTS: usize = 50;

/// Random candidate draws per tile in the backtracking search
pub const BACKTRACK_CANDIDATE_DRAWS: usize = 6;

/// Default backtrack budget for the color-set search
pub const DEFAULT_MAX_BACKTRACKS: usize = 5000;

/// Fresh palettes tried per auto-fill step before reporting a halt
pub const AUTOFILL_PALETTE_ATTEMPTS: usize = 12;

// Vertex positions within half a hex of each other must collapse to one
// junction, so the quantization step has to sit well below the minimum
// vertex separation (the hex edge length) and well above float noise.
/// Junction coordinates are quantized to 1/SCALE units before keying
pub const JUNCTION_KEY_SCALE: f64 = 1000.0;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 42;

/// Default tile-type percentages (mono, bi, tri)
pub const DEFAULT_TYPES_PCT: [u32; 3] = [40, 40, 20];

/// Default color percentages
pub const DEFAULT_COLOR_PCT: [u32; COLOR_COUNT] = [25, 25, 25, 25];

/// Neighbor-adjacency point table indexed by placed-neighbor count
///
/// Clamped at the last entry for counts past the table end.
pub const DEFAULT_NEIGHBOR_POINTS: [u32; 7] = [0, 1, 1, 2, 2, 4, 4];

/// Percentage tables driving combo generation
///
/// The engine treats both tables as opaque weights; validation only checks
/// that each sums to exactly 100 so quota math lands on whole tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Tile-type percentages (mono, bi, tri)
    pub types_pct: [u32; 3],
    /// Color percentages, one per logical color slot
    pub color_pct: [u32; COLOR_COUNT],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            types_pct: DEFAULT_TYPES_PCT,
            color_pct: DEFAULT_COLOR_PCT,
        }
    }
}

impl GameConfig {
    /// Validate that both percentage tables sum to exactly 100
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidInput`] naming the offending
    /// table when either sum differs from 100.
    pub fn validate(&self) -> Result<()> {
        let types_sum: u32 = self.types_pct.iter().sum();
        if types_sum != 100 {
            return Err(invalid_input(&format!(
                "tile type percentages must sum to 100, found {types_sum}"
            )));
        }
        let color_sum: u32 = self.color_pct.iter().sum();
        if color_sum != 100 {
            return Err(invalid_input(&format!(
                "color percentages must sum to 100, found {color_sum}"
            )));
        }
        Ok(())
    }

    /// Tile-type percentages widened for weight arithmetic
    pub fn types_pct_usize(&self) -> [usize; 3] {
        self.types_pct.map(|p| p as usize)
    }

    /// Color percentages widened for weight arithmetic
    pub fn color_pct_usize(&self) -> [usize; COLOR_COUNT] {
        self.color_pct.map(|p| p as usize)
    }
}

/// Look up adjacency points for a placed-neighbor count
///
/// Counts past the end of the table clamp to its last entry; an empty
/// table scores zero.
pub fn points_for_neighbor_count(table: &[u32], count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let idx = count.min(table.len().saturating_sub(1));
    table.get(idx).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_percent_sum_rejected() {
        let cfg = GameConfig {
            types_pct: [50, 50, 10],
            color_pct: DEFAULT_COLOR_PCT,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_neighbor_points_clamp() {
        let table = DEFAULT_NEIGHBOR_POINTS;
        assert_eq!(points_for_neighbor_count(&table, 0), 0);
        assert_eq!(points_for_neighbor_count(&table, 1), 1);
        assert_eq!(points_for_neighbor_count(&table, 6), 4);
        assert_eq!(points_for_neighbor_count(&table, 60), 4);
        assert_eq!(points_for_neighbor_count(&[], 3), 0);
    }
}
