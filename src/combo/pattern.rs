//! Combo pattern variants and their fixed edge expansions

use crate::io::configuration::{COLOR_COUNT, EDGE_COUNT, UNITS_PER_TILE};

/// Index into the four logical color slots
pub type ColorIndex = usize;

/// Edge colors of a tile, one entry per hexagon side
pub type SideColors = [ColorIndex; EDGE_COUNT];

/// A tile's color pattern
///
/// Each variant fixes how the tile's three color units are split:
/// mono 3, bi 2+1, tri 1+1+1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboPattern {
    /// Single color on all six edges
    Mono {
        /// The only color
        color: ColorIndex,
    },
    /// Two colors, the major one covering four edges
    Bi {
        /// Color holding 2 units (4 edges)
        major: ColorIndex,
        /// Color holding 1 unit (2 edges)
        minor: ColorIndex,
    },
    /// Three distinct colors, two edges each
    Tri {
        /// The three colors in edge order
        colors: [ColorIndex; 3],
    },
}

impl ComboPattern {
    /// Number of distinct colors the pattern requires (1, 2, or 3)
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Mono { .. } => 1,
            Self::Bi { .. } => 2,
            Self::Tri { .. } => 3,
        }
    }

    /// Unit multiplicities in the same order as [`Self::colors`]
    #[must_use]
    pub fn units(&self) -> Vec<usize> {
        match self {
            Self::Mono { .. } => vec![3],
            Self::Bi { .. } => vec![2, 1],
            Self::Tri { .. } => vec![1, 1, 1],
        }
    }

    /// The pattern's colors in declaration order
    #[must_use]
    pub fn colors(&self) -> Vec<ColorIndex> {
        match self {
            Self::Mono { color } => vec![*color],
            Self::Bi { major, minor } => vec![*major, *minor],
            Self::Tri { colors } => colors.to_vec(),
        }
    }

    /// First-declared color, used for junction dominance
    #[must_use]
    pub const fn primary_color(&self) -> ColorIndex {
        match self {
            Self::Mono { color } => *color,
            Self::Bi { major, .. } => *major,
            Self::Tri { colors } => {
                let [a, _, _] = colors;
                *a
            }
        }
    }

    /// Per-color unit totals; always sums to 3
    #[must_use]
    pub fn units_by_color(&self) -> [usize; COLOR_COUNT] {
        let mut totals = [0usize; COLOR_COUNT];
        for (color, units) in self.colors().into_iter().zip(self.units()) {
            if let Some(slot) = totals.get_mut(color) {
                *slot += units;
            }
        }
        totals
    }

    /// Expand the pattern into its unrotated edge colors
    ///
    /// Mono fills all six edges; bi shows the minor color on edges 1-2;
    /// tri pairs consecutive edges as `[a, b, b, c, c, a]`. Bi and tri both
    /// have 2-fold edge symmetry, so only rotations by 2 edges produce new
    /// orientations.
    #[must_use]
    pub const fn base_side_colors(&self) -> SideColors {
        match self {
            Self::Mono { color } => [*color; EDGE_COUNT],
            Self::Bi { major, minor } => [*major, *minor, *minor, *major, *major, *major],
            Self::Tri { colors } => {
                let [a, b, c] = colors;
                [*a, *b, *b, *c, *c, *a]
            }
        }
    }
}

/// Compile-time check that every variant distributes exactly three units
const _: () = assert!(UNITS_PER_TILE == 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_sum_to_three() {
        let patterns = [
            ComboPattern::Mono { color: 2 },
            ComboPattern::Bi { major: 0, minor: 3 },
            ComboPattern::Tri { colors: [1, 2, 3] },
        ];
        for pattern in patterns {
            assert_eq!(pattern.units().iter().sum::<usize>(), UNITS_PER_TILE);
            assert_eq!(
                pattern.units_by_color().iter().sum::<usize>(),
                UNITS_PER_TILE
            );
        }
    }

    #[test]
    fn test_bi_edge_expansion() {
        let pattern = ComboPattern::Bi { major: 1, minor: 2 };
        assert_eq!(pattern.base_side_colors(), [1, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_tri_edge_expansion() {
        let pattern = ComboPattern::Tri { colors: [0, 1, 2] };
        assert_eq!(pattern.base_side_colors(), [0, 1, 1, 2, 2, 0]);
    }
}
