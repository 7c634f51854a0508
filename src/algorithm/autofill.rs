//! Incremental edge-matched auto-fill
//!
//! Places one tile per step, scanning rings from the center outward and
//! trying each palette combo at its preferred rotation first. When a whole
//! palette fits nowhere, a fresh one is drawn, up to a bounded number of
//! attempts per step.

use crate::algorithm::sampler::create_palette;
use crate::combo::Combo;
use crate::io::configuration::{AUTOFILL_PALETTE_ATTEMPTS, GameConfig};
use crate::math::Xorshift32;
use crate::spatial::Board;

/// Result of a single auto-fill step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A tile was placed; more empty cells remain
    Placed,
    /// No palette produced a legal placement this step
    Halt,
    /// Every tile on the board is placed
    Done,
}

/// Stepper state for the incremental fill
///
/// The palette drawn after a successful placement is kept for the next
/// step, so consecutive steps consume the RNG stream in draw order.
#[derive(Debug, Default)]
pub struct AutoFill {
    pending_palette: Option<Vec<Combo>>,
    done: bool,
}

impl AutoFill {
    /// Fresh stepper with no pre-drawn palette
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a previous step reported [`StepOutcome::Done`]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Attempt exactly one placement
    ///
    /// Scans empty tiles ring by ring from the center, trying each palette
    /// combo in slot order with its preferred rotation first, then the
    /// remaining orientations. After a placement the next palette is drawn
    /// immediately and held for the following step. Up to
    /// [`AUTOFILL_PALETTE_ATTEMPTS`] fresh palettes are tried before the
    /// step halts.
    pub fn step(
        &mut self,
        board: &mut Board,
        config: &GameConfig,
        rng: &mut Xorshift32,
    ) -> StepOutcome {
        if board.empty_count() == 0 {
            self.done = true;
            return StepOutcome::Done;
        }
        let types = config.types_pct_usize();
        let colors = config.color_pct_usize();
        let mut palette = self
            .pending_palette
            .take()
            .unwrap_or_else(|| create_palette(&types, &colors, rng));
        for _ in 0..AUTOFILL_PALETTE_ATTEMPTS {
            if try_palette(board, &palette) {
                self.pending_palette = Some(create_palette(&types, &colors, rng));
                return StepOutcome::Placed;
            }
            palette = create_palette(&types, &colors, rng);
        }
        StepOutcome::Halt
    }

    /// Run steps until the board is full or a step halts
    ///
    /// Returns the number of tiles placed and the terminal outcome.
    pub fn run(
        &mut self,
        board: &mut Board,
        config: &GameConfig,
        rng: &mut Xorshift32,
    ) -> (usize, StepOutcome) {
        let mut placed = 0usize;
        loop {
            match self.step(board, config, rng) {
                StepOutcome::Placed => placed += 1,
                outcome @ (StepOutcome::Halt | StepOutcome::Done) => return (placed, outcome),
            }
        }
    }
}

/// First legal placement for any combo of the palette, or `false`
///
/// Within a ring every combo is exhausted before the next ring is
/// considered, so inner rings fill before outer ones.
fn try_palette(board: &mut Board, palette: &[Combo]) -> bool {
    let rings: Vec<Vec<usize>> = board.rings().to_vec();
    for ring in &rings {
        let available: Vec<usize> = ring
            .iter()
            .copied()
            .filter(|&idx| board.is_empty_at(idx))
            .collect();
        if available.is_empty() {
            continue;
        }
        for combo in palette {
            for step in rotation_order(combo) {
                for &tile_idx in &available {
                    if board.try_place(tile_idx, *combo, step) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// The combo's active rotation first, then the rest in ascending order
fn rotation_order(combo: &Combo) -> Vec<usize> {
    let count = combo.rotation_step_count();
    let preferred = combo.normalize_rotation_step(combo.rotation_step);
    let mut order: Vec<usize> = (0..count).collect();
    order.retain(|&step| step != preferred);
    order.insert(0, preferred);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::ComboPattern;

    fn mono_palette(color: usize) -> Vec<Combo> {
        vec![Combo::new(ComboPattern::Mono { color }); 4]
    }

    #[test]
    fn test_first_step_places_the_center() {
        let mut board = Board::new(1, 10.0);
        let mut fill = AutoFill::new();
        let config = GameConfig::default();
        let mut rng = Xorshift32::new(42);
        assert_eq!(fill.step(&mut board, &config, &mut rng), StepOutcome::Placed);
        assert_eq!(board.placed_count(), 1);
        // Ring order starts at the origin
        let origin = board
            .tiles()
            .iter()
            .position(|t| t.q == 0 && t.r == 0)
            .unwrap();
        assert!(board.placement(origin).is_some());
    }

    #[test]
    fn test_run_fills_a_small_board() {
        let mut board = Board::new(2, 10.0);
        let mut fill = AutoFill::new();
        // Mono-only palettes always edge-match, so the fill must finish
        let config = GameConfig {
            types_pct: [100, 0, 0],
            color_pct: [25, 25, 25, 25],
        };
        let mut rng = Xorshift32::new(7);
        let (placed, outcome) = fill.run(&mut board, &config, &mut rng);
        assert_eq!(outcome, StepOutcome::Done);
        assert_eq!(placed, board.tile_count());
        assert!(fill.is_done());
    }

    #[test]
    fn test_full_board_reports_done() {
        let mut board = Board::new(1, 10.0);
        for idx in 0..board.tile_count() {
            assert!(board.force_place(idx, Combo::new(ComboPattern::Mono { color: 0 })));
        }
        let mut fill = AutoFill::new();
        let config = GameConfig::default();
        let mut rng = Xorshift32::new(1);
        assert_eq!(fill.step(&mut board, &config, &mut rng), StepOutcome::Done);
    }

    #[test]
    fn test_placements_stay_edge_matched() {
        let mut board = Board::new(2, 10.0);
        let mut fill = AutoFill::new();
        let config = GameConfig::default();
        let mut rng = Xorshift32::new(2024);
        while fill.step(&mut board, &config, &mut rng) == StepOutcome::Placed {}
        for tile_idx in 0..board.tile_count() {
            let Some(placement) = board.placement(tile_idx) else {
                continue;
            };
            for (dir, neighbor) in board
                .neighbor_indices(tile_idx)
                .iter()
                .enumerate()
            {
                let Some(other) = neighbor.and_then(|n| board.placement(n)) else {
                    continue;
                };
                let own = placement.side_colors.get(dir).copied();
                let facing = other.side_colors.get((dir + 3) % 6).copied();
                assert_eq!(own, facing, "edge mismatch at tile {tile_idx} dir {dir}");
            }
        }
    }

    #[test]
    fn test_rotation_order_keeps_remaining_steps_ascending() {
        let mut combo = Combo::new(ComboPattern::Tri { colors: [0, 1, 2] });
        assert_eq!(rotation_order(&combo), vec![0, 1, 2]);
        combo.rotation_step = 1;
        assert_eq!(rotation_order(&combo), vec![1, 0, 2]);
        combo.rotation_step = 2;
        assert_eq!(rotation_order(&combo), vec![2, 0, 1]);
    }

    #[test]
    fn test_mono_palette_helper_is_trivially_placeable() {
        let mut board = Board::new(1, 10.0);
        assert!(try_palette(&mut board, &mono_palette(2)));
        assert_eq!(board.placed_count(), 1);
    }
}
