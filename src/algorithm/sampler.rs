//! Weighted single-combo sampling
//!
//! The interactive counterpart to the bulk assignment engine: each draw is
//! independent, with no global quota conservation. Used to replenish the
//! four-slot palette during play.

use crate::combo::{ColorIndex, Combo, ComboPattern};
use crate::io::configuration::PALETTE_SIZE;
use crate::math::Xorshift32;

/// Roulette-wheel pick over non-negative weights
///
/// Draws a float in `[0, sum)` and linear-scans the positive buckets.
/// Returns index 0 when no weight is positive, and the last positive
/// bucket if float rounding leaves the draw unconsumed.
#[must_use]
pub fn pick_weighted(weights: &[usize], rng: &mut Xorshift32) -> usize {
    let positive: Vec<(usize, usize)> = weights
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w > 0)
        .map(|(i, &w)| (i, w))
        .collect();
    let sum: usize = positive.iter().map(|&(_, w)| w).sum();
    if sum == 0 {
        return 0;
    }
    let mut draw = rng.next_f64() * sum as f64;
    for &(idx, weight) in &positive {
        draw -= weight as f64;
        if draw <= 0.0 {
            return idx;
        }
    }
    positive.last().map_or(0, |&(idx, _)| idx)
}

/// Pick a color by weight, optionally excluding already-chosen colors
///
/// When every non-excluded weight is zero: with `allow_fallback` the full
/// unfiltered table is used (repeats become possible); without it, a
/// uniform pick over the non-excluded pool guarantees distinctness.
fn pick_color(
    color_pct: &[usize],
    exclude: &[ColorIndex],
    allow_fallback: bool,
    rng: &mut Xorshift32,
) -> ColorIndex {
    let masked: Vec<usize> = color_pct
        .iter()
        .enumerate()
        .map(|(i, &p)| if exclude.contains(&i) { 0 } else { p })
        .collect();
    if masked.iter().any(|&w| w > 0) {
        return pick_weighted(&masked, rng);
    }
    if allow_fallback {
        return pick_weighted(color_pct, rng);
    }
    let pool: Vec<usize> = (0..color_pct.len())
        .filter(|i| !exclude.contains(i))
        .collect();
    if pool.is_empty() {
        return 0;
    }
    let pick = (rng.next_f64() * pool.len() as f64) as usize;
    pool.get(pick).copied().unwrap_or(0)
}

/// Draw one weighted-random combo
///
/// Picks the tile type from `types_pct` (mono, bi, tri), then its colors
/// from `color_pct`. The bi minor pick excludes the major without
/// fallback-to-full, so it repeats the major only when a single color has
/// weight. Tri draws three distinct colors whenever at least three have
/// positive weight, and otherwise falls back to independent picks.
#[must_use]
pub fn sample_combo(types_pct: &[usize], color_pct: &[usize], rng: &mut Xorshift32) -> Combo {
    let type_index = pick_weighted(types_pct, rng);
    match type_index {
        0 => {
            let color = pick_color(color_pct, &[], true, rng);
            Combo::new(ComboPattern::Mono { color })
        }
        1 => {
            let major = pick_color(color_pct, &[], true, rng);
            let minor = pick_color(color_pct, &[major], false, rng);
            Combo::new(ComboPattern::Bi { major, minor })
        }
        _ => {
            let positive = color_pct.iter().filter(|&&p| p > 0).count();
            let colors = if positive >= 3 {
                let mut chosen: Vec<ColorIndex> = Vec::with_capacity(3);
                for _ in 0..3 {
                    let pick = pick_color(color_pct, &chosen, false, rng);
                    chosen.push(pick);
                }
                [
                    chosen.first().copied().unwrap_or(0),
                    chosen.get(1).copied().unwrap_or(0),
                    chosen.get(2).copied().unwrap_or(0),
                ]
            } else {
                [
                    pick_color(color_pct, &[], true, rng),
                    pick_color(color_pct, &[], true, rng),
                    pick_color(color_pct, &[], true, rng),
                ]
            };
            Combo::new(ComboPattern::Tri { colors })
        }
    }
}

/// Draw a fresh interactive palette of independent combos
///
/// Exactly [`PALETTE_SIZE`] combos, each at rotation step 0.
#[must_use]
pub fn create_palette(types_pct: &[usize], color_pct: &[usize], rng: &mut Xorshift32) -> Vec<Combo> {
    (0..PALETTE_SIZE)
        .map(|_| sample_combo(types_pct, color_pct, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_weighted_skips_zero_buckets() {
        let mut rng = Xorshift32::new(99);
        for _ in 0..200 {
            let idx = pick_weighted(&[0, 5, 0, 5], &mut rng);
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn test_pick_weighted_all_zero_returns_zero() {
        let mut rng = Xorshift32::new(1);
        assert_eq!(pick_weighted(&[0, 0, 0], &mut rng), 0);
    }

    #[test]
    fn test_tri_colors_distinct_with_enough_weight() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..100 {
            let combo = sample_combo(&[0, 0, 100], &[25, 25, 25, 25], &mut rng);
            let ComboPattern::Tri { colors } = combo.pattern else {
                unreachable!("types_pct forces tri");
            };
            let [a, b, c] = colors;
            assert!(a != b && b != c && a != c, "repeated color in {colors:?}");
        }
    }

    #[test]
    fn test_bi_minor_avoids_major_when_possible() {
        let mut rng = Xorshift32::new(11);
        for _ in 0..100 {
            let combo = sample_combo(&[0, 100, 0], &[50, 50, 0, 0], &mut rng);
            let ComboPattern::Bi { major, minor } = combo.pattern else {
                unreachable!("types_pct forces bi");
            };
            assert_ne!(major, minor);
        }
    }

    #[test]
    fn test_palette_size_and_rotation() {
        let mut rng = Xorshift32::new(5);
        let palette = create_palette(&[40, 40, 20], &[25, 25, 25, 25], &mut rng);
        assert_eq!(palette.len(), PALETTE_SIZE);
        assert!(palette.iter().all(|combo| combo.rotation_step == 0));
    }

    #[test]
    fn test_sampler_is_deterministic() {
        let mut a = Xorshift32::new(321);
        let mut b = Xorshift32::new(321);
        for _ in 0..50 {
            assert_eq!(
                sample_combo(&[40, 40, 20], &[10, 20, 30, 40], &mut a),
                sample_combo(&[40, 40, 20], &[10, 20, 30, 40], &mut b)
            );
        }
    }
}
