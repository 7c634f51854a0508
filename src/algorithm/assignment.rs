//! Three-phase combo assignment engine
//!
//! Given per-tile combo arities and exact per-color unit targets, produces
//! one combo per tile such that summing units per color across the board
//! reproduces the targets exactly. The three greedy phases (mono, bi-major,
//! then bi-minor plus tri) each apportion against the remaining unit budget
//! with capped Hamilton quotas, trading a small chance of explicit
//! infeasibility errors for linear-time determinism instead of a
//! combinatorial search over all assignments.

use rand::seq::SliceRandom;

use crate::algorithm::quota::quotas_hamilton_cap;
use crate::combo::{ColorIndex, Combo, ComboPattern};
use crate::io::configuration::{BI_MINOR_RESHUFFLE_ATTEMPTS, COLOR_COUNT};
use crate::io::error::{EngineError, Result};
use crate::math::Xorshift32;

/// Per-tile combo arity: 1 = mono, 2 = bi, 3 = tri
pub type TileType = usize;

/// Assign quota-exact combos to every tile
///
/// `types` names each tile's combo arity; `color_unit_targets` must sum to
/// `3 * types.len()`. The result has one combo per tile position, with the
/// combo-to-position mapping shuffled by the seeded generator.
///
/// # Errors
///
/// - [`EngineError::InfeasibleQuota`] when a phase's caps cannot absorb its
///   tile count
/// - [`EngineError::InvariantViolation`] when unit conservation breaks
///   between phases (a logic defect, not a configuration problem)
/// - [`EngineError::InfeasibleTriColor`] / [`EngineError::InfeasibleTriAssignment`]
///   when fewer than 3 colors can serve the tri-color tiles
pub fn assign_tile_combos(
    types: &[TileType],
    color_unit_targets: &[usize; COLOR_COUNT],
    rng: &mut Xorshift32,
) -> Result<Vec<Combo>> {
    let mono_tile_count = types.iter().filter(|&&k| k == 1).count();
    let bi_tile_count = types.iter().filter(|&&k| k == 2).count();
    let tri_tile_count = types.iter().filter(|&&k| k == 3).count();

    let mut remaining = *color_unit_targets;

    // Phase 1: monochromes consume 3 units each
    let mono_caps: Vec<usize> = remaining.iter().map(|&u| u / 3).collect();
    let mono_counts = quotas_hamilton_cap(mono_tile_count, &remaining, &mono_caps)?;
    for (slot, &count) in remaining.iter_mut().zip(&mono_counts) {
        *slot -= 3 * count;
    }

    // Phase 2: bi majors consume 2 units each
    let bi_caps: Vec<usize> = remaining.iter().map(|&u| u / 2).collect();
    let bi_major_counts = quotas_hamilton_cap(bi_tile_count, &remaining, &bi_caps)?;
    for (slot, &count) in remaining.iter_mut().zip(&bi_major_counts) {
        *slot -= 2 * count;
    }

    // Phase 3: what is left must be exactly one unit per bi tile plus
    // three per tri tile; anything else means a phase deducted wrongly
    let total_remaining: usize = remaining.iter().sum();
    let expected = bi_tile_count + 3 * tri_tile_count;
    if total_remaining != expected {
        return Err(EngineError::InvariantViolation {
            check: "unit conservation",
            details: format!("expected {expected} remaining units, found {total_remaining}"),
        });
    }

    let remaining_vec: Vec<usize> = remaining.to_vec();
    let bi_minor_vec = quotas_hamilton_cap(bi_tile_count, &remaining_vec, &remaining_vec)?;
    let mut bi_minor_counts = [0usize; COLOR_COUNT];
    for (slot, &count) in bi_minor_counts.iter_mut().zip(&bi_minor_vec) {
        *slot = count;
    }
    let mut tri_counts = [0usize; COLOR_COUNT];
    for ((slot, &rem), &minor) in tri_counts.iter_mut().zip(&remaining).zip(&bi_minor_counts) {
        *slot = rem - minor;
    }

    // Remediation: tri tiles need 3 distinct colors with positive counts.
    // Units only move over from bi-minor buckets; bi-major and mono stay
    // untouched, so a solvable configuration can still be missed here.
    if tri_tile_count > 0 {
        for i in 0..COLOR_COUNT {
            if positive_colors(&tri_counts) >= 3 {
                break;
            }
            let minor = bi_minor_counts.get(i).copied().unwrap_or(0);
            let tri = tri_counts.get(i).copied().unwrap_or(0);
            if tri == 0 && minor > 0 {
                if let (Some(m), Some(t)) = (bi_minor_counts.get_mut(i), tri_counts.get_mut(i)) {
                    *m -= 1;
                    *t += 1;
                }
            }
        }
        let available = positive_colors(&tri_counts);
        if available < 3 {
            return Err(EngineError::InfeasibleTriColor { available });
        }
    }

    // Expand quota counts into flat per-tile color lists
    let monos = expand_counts(&mono_counts);
    let mut bi_majors = expand_counts(&bi_major_counts);
    let mut bi_minors = expand_counts(&bi_minor_vec);
    bi_majors.shuffle(rng);
    bi_minors.shuffle(rng);
    for _ in 0..BI_MINOR_RESHUFFLE_ATTEMPTS {
        let degenerate = bi_majors
            .iter()
            .zip(&bi_minors)
            .any(|(major, minor)| major == minor);
        if !degenerate {
            break;
        }
        bi_minors.shuffle(rng);
    }

    let tri_triples = build_tri_triples(tri_counts, tri_tile_count)?;

    // Randomize which tile position of each arity receives which combo
    let mut mono_indices: Vec<usize> = indices_of_type(types, 1);
    let mut bi_indices: Vec<usize> = indices_of_type(types, 2);
    let mut tri_indices: Vec<usize> = indices_of_type(types, 3);
    mono_indices.shuffle(rng);
    bi_indices.shuffle(rng);
    tri_indices.shuffle(rng);

    let mut combos: Vec<Option<Combo>> = vec![None; types.len()];
    for (tile_idx, &color) in mono_indices.iter().zip(&monos) {
        if let Some(slot) = combos.get_mut(*tile_idx) {
            *slot = Some(Combo::new(ComboPattern::Mono { color }));
        }
    }
    for ((tile_idx, &major), &minor) in bi_indices.iter().zip(&bi_majors).zip(&bi_minors) {
        // A surviving self-pairing gets a deterministic substitute minor
        let minor = if major == minor {
            (major + 1) % COLOR_COUNT
        } else {
            minor
        };
        if let Some(slot) = combos.get_mut(*tile_idx) {
            *slot = Some(Combo::new(ComboPattern::Bi { major, minor }));
        }
    }
    for (tile_idx, &colors) in tri_indices.iter().zip(&tri_triples) {
        if let Some(slot) = combos.get_mut(*tile_idx) {
            *slot = Some(Combo::new(ComboPattern::Tri { colors }));
        }
    }

    combos
        .into_iter()
        .collect::<Option<Vec<Combo>>>()
        .ok_or(EngineError::InvariantViolation {
            check: "combo coverage",
            details: "a tile position received no combo".to_string(),
        })
}

fn positive_colors(counts: &[usize; COLOR_COUNT]) -> usize {
    counts.iter().filter(|&&v| v > 0).count()
}

fn expand_counts(counts: &[usize]) -> Vec<ColorIndex> {
    let mut flat = Vec::with_capacity(counts.iter().sum());
    for (color, &count) in counts.iter().enumerate() {
        flat.extend(std::iter::repeat_n(color, count));
    }
    flat
}

fn indices_of_type(types: &[TileType], wanted: TileType) -> Vec<usize> {
    types
        .iter()
        .enumerate()
        .filter(|&(_, &k)| k == wanted)
        .map(|(i, _)| i)
        .collect()
}

/// Greedily build tri-color triples from per-color unit counts
///
/// Each tri tile takes the three currently most abundant colors with
/// positive count (ties by lower color index), keeping the counts as
/// level as possible so later tiles still find three distinct colors.
fn build_tri_triples(
    mut counts: [usize; COLOR_COUNT],
    tri_tile_count: usize,
) -> Result<Vec<[ColorIndex; 3]>> {
    let mut triples = Vec::with_capacity(tri_tile_count);
    for satisfied in 0..tri_tile_count {
        let mut available: Vec<ColorIndex> = (0..COLOR_COUNT)
            .filter(|&c| counts.get(c).copied().unwrap_or(0) > 0)
            .collect();
        if available.len() < 3 {
            return Err(EngineError::InfeasibleTriAssignment {
                satisfied,
                requested: tri_tile_count,
            });
        }
        available.sort_by_key(|&c| std::cmp::Reverse(counts.get(c).copied().unwrap_or(0)));
        let triple = [
            available.first().copied().unwrap_or(0),
            available.get(1).copied().unwrap_or(0),
            available.get(2).copied().unwrap_or(0),
        ];
        for &color in &triple {
            if let Some(slot) = counts.get_mut(color) {
                *slot -= 1;
            }
        }
        triples.push(triple);
    }
    Ok(triples)
}
