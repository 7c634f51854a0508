//! Backtracking color-set search
//!
//! An alternative to the phased assignment engine that frames per-tile
//! color selection as constraint satisfaction: most-constrained tiles
//! first, randomized weighted candidates, depth-first search with a global
//! backtrack budget. The search runs on an explicit frame stack so large
//! boards cannot exhaust the call stack.

use rand::seq::SliceRandom;

use crate::algorithm::assignment::TileType;
use crate::combo::ColorIndex;
use crate::io::configuration::{BACKTRACK_CANDIDATE_DRAWS, COLOR_COUNT};
use crate::io::error::{EngineError, Result};
use crate::math::Xorshift32;

/// Draw `k` distinct colors weighted by their remaining counts
///
/// Weighted roulette without replacement: each pick excludes already
/// chosen colors and decrements a local copy of the counts. Returns `None`
/// when fewer than `k` colors have positive count or the pool drains
/// mid-draw.
#[must_use]
pub fn choose_k_distinct_colors(
    counts: &[usize; COLOR_COUNT],
    k: usize,
    rng: &mut Xorshift32,
) -> Option<Vec<ColorIndex>> {
    let available: Vec<ColorIndex> = (0..COLOR_COUNT)
        .filter(|&c| counts.get(c).copied().unwrap_or(0) > 0)
        .collect();
    if available.len() < k {
        return None;
    }
    let mut local = *counts;
    let mut chosen: Vec<ColorIndex> = Vec::with_capacity(k);
    for _ in 0..k {
        let pool: Vec<(ColorIndex, usize)> = available
            .iter()
            .filter(|&&c| !chosen.contains(&c))
            .filter_map(|&c| {
                let weight = local.get(c).copied().unwrap_or(0);
                (weight > 0).then_some((c, weight))
            })
            .collect();
        let total: usize = pool.iter().map(|&(_, w)| w).sum();
        if pool.is_empty() || total == 0 {
            return None;
        }
        let mut draw = rng.next_f64() * total as f64;
        let mut pick = pool.first().map_or(0, |&(c, _)| c);
        for &(c, w) in &pool {
            draw -= w as f64;
            if draw <= 0.0 {
                pick = c;
                break;
            }
        }
        chosen.push(pick);
        if let Some(slot) = local.get_mut(pick) {
            *slot -= 1;
        }
    }
    Some(chosen)
}

struct Frame {
    /// Position in the constrained tile ordering
    pos: usize,
    candidates: Vec<Vec<ColorIndex>>,
    next: usize,
    /// The candidate currently decremented from the shared counts
    applied: Option<Vec<ColorIndex>>,
}

/// Assign a distinct-color set to every tile under global color counts
///
/// Tiles are processed tri before bi before mono (most constrained
/// first). Each returned set is sorted and respects the per-color budget
/// in `color_counts` exactly as decremented during the search.
///
/// # Errors
///
/// Returns [`EngineError::AssignmentInfeasible`] when the search exhausts
/// either its candidate tree or the `max_backtracks` budget.
pub fn assign_colors_to_tiles(
    types: &[TileType],
    color_counts: &[usize; COLOR_COUNT],
    rng: &mut Xorshift32,
    max_backtracks: usize,
) -> Result<Vec<Vec<ColorIndex>>> {
    if types.is_empty() {
        return Ok(Vec::new());
    }
    // Most constrained first; stable sort keeps tile order within an arity
    let mut order: Vec<(usize, TileType)> = types.iter().copied().enumerate().collect();
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let mut counts = *color_counts;
    let mut result: Vec<Option<Vec<ColorIndex>>> = vec![None; types.len()];
    let mut backtracks = 0usize;

    let first = make_frame(0, &order, &counts, rng);
    let mut stack: Vec<Frame> = vec![first];

    while let Some(frame) = stack.last_mut() {
        if let Some(candidate) = frame.candidates.get(frame.next).cloned() {
            frame.next += 1;
            if !try_apply(&mut counts, &candidate) {
                continue;
            }
            let pos = frame.pos;
            frame.applied = Some(candidate.clone());
            if let Some(&(tile_idx, _)) = order.get(pos) {
                if let Some(slot) = result.get_mut(tile_idx) {
                    *slot = Some(candidate);
                }
            }
            if pos + 1 == order.len() {
                return result
                    .into_iter()
                    .collect::<Option<Vec<_>>>()
                    .ok_or(EngineError::InvariantViolation {
                        check: "search coverage",
                        details: "a tile position received no color set".to_string(),
                    });
            }
            let next_frame = make_frame(pos + 1, &order, &counts, rng);
            stack.push(next_frame);
            continue;
        }

        // Candidates exhausted: this subtree failed
        backtracks += 1;
        if backtracks > max_backtracks {
            return Err(EngineError::AssignmentInfeasible { backtracks });
        }
        stack.pop();
        match stack.last_mut() {
            Some(parent) => {
                if let Some(candidate) = parent.applied.take() {
                    restore(&mut counts, &candidate);
                }
            }
            None => return Err(EngineError::AssignmentInfeasible { backtracks }),
        }
    }

    Err(EngineError::AssignmentInfeasible { backtracks })
}

/// Build the candidate list for a search position
///
/// Up to [`BACKTRACK_CANDIDATE_DRAWS`] weighted random draws, deduplicated
/// by sorted content, shuffled; when no random draw succeeds, a
/// deterministic fallback takes the k highest-count colors.
fn make_frame(
    pos: usize,
    order: &[(usize, TileType)],
    counts: &[usize; COLOR_COUNT],
    rng: &mut Xorshift32,
) -> Frame {
    let k = order.get(pos).map_or(0, |&(_, k)| k);
    let mut candidates: Vec<Vec<ColorIndex>> = Vec::new();
    for _ in 0..BACKTRACK_CANDIDATE_DRAWS {
        let Some(mut set) = choose_k_distinct_colors(counts, k, rng) else {
            break;
        };
        set.sort_unstable();
        if !candidates.contains(&set) {
            candidates.push(set);
        }
    }
    if candidates.is_empty() {
        let mut by_count: Vec<ColorIndex> = (0..COLOR_COUNT)
            .filter(|&c| counts.get(c).copied().unwrap_or(0) > 0)
            .collect();
        by_count.sort_by_key(|&c| std::cmp::Reverse(counts.get(c).copied().unwrap_or(0)));
        if by_count.len() >= k {
            let mut set: Vec<ColorIndex> = by_count.into_iter().take(k).collect();
            set.sort_unstable();
            candidates.push(set);
        }
    }
    candidates.shuffle(rng);
    Frame {
        pos,
        candidates,
        next: 0,
        applied: None,
    }
}

fn try_apply(counts: &mut [usize; COLOR_COUNT], candidate: &[ColorIndex]) -> bool {
    let feasible = candidate
        .iter()
        .all(|&c| counts.get(c).copied().unwrap_or(0) > 0);
    if !feasible {
        return false;
    }
    for &c in candidate {
        if let Some(slot) = counts.get_mut(c) {
            *slot -= 1;
        }
    }
    true
}

fn restore(counts: &mut [usize; COLOR_COUNT], candidate: &[ColorIndex]) {
    for &c in candidate {
        if let Some(slot) = counts.get_mut(c) {
            *slot += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::configuration::DEFAULT_MAX_BACKTRACKS;

    #[test]
    fn test_choose_k_needs_enough_positive_colors() {
        let mut rng = Xorshift32::new(9);
        assert!(choose_k_distinct_colors(&[5, 5, 0, 0], 3, &mut rng).is_none());
        let set = choose_k_distinct_colors(&[5, 5, 5, 0], 3, &mut rng).unwrap();
        let mut sorted = set;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_assignment_respects_color_budget() {
        let types = vec![3, 2, 2, 1, 1];
        // 9 distinct-color slots against 11 units of budget
        let counts = [4, 3, 2, 2];
        let mut rng = Xorshift32::new(77);
        let sets = assign_colors_to_tiles(&types, &counts, &mut rng, DEFAULT_MAX_BACKTRACKS)
            .unwrap();
        assert_eq!(sets.len(), types.len());
        let mut used = [0usize; COLOR_COUNT];
        for (set, &k) in sets.iter().zip(&types) {
            assert_eq!(set.len(), k);
            let mut dedup = set.clone();
            dedup.dedup();
            assert_eq!(dedup.len(), k, "repeated color in {set:?}");
            for &c in set {
                if let Some(slot) = used.get_mut(c) {
                    *slot += 1;
                }
            }
        }
        for (u, &c) in used.iter().zip(&counts) {
            assert!(*u <= c);
        }
    }

    #[test]
    fn test_infeasible_configuration_reports_budget() {
        // Two tri tiles but only two colors carry any count
        let types = vec![3, 3];
        let counts = [3, 3, 0, 0];
        let mut rng = Xorshift32::new(4);
        let result = assign_colors_to_tiles(&types, &counts, &mut rng, 50);
        assert!(matches!(
            result,
            Err(EngineError::AssignmentInfeasible { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_trivially_satisfied() {
        let mut rng = Xorshift32::new(1);
        let sets = assign_colors_to_tiles(&[], &[1, 1, 1, 1], &mut rng, 10).unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let types = vec![3, 3, 2, 2, 2, 1];
        let counts = [5, 4, 3, 3];
        let mut a = Xorshift32::new(2024);
        let mut b = Xorshift32::new(2024);
        assert_eq!(
            assign_colors_to_tiles(&types, &counts, &mut a, DEFAULT_MAX_BACKTRACKS).unwrap(),
            assign_colors_to_tiles(&types, &counts, &mut b, DEFAULT_MAX_BACKTRACKS).unwrap()
        );
    }
}
