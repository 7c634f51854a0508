//! Largest-remainder (Hamilton) apportionment
//!
//! Converts fractional proportional shares into integer counts that sum to
//! an exact total. The capped variant is the workhorse of the combo
//! assignment engine, where per-color unit budgets bound every phase.

use crate::io::error::{EngineError, Result, invalid_input};

/// Apportion `total` items across buckets proportionally to `percents`
///
/// Floors the raw shares, then hands the remainder out one item at a time
/// to the largest fractional parts, ties keeping original bucket order.
/// The result always sums to exactly `total`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the weights sum to zero.
pub fn quotas_from_percents(total: usize, percents: &[usize]) -> Result<Vec<usize>> {
    let weight_sum: usize = percents.iter().sum();
    if weight_sum == 0 {
        return Err(invalid_input("percentage weights must sum to a positive value"));
    }
    let raw: Vec<f64> = percents
        .iter()
        .map(|&p| (p as f64 / weight_sum as f64) * total as f64)
        .collect();
    let mut counts: Vec<usize> = raw.iter().map(|&x| x.floor() as usize).collect();
    let assigned: usize = counts.iter().sum();
    let remainder = total.saturating_sub(assigned);

    let mut order: Vec<(usize, f64)> = raw
        .iter()
        .enumerate()
        .map(|(i, &x)| (i, x - x.floor()))
        .collect();
    // Stable sort keeps index order on fractional ties
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    for &(i, _) in order.iter().take(remainder) {
        if let Some(slot) = counts.get_mut(i) {
            *slot += 1;
        }
    }
    Ok(counts)
}

/// Capped largest-remainder apportionment
///
/// Each bucket is clamped to `caps[i]`; remainder blocked by caps is swept
/// left to right into buckets with spare capacity. A zero weight sum is
/// tolerated (every raw share becomes zero and the sweep alone
/// distributes), matching the uncapped variant's permissive callers.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `weights` and `caps` differ
/// in length, and [`EngineError::InfeasibleQuota`] when the caps cannot
/// absorb `total`.
pub fn quotas_hamilton_cap(total: usize, weights: &[usize], caps: &[usize]) -> Result<Vec<usize>> {
    if weights.len() != caps.len() {
        return Err(invalid_input(&format!(
            "weights ({}) and caps ({}) must have equal length",
            weights.len(),
            caps.len()
        )));
    }
    let weight_sum: usize = weights.iter().sum::<usize>().max(1);
    let raw: Vec<f64> = weights
        .iter()
        .map(|&w| total as f64 * (w as f64 / weight_sum as f64))
        .collect();
    let mut counts: Vec<usize> = raw
        .iter()
        .zip(caps)
        .map(|(&x, &cap)| (x.floor() as usize).min(cap))
        .collect();
    let mut remainder = total.saturating_sub(counts.iter().sum());

    let mut order: Vec<(usize, f64)> = raw
        .iter()
        .enumerate()
        .map(|(i, &x)| (i, x - x.floor()))
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    for &(i, _) in &order {
        if remainder == 0 {
            break;
        }
        if let (Some(slot), Some(&cap)) = (counts.get_mut(i), caps.get(i)) {
            if *slot < cap {
                *slot += 1;
                remainder -= 1;
            }
        }
    }

    // Sweep whatever the fractional pass could not seat into spare capacity
    for (slot, &cap) in counts.iter_mut().zip(caps) {
        if remainder == 0 {
            break;
        }
        let take = (cap - *slot).min(remainder);
        *slot += take;
        remainder -= take;
    }

    if remainder != 0 {
        return Err(EngineError::InfeasibleQuota {
            requested: total,
            unplaced: remainder,
        });
    }
    Ok(counts)
}
