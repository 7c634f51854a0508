//! Generation algorithms
//!
//! This module contains the engine's algorithmic core:
//! - Largest-remainder quota apportionment, with and without caps
//! - The three-phase combo assignment engine
//! - Weighted single-combo sampling for interactive palettes
//! - A bounded backtracking color-set search
//! - The ring-ordered incremental auto-fill

/// Three-phase quota-exact combo assignment
pub mod assignment;
/// Ring-ordered incremental board fill
pub mod autofill;
/// Bounded backtracking color-set search
pub mod backtrack;
/// Largest-remainder apportionment
pub mod quota;
/// Weighted single-combo sampling and palettes
pub mod sampler;

pub use assignment::assign_tile_combos;
pub use autofill::{AutoFill, StepOutcome};
pub use backtrack::assign_colors_to_tiles;
pub use quota::{quotas_from_percents, quotas_hamilton_cap};
pub use sampler::{create_palette, sample_combo};
