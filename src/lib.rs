//! Hexagonal tile-laying engine: quota apportionment, combo assignment, and edge-matched placement
//!
//! The crate generates color combinations for hexagonal tiles under exact
//! percentage quotas, samples interactive tile palettes, and validates
//! edge-matched placements on a radius-bounded axial board.

#![forbid(unsafe_code)]

/// Quota apportionment, combo assignment, sampling, backtracking search, and auto-fill
pub mod algorithm;
/// Tile color combinations and their rotational orientations
pub mod combo;
/// Input/output operations and error handling
pub mod io;
/// Deterministic random number generation
pub mod math;
/// Hexagonal grid geometry, board state, and junction topology
pub mod spatial;

pub use io::error::{EngineError, Result};
