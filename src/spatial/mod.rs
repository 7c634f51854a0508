//! Hexagonal grid geometry and board state
//!
//! This module contains the spatial side of the engine:
//! - Axial coordinate math and grid generation
//! - Board state with edge-matching placement validation
//! - Junction topology shared by three hex corners

/// Board state and edge-matched placement
pub mod board;
/// Axial coordinates, pixel mapping, and grid generation
pub mod hex;
/// Three-corner junction detection and readiness
pub mod junction;

pub use board::Board;
pub use hex::Axial;
pub use junction::{Junction, JunctionKey, JunctionMap};
