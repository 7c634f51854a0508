//! Tile color combinations
//!
//! A combo describes which of the four logical colors a tile shows on its
//! six edges and in what multiplicity. Every tile carries exactly three
//! color units split across one, two, or three colors.

/// Color pattern variants and unit accounting
pub mod pattern;
/// Oriented combos and rotation-step handling
pub mod rotation;

pub use pattern::{ColorIndex, ComboPattern, SideColors};
pub use rotation::Combo;
