//! Mathematical utilities for the engine

/// Seeded xorshift32 generator behind the `rand` traits
pub mod rng;

pub use rng::Xorshift32;
