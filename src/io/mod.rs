//! Command-line surface, configuration, progress display, and error types

/// Command-line interface and the generation runner
pub mod cli;
/// Engine constants and runtime configuration
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// Progress display for the fill loop
pub mod progress;
