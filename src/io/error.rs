//! Error types for quota apportionment and combo assignment

use std::fmt;

/// Main error type for all engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Caller-supplied weights or quotas fail basic validation
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Capped apportionment cannot reach the requested total
    ///
    /// Occurs when the sum of per-bucket caps is smaller than the number
    /// of items to distribute.
    InfeasibleQuota {
        /// Number of items that had to be distributed
        requested: usize,
        /// Items that remained unplaced after the capacity sweep
        unplaced: usize,
    },

    /// An internal unit-conservation check failed
    ///
    /// Should be unreachable given correct phase arithmetic; a trigger
    /// signals a logic defect, never a bad configuration.
    InvariantViolation {
        /// Name of the violated check
        check: &'static str,
        /// Observed and expected values
        details: String,
    },

    /// Fewer than 3 colors carry positive unit counts for tri-color tiles
    ///
    /// Raised after remediation (moving units from bi-minor buckets) has
    /// been attempted and still came up short.
    InfeasibleTriColor {
        /// Colors with a positive tri-unit count
        available: usize,
    },

    /// Tri-color triple construction ran out of distinct colors mid-way
    InfeasibleTriAssignment {
        /// Tri tiles satisfied before the shortage
        satisfied: usize,
        /// Tri tiles that needed a triple
        requested: usize,
    },

    /// The backtracking search exhausted its backtrack budget
    AssignmentInfeasible {
        /// Number of failed subtrees before giving up
        backtracks: usize,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InfeasibleQuota {
                requested,
                unplaced,
            } => {
                write!(
                    f,
                    "Capped apportionment infeasible: {unplaced} of {requested} items exceed total capacity"
                )
            }
            Self::InvariantViolation { check, details } => {
                write!(f, "Invariant violation in {check}: {details}")
            }
            Self::InfeasibleTriColor { available } => {
                write!(
                    f,
                    "Tri-color tiles need 3 distinct colors but only {available} have units remaining"
                )
            }
            Self::InfeasibleTriAssignment {
                satisfied,
                requested,
            } => {
                write!(
                    f,
                    "Tri-color triples infeasible: satisfied {satisfied} of {requested} tiles"
                )
            }
            Self::AssignmentInfeasible { backtracks } => {
                write!(
                    f,
                    "Color assignment search aborted after {backtracks} backtracks"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

/// Create an invalid input error
pub fn invalid_input(reason: &str) -> EngineError {
    EngineError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &str,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
