//! Common utilities for spikesim-core
//!
//! - Parameter validation helpers used at every generation boundary
//! - Summary statistics for sanity-checking generated signals
//!
//! Validation bounds come from the config module rather than inline
//! magic numbers.

pub mod stats;
pub mod validation;

// Re-export commonly used items for convenience
pub use stats::SignalStats;

pub use validation::{
    validate_constraint,
    validate_positive,
    validate_range,
    ValidationError,
    ValidationResult,
};
