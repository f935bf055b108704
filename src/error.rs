// src/error.rs
//! Error types for the generation pipeline

use crate::utils::validation::ValidationError;
use std::fmt;

/// Result alias for generation operations
pub type SynthResult<T> = Result<T, SynthesisError>;

/// Errors raised by the generation pipeline.
///
/// Generation is pure computation over a random stream, so there are no
/// transient failures and no retry semantics. Every error aborts the run
/// before any output is produced; partial recordings are never returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisError {
    /// A parameter makes generation impossible: zero sizing, non-positive
    /// rate, or an observation horizon shorter than the spike window.
    InvalidParameter {
        field: String,
        reason: String,
    },
}

impl SynthesisError {
    /// Build the pervasive invalid-parameter case without boilerplate.
    pub fn invalid_parameter(field: &str, reason: impl fmt::Display) -> Self {
        SynthesisError::InvalidParameter {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::InvalidParameter { field, reason } => {
                write!(f, "Invalid parameter '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SynthesisError {}

impl From<ValidationError> for SynthesisError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::OutOfRange { field, value, min, max } => {
                SynthesisError::InvalidParameter {
                    field,
                    reason: format!("value {} is outside [{}, {}]", value, min, max),
                }
            }
            ValidationError::NotPositive { field, value } => {
                SynthesisError::InvalidParameter {
                    field,
                    reason: format!("value {} must be strictly positive", value),
                }
            }
            ValidationError::ConstraintViolation { fields, message } => {
                SynthesisError::InvalidParameter {
                    field: fields.join(", "),
                    reason: message,
                }
            }
        }
    }
}
