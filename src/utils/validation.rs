// src/utils/validation.rs
//! Parameter validation helpers
//!
//! Range and positivity checks shared by the config structs and the
//! generation entry points. All bounds come from `config::constants`
//! rather than inline magic numbers.

use std::fmt;

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Structured validation failures
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value outside an inclusive range
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },
    /// Value required to be strictly positive
    NotPositive {
        field: String,
        value: String,
    },
    /// Cross-field constraint failure
    ConstraintViolation {
        fields: Vec<String>,
        message: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange { field, value, min, max } => {
                write!(f, "Field '{}' value '{}' is out of range [{}, {}]", field, value, min, max)
            }
            ValidationError::NotPositive { field, value } => {
                write!(f, "Field '{}' value '{}' must be strictly positive", field, value)
            }
            ValidationError::ConstraintViolation { fields, message } => {
                write!(f, "Constraint violation for fields [{}]: {}", fields.join(", "), message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the value falls inside the inclusive range `[min, max]`.
pub fn validate_range<T>(value: T, min: T, max: T, field: &str) -> ValidationResult<()>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// Validate the value is strictly positive.
///
/// NaN compares false against zero and is therefore rejected as well.
pub fn validate_positive<T>(value: T, field: &str) -> ValidationResult<()>
where
    T: PartialOrd + fmt::Display + Copy + Default,
{
    if !(value > T::default()) {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validate a cross-field constraint, reporting all fields involved.
pub fn validate_constraint(
    satisfied: bool,
    fields: &[&str],
    message: impl fmt::Display,
) -> ValidationResult<()> {
    if !satisfied {
        return Err(ValidationError::ConstraintViolation {
            fields: fields.iter().map(|s| s.to_string()).collect(),
            message: message.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(validate_range(50, 0, 100, "test_field").is_ok());
        assert!(validate_range(150, 0, 100, "test_field").is_err());
        assert!(validate_range(-10, 0, 100, "test_field").is_err());
    }

    #[test]
    fn test_positive_validation() {
        assert!(validate_positive(0.5, "rate").is_ok());
        assert!(validate_positive(0.0, "rate").is_err());
        assert!(validate_positive(-3.0, "rate").is_err());
        assert!(validate_positive(f64::NAN, "rate").is_err());
    }

    #[test]
    fn test_constraint_validation() {
        assert!(validate_constraint(true, &["a", "b"], "a must exceed b").is_ok());

        let err = validate_constraint(false, &["a", "b"], "a must exceed b").unwrap_err();
        match err {
            ValidationError::ConstraintViolation { fields, message } => {
                assert_eq!(fields, vec!["a".to_string(), "b".to_string()]);
                assert!(message.contains("exceed"));
            }
            _ => panic!("Expected constraint violation"),
        }
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::OutOfRange {
            field: "noise_level".to_string(),
            value: "1.5".to_string(),
            min: "0".to_string(),
            max: "1".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("noise_level"));
        assert!(display.contains("1.5"));
    }
}
