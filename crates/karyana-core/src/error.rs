//! # Error Types
//!
//! Validation errors raised before a request is allowed out.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message shown next to the form

use thiserror::Error;

/// Input validation errors.
///
/// These occur when form input doesn't meet requirements. They block the
/// network call entirely; nothing is transmitted until the form validates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A numeric field could not be parsed from the form text.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// A numeric field parsed but is below zero.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "category" };
        assert_eq!(err.to_string(), "category is required");

        let err = ValidationError::NotANumber {
            field: "price",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a number, got 'abc'");

        let err = ValidationError::Negative { field: "stock" };
        assert_eq!(err.to_string(), "stock must not be negative");
    }
}
