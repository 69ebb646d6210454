//! # Error Types
//!
//! Validation error types for faktur-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//!
//! ## Scope
//! The three core operations (totals, currency formatting, pagination) are
//! total over their documented input domains and never return errors.
//! `ValidationError` exists for the advisory checks the controller layer
//! runs on raw form input before it reaches the core.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when raw form input doesn't meet UI conventions. They are
/// advisory: the core itself coerces or falls back instead of failing.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

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
        let err = ValidationError::Required {
            field: "invoice number".to_string(),
        };
        assert_eq!(err.to_string(), "invoice number is required");

        let err = ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "tax rate must be between 0 and 100");

        let err = ValidationError::NotFinite {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be a finite number");
    }
}
