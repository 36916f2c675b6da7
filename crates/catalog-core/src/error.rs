//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - One field's first violated rule                │
//! │                                                                         │
//! │  catalog-client errors (separate crate)                                │
//! │  ├── ClientError      - Backend / transport failures                   │
//! │  └── ConfigError      - Bad catalog.toml or environment                │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors → CoreError → ClientError → CLI   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every [`ValidationError`] is the exact message shown
//! next to the form field, so these strings are part of the contract.

use thiserror::Error;

use crate::validation::{Field, FieldErrors};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Sort key string is not one of the known keys.
    #[error("Unknown sort key: '{0}'. Valid options: none, name, price")]
    UnknownSortKey(String),

    /// A draft failed validation on one or more fields.
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-level validation failure.
///
/// `field` renders as the form label (`Name`, `Price`, `URL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is empty.
    #[error("{field} is required")]
    Required { field: Field },

    /// Text exceeds its maximum length.
    #[error("{field} must be less than {max} characters")]
    TooLong { field: Field, max: usize },

    /// Numeric input could not be read as a number.
    #[error("{field} must be a number")]
    NotANumber { field: Field },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: Field },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: Field },

    /// Value has a fractional part.
    #[error("{field} must be an integer")]
    NotAnInteger { field: Field },

    /// Value exceeds its upper bound.
    #[error("{field} must be less than {max}")]
    TooLarge { field: Field, max: u32 },

    /// Text is not an absolute URL.
    #[error("Must be a valid URL")]
    InvalidUrl { field: Field },
}

impl ValidationError {
    /// Returns the field this error belongs to.
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotANumber { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::InvalidUrl { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: Field::Name };
        assert_eq!(err.to_string(), "Name is required");

        let err = ValidationError::TooLong {
            field: Field::Name,
            max: 50,
        };
        assert_eq!(err.to_string(), "Name must be less than 50 characters");

        let err = ValidationError::TooLong {
            field: Field::FeaturedImage,
            max: 500,
        };
        assert_eq!(err.to_string(), "URL must be less than 500 characters");

        let err = ValidationError::TooLarge {
            field: Field::Price,
            max: 999_999,
        };
        assert_eq!(err.to_string(), "Price must be less than 999999");

        let err = ValidationError::InvalidUrl {
            field: Field::FeaturedImage,
        };
        assert_eq!(err.to_string(), "Must be a valid URL");
    }

    #[test]
    fn test_error_knows_its_field() {
        let err = ValidationError::NotAnInteger { field: Field::Stock };
        assert_eq!(err.field(), Field::Stock);
    }

    #[test]
    fn test_unknown_sort_key_message() {
        let err = CoreError::UnknownSortKey("stock".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown sort key: 'stock'. Valid options: none, name, price"
        );
    }
}
