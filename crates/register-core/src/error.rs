//! # Error Types
//!
//! Domain-specific error types for register-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  RegisterError          - What a register operation reports             │
//! │  ├── InvalidDiscount    - "Not valid discount"                          │
//! │  ├── NoDiscountToApply  - "There is no discount to apply."              │
//! │  ├── Validation         - strict-policy add_item rejections             │
//! │  └── Config             - register config could not be loaded           │
//! │                                                                         │
//! │  ValidationError        - Input validation failures (field level)       │
//! │                                                                         │
//! │  Flow: ValidationError → RegisterError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverable Only
//! Nothing in this crate is fatal. Every error variant means "the request was
//! rejected and the register still holds its last known-good state".
//!
//! The `Display` text of [`RegisterError::InvalidDiscount`] and
//! [`RegisterError::NoDiscountToApply`] is scraped by downstream consumers,
//! so those two strings must not change.

use thiserror::Error;

// =============================================================================
// Register Error
// =============================================================================

/// Errors reported by [`Register`](crate::Register) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A discount was rejected (wrong type or outside 0..=100).
    ///
    /// The register keeps its previous discount.
    #[error("Not valid discount")]
    InvalidDiscount(#[source] ValidationError),

    /// `apply_discount` was called while the discount is 0.
    #[error("There is no discount to apply.")]
    NoDiscountToApply,

    /// A line item was rejected by the strict quantity policy.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The register configuration could not be loaded.
    #[error("Invalid register config: {0}")]
    Config(String),
}

impl RegisterError {
    /// Returns true if this error is a rejected discount.
    pub fn is_invalid_discount(&self) -> bool {
        matches!(self, RegisterError::InvalidDiscount(_))
    }
}

impl From<toml::de::Error> for RegisterError {
    fn from(err: toml::de::Error) -> Self {
        RegisterError::Config(err.to_string())
    }
}

impl From<std::io::Error> for RegisterError {
    fn from(err: std::io::Error) -> Self {
        RegisterError::Config(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value has the wrong type or shape (e.g. `"50"` or `3.5` for a discount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_messages() {
        let err = RegisterError::InvalidDiscount(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
        assert_eq!(err.to_string(), "Not valid discount");
        assert_eq!(
            RegisterError::NoDiscountToApply.to_string(),
            "There is no discount to apply."
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item".to_string(),
        };
        assert_eq!(err.to_string(), "item is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_invalid_discount_keeps_source() {
        use std::error::Error as _;

        let err = RegisterError::InvalidDiscount(ValidationError::InvalidFormat {
            field: "discount".to_string(),
            reason: "must be an integer".to_string(),
        });
        assert!(err.is_invalid_discount());
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("discount has invalid format: must be an integer")
        );
    }

    #[test]
    fn test_validation_converts_to_register_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let err: RegisterError = validation_err.into();
        assert!(matches!(err, RegisterError::Validation(_)));
        assert!(!err.is_invalid_discount());
    }
}
