//! # Validation Module
//!
//! Line-item validation used by the strict quantity policy.
//!
//! ## When These Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item(item, price, qty)                                             │
//! │       │                                                                 │
//! │       ├── QuantityPolicy::Permissive → no checks, legacy behavior       │
//! │       │     (qty 0 adds nothing, negative qty subtracts)                │
//! │       │                                                                 │
//! │       └── QuantityPolicy::Strict → validate_line_item() ← THIS MODULE   │
//! │             ├── item name empty?  → Required                            │
//! │             ├── qty <= 0?         → MustBePositive                      │
//! │             ├── qty > 999?        → OutOfRange                          │
//! │             └── price < 0?        → OutOfRange                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discount validation lives on [`Discount`](crate::Discount) itself.

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use register_core::validation::validate_item_name;
///
/// assert!(validate_item_name("apple").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(item: &str) -> ValidationResult<()> {
    let item = item.trim();

    if item.is_empty() {
        return Err(ValidationError::Required {
            field: "item".to_string(),
        });
    }

    if item.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use register_core::validation::validate_price;
/// use register_core::Money;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Runs every line-item check, reporting the first failure.
pub fn validate_line_item(item: &str, price: Money, qty: i64) -> ValidationResult<()> {
    validate_item_name(item)?;
    validate_quantity(qty)?;
    validate_price(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("apple").is_ok());
        assert!(validate_item_name("Coca-Cola 330ml").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_line_item_reports_first_failure() {
        let err = validate_line_item("", Money::from_units(-1), 0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "item".to_string()
            }
        );

        let err = validate_line_item("apple", Money::from_units(-1), 0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBePositive {
                field: "quantity".to_string()
            }
        );

        assert!(validate_line_item("apple", Money::from_units(2), 3).is_ok());
    }
}
