//! # Transaction
//!
//! The immutable record of one `add_item` call.
//!
//! ## Snapshot Pattern
//! A transaction freezes the item name, unit price and quantity at the moment
//! the line was rung up. `void_last_transaction` reverses exactly these
//! numbers, so they are never mutated after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::ValidationResult;

/// The error for an amount too large to carry on the register.
pub(crate) fn price_overflow() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: i64::MIN,
        max: i64::MAX,
    }
}

/// One line rung up on the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    item: String,
    unit_price: Money,
    quantity: i64,
    /// `unit_price × quantity`, computed once at creation.
    line_total: Money,
    recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction, computing its line total.
    ///
    /// Fails with `OutOfRange` when `unit_price × quantity` cannot be represented.
    pub(crate) fn new(item: String, unit_price: Money, quantity: i64) -> ValidationResult<Self> {
        let line_total = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(price_overflow)?;

        Ok(Transaction {
            item,
            unit_price,
            quantity,
            line_total,
            recorded_at: Utc::now(),
        })
    }

    /// Item name as entered.
    #[inline]
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Price of a single unit.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Units purchased. Not necessarily positive under the permissive policy.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Amount this line added to the register total.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.line_total
    }

    /// When the line was rung up.
    #[inline]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let tx = Transaction::new("apple".to_string(), Money::from_units(2), 3).unwrap();
        assert_eq!(tx.item(), "apple");
        assert_eq!(tx.unit_price(), Money::from_units(2));
        assert_eq!(tx.quantity(), 3);
        assert_eq!(tx.line_total(), Money::from_units(6));
    }

    #[test]
    fn test_negative_quantity_line_total() {
        let tx = Transaction::new("refund".to_string(), Money::from_cents(250), -2).unwrap();
        assert_eq!(tx.line_total(), Money::from_units(-5));
    }

    #[test]
    fn test_overflowing_line_total_is_rejected() {
        let err = Transaction::new("bulk".to_string(), Money::from_units(i64::MAX), i64::MAX)
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_serializes_price_as_string() {
        let tx = Transaction::new("bread".to_string(), Money::from_cents(499), 1).unwrap();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["item"], "bread");
        assert_eq!(json["unit_price"], "4.99");
        assert_eq!(json["quantity"], 1);
    }
}
