//! # Discount
//!
//! A validated whole-number percentage in `0..=100`.
//!
//! ## Accepted Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input              Result                                              │
//! │  ─────────────────  ──────────────────────────────────────────────      │
//! │  10 (i32/i64/u8)    Ok(10%)                                             │
//! │  0, 100             Ok (both bounds are inclusive)                      │
//! │  -1, 101            OutOfRange                                          │
//! │  json!(10)          Ok(10%)                                             │
//! │  json!(3.5)         InvalidFormat (not an integer)                      │
//! │  json!(50.0)        InvalidFormat (integer-valued is not an integer)    │
//! │  json!("50"), "50"  InvalidFormat (text is never parsed)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::ValidationError;

const FIELD: &str = "discount";

/// A percentage discount, guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Discount(u8);

impl Discount {
    /// Largest accepted percentage.
    pub const MAX: u8 = 100;

    /// No discount.
    pub const NONE: Discount = Discount(0);

    /// Validates an integer percentage.
    pub fn new(percent: i64) -> Result<Self, ValidationError> {
        if !(0..=i64::from(Self::MAX)).contains(&percent) {
            return Err(ValidationError::OutOfRange {
                field: FIELD.to_string(),
                min: 0,
                max: i64::from(Self::MAX),
            });
        }

        Ok(Discount(percent as u8))
    }

    /// Returns the percentage.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Checks if this is a zero discount.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The share of the total that remains after the discount, `(100 - pct) / 100`.
    pub fn remaining_fraction(&self) -> Decimal {
        Decimal::new(i64::from(Self::MAX - self.0), 2)
    }

    fn wrong_type(reason: &str) -> ValidationError {
        ValidationError::InvalidFormat {
            field: FIELD.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Discount> for i64 {
    fn from(discount: Discount) -> Self {
        i64::from(discount.0)
    }
}

impl TryFrom<i64> for Discount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Discount::new(value)
    }
}

impl TryFrom<i32> for Discount {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Discount::new(i64::from(value))
    }
}

impl TryFrom<u8> for Discount {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Discount::new(i64::from(value))
    }
}

/// Untyped input, e.g. a discount field in a JSON request body.
///
/// Only JSON integers are accepted. Floats are rejected even when they
/// carry an integral value.
impl TryFrom<&Value> for Discount {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Discount::new(i)
                } else if n.is_u64() {
                    // Positive but beyond i64, so certainly beyond 100.
                    Err(ValidationError::OutOfRange {
                        field: FIELD.to_string(),
                        min: 0,
                        max: i64::from(Self::MAX),
                    })
                } else {
                    Err(Self::wrong_type("must be an integer"))
                }
            }
            Value::String(_) => Err(Self::wrong_type("must be an integer, got text")),
            Value::Null => Err(ValidationError::Required {
                field: FIELD.to_string(),
            }),
            _ => Err(Self::wrong_type("must be an integer")),
        }
    }
}

impl TryFrom<Value> for Discount {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Discount::try_from(&value)
    }
}

/// Text is a different type from an integer and is never parsed.
impl TryFrom<&str> for Discount {
    type Error = ValidationError;

    fn try_from(_value: &str) -> Result<Self, Self::Error> {
        Err(Self::wrong_type("must be an integer, got text"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(Discount::try_from(0).unwrap(), Discount::NONE);
        assert_eq!(Discount::try_from(100).unwrap().percent(), 100);
        assert!(Discount::try_from(-1).is_err());
        assert!(Discount::try_from(101).is_err());
        assert!(Discount::try_from(i64::MAX).is_err());
    }

    #[test]
    fn test_out_of_range_error() {
        let err = Discount::try_from(101i64).unwrap_err();
        assert_eq!(err.to_string(), "discount must be between 0 and 100");
    }

    #[test]
    fn test_json_integers_only() {
        assert_eq!(Discount::try_from(&json!(25)).unwrap().percent(), 25);
        assert!(matches!(
            Discount::try_from(&json!(3.5)),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Discount::try_from(&json!(50.0)),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Discount::try_from(&json!("50")),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Discount::try_from(&json!(u64::MAX)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Discount::try_from(&json!(null)),
            Err(ValidationError::Required { .. })
        ));
        assert!(Discount::try_from(&json!([10])).is_err());
        assert!(Discount::try_from(&json!(true)).is_err());
    }

    #[test]
    fn test_text_is_rejected() {
        assert!(matches!(
            Discount::try_from("50"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_remaining_fraction() {
        assert_eq!(Discount::NONE.remaining_fraction(), dec!(1));
        assert_eq!(Discount::try_from(10).unwrap().remaining_fraction(), dec!(0.9));
        assert_eq!(Discount::try_from(100).unwrap().remaining_fraction(), dec!(0));
    }

    #[test]
    fn test_serde_validates() {
        let d: Discount = serde_json::from_str("15").unwrap();
        assert_eq!(d.percent(), 15);
        assert_eq!(serde_json::to_string(&d).unwrap(), "15");
        assert!(serde_json::from_str::<Discount>("150").is_err());
        assert!(serde_json::from_str::<Discount>("-5").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Discount::try_from(10).unwrap().to_string(), "10%");
    }
}
