//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    11 × 0.9 - 5 = 4.8999999999999995  ❌ WRONG!                         │
//! │                                                                         │
//! │  A register total becomes fractional as soon as a percentage discount   │
//! │  is applied, and applying it twice yields fractions of a cent.          │
//! │  Integer cents cannot hold that, floats cannot hold it exactly.         │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal in major units                           │
//! │    11 × 90 / 100 - 5 = 4.9   (exact)                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::money::Money;
//!
//! let price = Money::from_cents(250); // $2.50
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total, Money::from_cents(750));
//! assert_eq!(line_total.whole_units(), 7);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::discount::Discount;
use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in major currency units (dollars), stored exactly.
///
/// ## Design Decisions
/// - **Signed**: a void or a negative-quantity line may push the total below zero
/// - **Full precision**: discounted totals keep every fractional digit; only
///   display paths truncate
/// - **Serialized as a string** so JSON consumers never see a float
///
/// ## Where Money is Used
/// ```text
/// add_item(price) ──► Transaction.unit_price ──► Transaction.line_total
///                                                       │
///                                                       ▼
///                     Register.total ◄── += line_total / -= line_total (void)
///                           │
///                           ▼
///                  apply_discount ──► "After the discount, the total comes to $9."
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub fn from_units(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the exact underlying amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Multiplies by a quantity, returning `None` if the result does not fit.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts, returning `None` on overflow.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Subtracts, clamping at the representable bounds.
    #[inline]
    pub fn saturating_sub(&self, other: Money) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// No rounding happens here: `total * (100 - pct) / 100` is kept exactly.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::{Discount, Money};
    ///
    /// let subtotal = Money::from_units(100);
    /// let ten_off = Discount::try_from(10).unwrap();
    /// assert_eq!(subtotal.apply_percentage_discount(ten_off), Money::from_units(90));
    /// ```
    pub fn apply_percentage_discount(&self, discount: Discount) -> Money {
        Money(self.0 * discount.remaining_fraction())
    }

    /// Whole currency units, truncated toward zero.
    ///
    /// `9.9` → `9`, `-0.5` → `0`. Saturates at the `i64` bounds.
    pub fn whole_units(&self) -> i64 {
        let truncated = self.0.trunc();
        truncated.to_i64().unwrap_or(if truncated.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money::from_units(units)
    }
}

impl From<i32> for Money {
    fn from(units: i32) -> Self {
        Money::from_units(i64::from(units))
    }
}

/// Converts a float price, keeping its shortest decimal representation.
///
/// `2.5` becomes exactly `2.5`; NaN and infinities are rejected.
impl TryFrom<f64> for Money {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // f64's Display is the shortest string that round-trips, so 0.1 stays 0.1.
        if !value.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("{} is not a finite amount", value),
            });
        }
        value.to_string().parse()
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        Decimal::from_str(digits)
            .map(Money)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("'{}' is not a decimal amount", s),
            })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the exact amount with a leading dollar sign.
///
/// ## Note
/// This is for logs and debugging. The legacy discount message uses
/// [`Money::whole_units`] instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, self.0.abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
        assert_eq!(money.whole_units(), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_units(5).to_string(), "$5");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(5);

        assert_eq!(a + b, Money::from_units(15));
        assert_eq!(a - b, Money::from_units(5));
        assert_eq!(a * 3, Money::from_units(30));
        assert_eq!(-b, Money::from_units(-5));
    }

    #[test]
    fn test_discount_keeps_full_precision() {
        let ten_off = Discount::try_from(10).unwrap();
        let once = Money::from_units(11).apply_percentage_discount(ten_off);
        assert_eq!(once.amount(), dec!(9.9));

        let twice = once.apply_percentage_discount(ten_off);
        assert_eq!(twice.amount(), dec!(8.91));

        let thrice = twice.apply_percentage_discount(ten_off);
        assert_eq!(thrice.amount(), dec!(8.019));
    }

    #[test]
    fn test_whole_units_truncates_toward_zero() {
        assert_eq!(Money::new(dec!(9.9)).whole_units(), 9);
        assert_eq!(Money::new(dec!(4.9)).whole_units(), 4);
        assert_eq!(Money::new(dec!(-0.5)).whole_units(), 0);
        assert_eq!(Money::new(dec!(-4.9)).whole_units(), -4);
    }

    #[test]
    fn test_float_conversion_is_exact_for_prices() {
        assert_eq!(Money::try_from(2.5).unwrap(), Money::from_cents(250));
        assert_eq!(Money::try_from(0.1).unwrap().amount(), dec!(0.1));
        assert!(Money::try_from(f64::NAN).is_err());
        assert!(Money::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("$10.99".parse::<Money>().unwrap(), Money::from_cents(1099));
        assert_eq!(" 5 ".parse::<Money>().unwrap(), Money::from_units(5));
        assert!("ten".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_units(-1).is_negative());
        assert!(!Money::from_units(1).is_negative());
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_multiply_quantity(2), None);
        assert_eq!(Money::from_units(i64::MAX).checked_multiply_quantity(i64::MAX), None);
        assert_eq!(max.checked_add(Money::from_units(1)), None);
        assert_eq!(Money::new(Decimal::MIN).checked_sub(Money::from_units(1)), None);
        assert_eq!(
            Money::new(Decimal::MIN).saturating_sub(Money::from_units(1)),
            Money::new(Decimal::MIN)
        );

        assert_eq!(
            Money::from_cents(299).checked_multiply_quantity(3),
            Some(Money::from_cents(897))
        );
        assert_eq!(
            Money::from_units(6).checked_add(Money::from_units(5)),
            Some(Money::from_units(11))
        );
        assert_eq!(
            Money::from_units(6).checked_sub(Money::from_units(5)),
            Some(Money::from_units(1))
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_units(6), Money::from_units(5)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(11));
    }

    /// 0.1 + 0.2 is exactly 0.3 here, unlike f64.
    #[test]
    fn test_no_float_drift() {
        let sum = Money::new(dec!(0.1)) + Money::new(dec!(0.2));
        assert_eq!(sum, Money::new(dec!(0.3)));
    }
}
