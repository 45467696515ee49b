//! # Register
//!
//! The register aggregate: running total, discount, item list and the
//! transaction stack.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation              State Change                                    │
//! │  ─────────────────────  ──────────────────────────────────────────────  │
//! │  set_discount(v)        discount = v            (or Not valid discount) │
//! │  add_item(i, p, q)      total += p×q, items += [i; q], push Transaction │
//! │  apply_discount()       total = total × (100 - d) / 100                 │
//! │  void_last_transaction  pop Transaction, total -= line_total,           │
//! │                         items drop up to q entries from the tail        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Then Void
//! `apply_discount` rewrites the total in place. A later void still subtracts
//! the transaction's undiscounted line total, so once a discount has been
//! applied the total no longer equals the sum of the remaining line totals:
//!
//! ```text
//! apple 2×3 → 6, bread 5×1 → 11, 10% off → 9.9, void bread → 4.9 (not 5.4)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::config::{QuantityPolicy, RegisterConfig};
use crate::discount::Discount;
use crate::error::{RegisterError, RegisterResult, ValidationError};
use crate::money::Money;
use crate::transaction::{price_overflow, Transaction};
use crate::validation::validate_line_item;

// =============================================================================
// Applied Discount
// =============================================================================

/// Outcome of a successful [`Register::apply_discount`].
///
/// `Display` renders the legacy message with the total truncated toward zero:
/// `After the discount, the total comes to $9.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    pub discount: Discount,
    pub previous_total: Money,
    pub total: Money,
}

impl fmt::Display for AppliedDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "After the discount, the total comes to ${}.",
            self.total.whole_units()
        )
    }
}

// =============================================================================
// Register
// =============================================================================

/// A single cash register.
///
/// ## Invariants
/// - `discount` is always within `0..=100`
/// - `transactions` only grows by `add_item` and only shrinks by
///   `void_last_transaction`, one entry at a time from the end
/// - Until a discount is applied, `total` equals the sum of the line totals
///   still on the stack
///
/// Not internally synchronized. Share it behind a single lock per register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    discount: Discount,
    total: Money,
    /// One entry per unit purchased.
    items: Vec<String>,
    transactions: Vec<Transaction>,
    #[serde(default)]
    quantity_policy: QuantityPolicy,
}

impl Register {
    /// Creates an empty register with no discount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty register with an already validated discount.
    pub fn from_discount(discount: Discount) -> Self {
        Register {
            discount,
            ..Self::default()
        }
    }

    /// Creates an empty register, validating `value` like [`Register::set_discount`].
    ///
    /// An invalid value is reported and the register starts with no discount.
    /// Use [`Register::try_with_discount`] to see why.
    pub fn with_discount<T>(value: T) -> Self
    where
        T: TryInto<Discount, Error = ValidationError>,
    {
        Self::try_with_discount(value).0
    }

    /// Creates an empty register along with the outcome of setting its discount.
    ///
    /// The register is always usable: on rejection it starts at 0% and the
    /// second element carries the `InvalidDiscount` error.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::{Discount, Register};
    ///
    /// let (register, outcome) = Register::try_with_discount(150i64);
    /// assert_eq!(register.discount(), Discount::NONE);
    /// assert_eq!(outcome.unwrap_err().to_string(), "Not valid discount");
    /// ```
    pub fn try_with_discount<T>(value: T) -> (Self, RegisterResult<Discount>)
    where
        T: TryInto<Discount, Error = ValidationError>,
    {
        let mut register = Self::default();
        let outcome = register.set_discount(value);
        (register, outcome)
    }

    /// Creates an empty register from loaded configuration.
    pub fn from_config(config: &RegisterConfig) -> Self {
        let mut register = Self::with_discount(config.discount);
        register.quantity_policy = config.quantity_policy;
        register
    }

    /// Sets the line-item checks used by [`Register::add_item`].
    pub fn with_quantity_policy(mut self, policy: QuantityPolicy) -> Self {
        self.quantity_policy = policy;
        self
    }

    // -------------------------------------------------------------------------
    // Discount
    // -------------------------------------------------------------------------

    /// Replaces the discount percentage.
    ///
    /// Accepts integers and untyped JSON values. Anything that is not a true
    /// integer in `0..=100` is rejected with "Not valid discount" and the
    /// previous discount stays in place.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::Register;
    /// use serde_json::json;
    ///
    /// let mut register = Register::new();
    /// assert!(register.set_discount(20).is_ok());
    ///
    /// let err = register.set_discount(&json!(3.5)).unwrap_err();
    /// assert_eq!(err.to_string(), "Not valid discount");
    /// assert_eq!(register.discount().percent(), 20);
    /// ```
    pub fn set_discount<T>(&mut self, value: T) -> RegisterResult<Discount>
    where
        T: TryInto<Discount, Error = ValidationError>,
    {
        match value.try_into() {
            Ok(discount) => {
                debug!(discount = %discount, "Discount set");
                self.discount = discount;
                Ok(discount)
            }
            Err(reason) => {
                let err = RegisterError::InvalidDiscount(reason);
                warn!(error = ?err, kept = %self.discount, "{}", err);
                Err(err)
            }
        }
    }

    /// Applies the current discount to the running total.
    ///
    /// The discount is not reset afterwards: calling this again compounds,
    /// e.g. 100 → 90 → 81 at 10%.
    ///
    /// ## Errors
    /// [`RegisterError::NoDiscountToApply`] when the discount is 0. The total
    /// is left untouched.
    pub fn apply_discount(&mut self) -> RegisterResult<AppliedDiscount> {
        if self.discount.is_none() {
            let err = RegisterError::NoDiscountToApply;
            info!("{}", err);
            return Err(err);
        }

        let previous_total = self.total;
        self.total = previous_total.apply_percentage_discount(self.discount);

        let applied = AppliedDiscount {
            discount: self.discount,
            previous_total,
            total: self.total,
        };
        info!(
            discount = %applied.discount,
            previous_total = %applied.previous_total,
            total = %applied.total,
            "{}",
            applied
        );
        Ok(applied)
    }

    // -------------------------------------------------------------------------
    // Line Items
    // -------------------------------------------------------------------------

    /// Rings up `quantity` units of `item` at `price` each.
    ///
    /// Under [`QuantityPolicy::Permissive`] a zero quantity adds nothing to
    /// the item list and a negative quantity lowers the total. Under
    /// [`QuantityPolicy::Strict`] such lines are rejected with no state change.
    ///
    /// ## Errors
    /// Under either policy, a line whose total (or the resulting register
    /// total) is too large to represent is rejected as an out-of-range price
    /// and nothing changes.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::{Money, Register};
    ///
    /// let mut register = Register::new();
    /// register.add_item("apple", 2, 3).unwrap();
    /// assert_eq!(register.total(), Money::from_units(6));
    /// assert_eq!(register.items(), ["apple", "apple", "apple"]);
    /// ```
    pub fn add_item(
        &mut self,
        item: impl Into<String>,
        price: impl Into<Money>,
        quantity: i64,
    ) -> RegisterResult<Transaction> {
        let item = item.into();
        let price = price.into();

        if self.quantity_policy == QuantityPolicy::Strict {
            validate_line_item(&item, price, quantity)?;
        }

        let transaction = Transaction::new(item, price, quantity)?;
        let total = self
            .total
            .checked_add(transaction.line_total())
            .ok_or_else(price_overflow)?;
        self.total = total;

        let units = usize::try_from(quantity).unwrap_or(0);
        self.items
            .extend(std::iter::repeat(transaction.item().to_string()).take(units));

        debug!(
            item = %transaction.item(),
            unit_price = %transaction.unit_price(),
            quantity = transaction.quantity(),
            line_total = %transaction.line_total(),
            total = %self.total,
            "Item added"
        );

        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Rings up a single unit.
    pub fn add_single(
        &mut self,
        item: impl Into<String>,
        price: impl Into<Money>,
    ) -> RegisterResult<Transaction> {
        self.add_item(item, price, 1)
    }

    /// Undoes the most recent transaction that has not been voided yet.
    ///
    /// Subtracts its line total (as recorded, before any discount) and drops
    /// up to `quantity` names from the end of the item list. Returns `None`
    /// and changes nothing when there is nothing to void.
    pub fn void_last_transaction(&mut self) -> Option<Transaction> {
        let transaction = self.transactions.pop()?;
        // Only reachable after a discount rewrote the total; clamp, never fail.
        self.total = self.total.saturating_sub(transaction.line_total());

        let units = usize::try_from(transaction.quantity())
            .unwrap_or(0)
            .min(self.items.len());
        self.items.truncate(self.items.len() - units);

        debug!(
            item = %transaction.item(),
            quantity = transaction.quantity(),
            line_total = %transaction.line_total(),
            total = %self.total,
            "Transaction voided"
        );
        Some(transaction)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current discount percentage.
    #[inline]
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// Running total at full precision.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Item names, one per unit, in the order rung up.
    #[inline]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Transactions still eligible for voiding, oldest first.
    #[inline]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transaction the next void would reverse.
    #[inline]
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Number of units on the item list.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing has been rung up (or everything was voided).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    #[inline]
    pub fn quantity_policy(&self) -> QuantityPolicy {
        self.quantity_policy
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Register totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSummary {
    pub item_count: usize,
    pub transaction_count: usize,
    pub discount_percent: u8,
    pub total: Money,
}

impl From<&Register> for RegisterSummary {
    fn from(register: &Register) -> Self {
        RegisterSummary {
            item_count: register.item_count(),
            transaction_count: register.transactions().len(),
            discount_percent: register.discount().percent(),
            total: register.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
