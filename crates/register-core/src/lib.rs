//! # register-core: Cash Register Ledger
//!
//! A point-of-sale register that accumulates line items into a running
//! total, applies a validated percentage discount, and voids the most recent
//! transaction.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          register-core                                  │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌───────────┐          │
//! │   │   money   │  │ discount  │  │ transaction │  │ validation│          │
//! │   │   Money   │  │ Discount  │  │ Transaction │  │   rules   │          │
//! │   └─────┬─────┘  └─────┬─────┘  └──────┬──────┘  └─────┬─────┘          │
//! │         └──────────────┴───────┬───────┴───────────────┘                │
//! │                                ▼                                        │
//! │                     ┌─────────────────────┐      ┌──────────┐           │
//! │                     │  register::Register │ ◄─── │  config  │           │
//! │                     └─────────────────────┘      └──────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`register`] - The Register aggregate and its four operations
//! - [`money`] - Exact decimal Money type
//! - [`discount`] - Validated percentage
//! - [`transaction`] - Immutable record of one add-item call
//! - [`validation`] - Line-item checks for the strict policy
//! - [`config`] - Start-up settings (TOML file + environment)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use register_core::{Money, Register};
//!
//! let mut register = Register::new();
//! register.add_item("apple", 2, 3).unwrap();
//! register.add_item("bread", 5, 1).unwrap();
//! assert_eq!(register.total(), Money::from_units(11));
//!
//! register.set_discount(10).unwrap();
//! let applied = register.apply_discount().unwrap();
//! assert_eq!(applied.to_string(), "After the discount, the total comes to $9.");
//!
//! let voided = register.void_last_transaction().unwrap();
//! assert_eq!(voided.item(), "bread");
//! assert_eq!(register.items(), ["apple", "apple", "apple"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod discount;
pub mod error;
pub mod money;
pub mod register;
pub mod transaction;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{QuantityPolicy, RegisterConfig};
pub use discount::Discount;
pub use error::{RegisterError, RegisterResult, ValidationError};
pub use money::Money;
pub use register::{AppliedDiscount, Register, RegisterSummary};
pub use transaction::Transaction;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line under the strict policy.
///
/// ## Business Reason
/// Catches typing 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum item name length under the strict policy.
pub const MAX_ITEM_NAME_LEN: usize = 200;
