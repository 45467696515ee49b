//! # Register Demo
//!
//! Rings up a short scripted sale and prints the register's messages.
//!
//! ## Usage
//! ```bash
//! # Default walk-through
//! cargo run -p register-core --bin register-demo
//!
//! # Start from a config file
//! cargo run -p register-core --bin register-demo -- --config ./register.toml
//!
//! # Override the discount applied at the end
//! cargo run -p register-core --bin register-demo -- --discount 25
//!
//! # Show every ledger event
//! RUST_LOG=register_core=debug cargo run -p register-core --bin register-demo
//! ```

use std::env;
use std::path::PathBuf;

use register_core::{Discount, Money, Register, RegisterConfig, RegisterResult, RegisterSummary};
use tracing_subscriber::EnvFilter;

/// The scripted sale: (item, price in cents, quantity).
const SCRIPT: &[(&str, i64, i64)] = &[("apple", 200, 3), ("bread", 500, 1), ("milk", 249, 2)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut discount = String::from("10");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--discount" | "-d" => {
                if i + 1 < args.len() {
                    discount = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Cash Register Demo");
                println!();
                println!("Usage: register-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>   Register config file (TOML)");
                println!("  -d, --discount <N>    Discount to apply at the end (default: 10)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = RegisterConfig::load(config_path)?;
    let mut register = Register::from_config(&config);

    println!("Cash Register Demo");
    println!("==================");
    println!("Quantity policy: {}", register.quantity_policy());
    println!();

    // Applying before anything is set shows the no-op message.
    if register.discount().is_none() {
        if let Err(e) = register.apply_discount() {
            println!("{}", e);
        }
    }

    for &(item, cents, quantity) in SCRIPT {
        let tx = register.add_item(item, Money::from_cents(cents), quantity)?;
        println!(
            "  {:<8} {:>3} x {:>6} = {:>7}   total {}",
            tx.item(),
            tx.quantity(),
            tx.unit_price().to_string(),
            tx.line_total().to_string(),
            register.total()
        );
    }

    if let Err(e) = set_requested_discount(&mut register, &discount) {
        println!("{}", e);
    }
    match register.apply_discount() {
        Ok(applied) => println!("{}", applied),
        Err(e) => println!("{}", e),
    }

    if let Some(voided) = register.void_last_transaction() {
        println!(
            "Voided {} x {}, total now {}",
            voided.quantity(),
            voided.item(),
            register.total()
        );
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&RegisterSummary::from(&register))?);

    Ok(())
}

/// Sets the discount given on the command line.
///
/// Text that is not an integer goes to the register as-is, so it is rejected
/// with the register's own message instead of being silently replaced.
fn set_requested_discount(register: &mut Register, raw: &str) -> RegisterResult<Discount> {
    match raw.trim().parse::<i64>() {
        Ok(percent) => register.set_discount(percent),
        Err(_) => register.set_discount(raw),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every add / void
/// - Default: WARN level, so only rejected discounts are logged
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_discount_accepts_integers() {
        let mut register = Register::new();
        let discount = set_requested_discount(&mut register, "25").unwrap();
        assert_eq!(discount.percent(), 25);
        assert_eq!(register.discount().percent(), 25);
    }

    #[test]
    fn test_unparseable_discount_is_reported_not_defaulted() {
        let mut register = Register::from_discount(Discount::try_from(10i64).unwrap());

        for raw in ["abc", "3.5", ""] {
            let err = set_requested_discount(&mut register, raw).unwrap_err();
            assert!(err.is_invalid_discount());
            assert_eq!(err.to_string(), "Not valid discount");
        }

        let err = set_requested_discount(&mut register, "150").unwrap_err();
        assert_eq!(err.to_string(), "Not valid discount");
        assert_eq!(register.discount().percent(), 10);
    }
}
