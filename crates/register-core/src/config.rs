//! # Register Configuration
//!
//! Start-up settings for a register.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     REGISTER_DISCOUNT=10                                                │
//! │     REGISTER_QUANTITY_POLICY=strict                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     path passed to RegisterConfig::load                                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     discount = 0, quantity_policy = permissive                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # register.toml
//! discount = 10                   # whole percent, 0..=100
//! quantity_policy = "permissive"  # permissive | strict
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::discount::Discount;
use crate::error::{RegisterError, RegisterResult};

/// Environment variable overriding the starting discount.
pub const ENV_DISCOUNT: &str = "REGISTER_DISCOUNT";

/// Environment variable overriding the quantity policy.
pub const ENV_QUANTITY_POLICY: &str = "REGISTER_QUANTITY_POLICY";

// =============================================================================
// Quantity Policy
// =============================================================================

/// How `add_item` treats questionable line items.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PERMISSIVE (Default)                                                   │
/// │  • No checks at all                                                     │
/// │  • qty 0 rings up nothing, negative qty lowers the total                │
/// │                                                                         │
/// │  STRICT                                                                 │
/// │  • Non-empty item name, 1 <= qty <= 999, price >= 0                     │
/// │  • Rejected lines leave the register untouched                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    #[default]
    Permissive,
    Strict,
}

impl std::fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityPolicy::Permissive => write!(f, "permissive"),
            QuantityPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for QuantityPolicy {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" | "lenient" => Ok(QuantityPolicy::Permissive),
            "strict" => Ok(QuantityPolicy::Strict),
            other => Err(RegisterError::Config(format!(
                "Unknown quantity policy: '{}'. Valid options: permissive, strict",
                other
            ))),
        }
    }
}

// =============================================================================
// Register Config
// =============================================================================

/// Settings a [`Register`](crate::Register) starts with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Starting discount in whole percent. Kept as a raw integer so an
    /// out-of-range value is reported by `validate` instead of a parse error.
    pub discount: i64,

    /// Line-item checks applied by `add_item`.
    pub quantity_policy: QuantityPolicy,
}

impl RegisterConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> RegisterResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if `config_path` is given and exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> RegisterResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading register config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load register config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RegisterResult<()> {
        Discount::try_from(self.discount).map_err(|e| RegisterError::Config(e.to_string()))?;
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup; unparseable values are skipped.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(discount) = lookup(ENV_DISCOUNT) {
            match discount.trim().parse::<i64>() {
                Ok(d) => {
                    debug!(discount = d, "Overriding discount from environment");
                    self.discount = d;
                }
                Err(_) => warn!(value = %discount, "Ignoring non-integer discount in environment"),
            }
        }

        if let Some(policy) = lookup(ENV_QUANTITY_POLICY) {
            match policy.parse() {
                Ok(parsed) => {
                    debug!(policy = %parsed, "Overriding quantity policy from environment");
                    self.quantity_policy = parsed;
                }
                Err(e) => warn!(value = %policy, "{}", e),
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
