//! # Configuration State
//!
//! Stores console configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PANTRY_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use pantry_core::{Money, PurgePolicy, DEFAULT_CAPACITY, DEFAULT_CURRENCY_SYMBOL};
use pantry_store::DEFAULT_INVENTORY_FILE;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Inventory file loaded at startup.
    pub inventory_path: PathBuf,

    /// Maximum number of products in the catalog.
    pub capacity: usize,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Whether finishing a sale sweeps expired stock.
    pub purge_policy: PurgePolicy,
}

impl Default for ConsoleConfig {
    /// ## Default Values
    /// - Inventory: `./inventory.txt`
    /// - Capacity: 100
    /// - Currency: `RS. `
    /// - Purge after every sale
    fn default() -> Self {
        ConsoleConfig {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            capacity: DEFAULT_CAPACITY,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            purge_policy: PurgePolicy::OnFinish,
        }
    }
}

impl ConsoleConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PANTRY_INVENTORY_PATH`: Inventory file to load
    /// - `PANTRY_CAPACITY`: Catalog capacity (e.g. "250")
    /// - `PANTRY_CURRENCY_SYMBOL`: Currency symbol (e.g. "$")
    /// - `PANTRY_PURGE_AFTER_SALE`: "true" / "false"
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConsoleConfig::from_env`], reading variables through `lookup`.
    ///
    /// Unparsable values are logged and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConsoleConfig::default();

        if let Some(path) = lookup("PANTRY_INVENTORY_PATH") {
            config.inventory_path = PathBuf::from(path);
        }

        if let Some(capacity) = lookup("PANTRY_CAPACITY") {
            match capacity.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.capacity = n,
                _ => warn!(value = %capacity, "Ignoring invalid PANTRY_CAPACITY"),
            }
        }

        if let Some(symbol) = lookup("PANTRY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(purge) = lookup("PANTRY_PURGE_AFTER_SALE") {
            match purge.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => config.purge_policy = PurgePolicy::OnFinish,
                "false" | "0" | "no" => config.purge_policy = PurgePolicy::Never,
                _ => warn!(value = %purge, "Ignoring invalid PANTRY_PURGE_AFTER_SALE"),
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_console::state::ConsoleConfig;
    /// use pantry_core::Money;
    ///
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "RS. 12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
