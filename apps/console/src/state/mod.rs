//! # State Module
//!
//! Everything a menu command needs, owned in one place for the length of
//! the session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        AppState                                 │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐  │   │
//! │  │  │  Inventory   │  │  ConsoleConfig   │  │      Clock       │  │   │
//! │  │  │              │  │                  │  │                  │  │   │
//! │  │  │  products    │  │  inventory_path  │  │  System (local)  │  │   │
//! │  │  │  capacity    │  │  currency_symbol │  │  Fixed (tests)   │  │   │
//! │  │  └──────────────┘  └──────────────────┘  └──────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Single-threaded: commands take `&mut AppState` one at a time.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::ConsoleConfig;

use chrono::{Local, NaiveDate};
use pantry_core::Inventory;

/// Source of "today" for expiry checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The local calendar date, read on every call.
    #[default]
    System,
    /// A pinned date.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Session state shared by all menu commands.
#[derive(Debug)]
pub struct AppState {
    pub inventory: Inventory,
    pub config: ConsoleConfig,
    pub clock: Clock,
}

impl AppState {
    /// Creates an empty catalog sized from `config`.
    pub fn new(config: ConsoleConfig) -> Self {
        AppState {
            inventory: Inventory::with_capacity(config.capacity),
            config,
            clock: Clock::System,
        }
    }

    /// Pins the clock to `date`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_configured_capacity() {
        let config = ConsoleConfig {
            capacity: 3,
            ..ConsoleConfig::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.inventory.capacity(), 3);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
        let state = AppState::new(ConsoleConfig::default()).with_clock(Clock::Fixed(date));
        assert_eq!(state.today(), date);
    }
}
