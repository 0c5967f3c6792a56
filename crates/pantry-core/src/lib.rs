//! # pantry-core: Pure Business Logic for Pantry
//!
//! This crate is the **heart** of Pantry. It contains the product,
//! inventory and billing rules as plain functions over in-memory data,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Add Product ──► Sale Session ──► Purge Expired      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pantry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ inventory │  │  billing  │  │   money   │  │   │
//! │  │   │  Product  │  │ Inventory │  │SaleSession│  │   Money   │  │   │
//! │  │   │  expiry   │  │ dedup     │  │   Bill    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │               pantry-store (inventory.txt loader)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The `Product` record and its expiry rule
//! - [`inventory`] - Capacity-bounded, duplicate-free catalog
//! - [`billing`] - Sale sessions and the resulting `Bill`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules shared by construction and billing
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pantry_core::{Inventory, Money, Product, SaleSession};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let mut inventory = Inventory::new();
//! let rice = Product::new(1, "Rice", Money::from_cents(5000), 10, "01-01-2099").unwrap();
//! inventory.add_product(rice).unwrap();
//!
//! let mut session = SaleSession::new(&mut inventory);
//! session.sell(1, 4, today).unwrap();
//! let receipt = session.finish(today);
//!
//! assert_eq!(receipt.bill.total(), Money::from_cents(20000));
//! assert_eq!(inventory.find_by_id(1).unwrap().quantity(), 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{Bill, LineItem, PurgePolicy, Receipt, SaleSession};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use product::{Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum number of products held by an [`Inventory`].
///
/// A soft limit: [`Inventory::with_capacity`] accepts any other bound.
pub const DEFAULT_CAPACITY: usize = 100;

/// Product identifier that ends a sale session when entered at the till.
pub const FINISH_SENTINEL: ProductId = -1;

/// Currency symbol placed before every rendered amount unless the caller
/// chooses another.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "RS. ";

/// Text layout of expiry dates, both for parsing and display (`dd-mm-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";
