//! # pantry-store: Flat-File Layer for Pantry
//!
//! Loads the startup inventory file into a [`pantry_core::Inventory`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Data Flow                                 │
//! │                                                                         │
//! │  Console startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pantry-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   inventory.txt ──► parse_record() ──► Inventory::add_product() │   │
//! │  │                          │                      │               │   │
//! │  │                          └──── rejected ◄───────┘               │   │
//! │  │                                   │                             │   │
//! │  │                                   ▼                             │   │
//! │  │                              LoadReport                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  In-memory Inventory (no write-back)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pantry_core::Inventory;
//! use pantry_store::load_file;
//!
//! let mut inventory = Inventory::new();
//! match load_file("inventory.txt", &mut inventory) {
//!     Ok(report) => println!("{} products loaded", report.loaded),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use loader::{
    format_record, load_file, load_from_reader, parse_record, LoadReport, RejectedRecord,
};

/// File name looked up in the working directory when nothing else is
/// configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";
