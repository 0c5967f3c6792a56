//! # Error Types
//!
//! Domain-specific error types for pantry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pantry-core errors (this file)                                        │
//! │  ├── CoreError        - Inventory and billing rule violations          │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  pantry-store errors (separate crate)                                  │
//! │  └── StoreError       - Bulk file loading failures                     │
//! │                                                                         │
//! │  console errors (in app)                                               │
//! │  └── ConsoleError     - Malformed operator input, terminal I/O         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError / ConsoleError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable: the driver reports it and carries on.

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Expiry text is not a `dd-mm-yyyy` calendar date.
    #[error("Invalid expiry date '{input}': expected dd-mm-yyyy")]
    InvalidDate { input: String },

    /// The catalog already holds its configured number of products.
    #[error("Inventory is full (capacity {capacity})")]
    InventoryFull { capacity: usize },

    /// A live product already uses this id or (case-insensitive) name.
    ///
    /// ## User Workflow
    /// ```text
    /// Add Product (id: 1, name: "rice")
    ///      │
    ///      ▼
    /// Catalog already has (id: 1, name: "Rice")
    ///      │
    ///      ▼
    /// Duplicate { id: 1, name: "rice" }
    ///      │
    ///      ▼
    /// Console shows: "Product with ID 1 or name 'rice' already exists"
    /// ```
    #[error("Product with ID {id} or name '{name}' already exists")]
    Duplicate { id: ProductId, name: String },

    /// No live product has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Sale attempted against a product past its expiry date.
    #[error("Product '{name}' expired on {expiry} and cannot be sold")]
    Expired { name: String, expiry: String },

    /// Insufficient stock to complete the line item.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A line total or bill total does not fit in the money range.
    ///
    /// The line is refused and stock is left untouched.
    #[error("Amount for {quantity} x {name} is out of range")]
    AmountOutOfRange { name: String, quantity: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a rule of the catalog is even consulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. "12.345" as a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
