//! # Validation Module
//!
//! Field rules applied before a product enters the catalog or a line
//! item reaches the bill.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt / file loader                                 │
//! │  ├── Is it a number at all?  (MalformedInput / StoreError::Malformed)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Is the number / name acceptable?  (ValidationError)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory / SaleSession                                      │
//! │  └── Does it fit the catalog?  (Duplicate, Full, InsufficientStock)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::validation::{validate_product_name, validate_sale_quantity};
//!
//! assert!(validate_product_name("Basmati Rice").is_ok());
//! assert!(validate_sale_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::product::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted.
pub const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
/// - Must not contain a comma (the bulk file is comma-separated)
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if name.contains(',') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain commas".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product id.
///
/// Negative ids are reserved for the till's finish signal.
pub fn validate_product_id(id: ProductId) -> ValidationResult<()> {
    if id < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use pantry_core::money::Money;
/// use pantry_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity requested for one line item.
///
/// ## User Workflow
/// ```text
/// Till: "Enter quantity to buy"
///       │
///       ▼
/// validate_sale_quantity(qty) ← THIS FUNCTION
///       │
///       ├── qty <= 0? → Error: "quantity must be positive"
///       │
///       └── OK → stock and expiry checks
/// ```
pub fn validate_sale_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
