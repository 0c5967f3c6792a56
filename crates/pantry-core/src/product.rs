//! # Product
//!
//! One catalog entry: a perishable item with a fixed id, name, price and
//! expiry date, and a stock level that changes as it is sold.
//!
//! ```text
//! ┌─────────────────────────┐
//! │        Product          │
//! │  ─────────────────────  │
//! │  id        (fixed)      │
//! │  name      (fixed)      │
//! │  price     (fixed)      │
//! │  expiry    (fixed)      │
//! │  quantity  (mutable) ◄──┼── SaleSession::sell
//! └─────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_id, validate_product_name, validate_stock};
use crate::{DATE_FORMAT, DEFAULT_CURRENCY_SYMBOL};

/// Business identifier of a product, as typed at the till.
pub type ProductId = i64;

/// A product held in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
    expiry_date: NaiveDate,
}

impl Product {
    /// Builds a product from operator or file input.
    ///
    /// `expiry` must be a `dd-mm-yyyy` date, otherwise
    /// [`CoreError::InvalidDate`] is returned. The name is stored trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::{Money, Product};
    ///
    /// let rice = Product::new(1, "Rice", Money::from_cents(5000), 10, "01-01-2099").unwrap();
    /// assert_eq!(rice.display(), "ID: 1 | Name: Rice | Price: RS. 50.00 | Quantity: 10 | Expiry Date: 01-01-2099");
    ///
    /// assert!(Product::new(2, "Salt", Money::from_cents(100), 5, "2099-01-01").is_err());
    /// ```
    pub fn new(
        id: ProductId,
        name: &str,
        price: Money,
        quantity: i64,
        expiry: &str,
    ) -> CoreResult<Self> {
        Self::with_expiry_date(id, name, price, quantity, parse_expiry_date(expiry)?)
    }

    /// Builds a product from an already-parsed expiry date.
    pub fn with_expiry_date(
        id: ProductId,
        name: &str,
        price: Money,
        quantity: i64,
        expiry_date: NaiveDate,
    ) -> CoreResult<Self> {
        validate_product_id(id)?;
        validate_product_name(name)?;
        validate_price(price)?;
        validate_stock(quantity)?;

        Ok(Product {
            id,
            name: name.trim().to_string(),
            price,
            quantity,
            expiry_date,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units currently in stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Replaces the stock level. Negative levels are rejected.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// True once the expiry date has begun.
    ///
    /// The expiry date marks the first day the product is off the shelf:
    /// from midnight that day it can no longer be sold.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today >= self.expiry_date
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Expiry date rendered as `dd-mm-yyyy`.
    pub fn expiry_text(&self) -> String {
        self.expiry_date.format(DATE_FORMAT).to_string()
    }

    /// One-line catalog rendering with the default currency symbol.
    pub fn display(&self) -> String {
        self.display_with_currency(DEFAULT_CURRENCY_SYMBOL)
    }

    /// One-line catalog rendering with a chosen currency symbol.
    pub fn display_with_currency(&self, symbol: &str) -> String {
        format!(
            "ID: {} | Name: {} | Price: {} | Quantity: {} | Expiry Date: {}",
            self.id,
            self.name,
            self.price.format_with_symbol(symbol),
            self.quantity,
            self.expiry_text()
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Parses a `dd-mm-yyyy` expiry date.
pub fn parse_expiry_date(text: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        input: text.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
