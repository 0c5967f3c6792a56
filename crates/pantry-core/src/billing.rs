//! # Billing
//!
//! A sale session borrows the inventory, sells line items one at a time
//! and produces a [`Bill`] when the operator finishes.
//!
//! ## Line Item Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SaleSession::sell(id, qty, today)                    │
//! │                                                                         │
//! │  find_by_id(id) ──── None ──────────────► ProductNotFound              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  is_expired(today) ── true ─────────────► Expired (stays in catalog)   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  qty > 0 ? ────────── no ───────────────► Validation                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  qty <= stock ? ───── no ───────────────► InsufficientStock            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  stock -= qty, total += price × qty ────► Ok(LineItem)                 │
//! │                                                                         │
//! │  Every error leaves stock and total untouched; the session goes on.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Finishing
//! [`SaleSession::finish`] consumes the session and returns a
//! [`Receipt`]. Under [`PurgePolicy::OnFinish`] (the default) it also
//! sweeps every expired product out of the catalog, whether or not any
//! line of this sale touched one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::product::{Product, ProductId};
use crate::validation::validate_sale_quantity;
use crate::FINISH_SENTINEL;

// =============================================================================
// Purge Policy
// =============================================================================

/// What happens to expired stock when a sale session finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurgePolicy {
    /// Sweep expired products out of the catalog at the end of every sale.
    #[default]
    OnFinish,
    /// Leave the catalog alone; purging is a separate operation.
    Never,
}

// =============================================================================
// Line Item
// =============================================================================

/// One accepted line of a bill.
///
/// Name and price are snapshots taken at the moment of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price × quantity
    pub line_total: Money,
}

impl LineItem {
    fn from_product(product: &Product, quantity: i64) -> CoreResult<Self> {
        let line_total = product
            .price()
            .checked_mul_quantity(quantity)
            .ok_or_else(|| out_of_range(product, quantity))?;

        Ok(LineItem {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            line_total,
        })
    }
}

// =============================================================================
// Bill
// =============================================================================

/// Running bill of a sale session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    lines: Vec<LineItem>,
    total: Money,
}

impl Bill {
    pub fn new() -> Self {
        Bill::default()
    }

    /// Total after adding `line`, or `None` on overflow.
    fn total_with(&self, line: &LineItem) -> Option<Money> {
        self.total.checked_add(line.line_total)
    }

    fn push(&mut self, line: LineItem, total: Money) {
        self.total = total;
        self.lines.push(line);
    }

    /// Accumulated total of every accepted line.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Accepted lines, in the order they were sold.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Outcome of a finished sale session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub bill: Bill,
    /// Products swept out of the catalog when the session finished.
    pub purged: Vec<Product>,
}

impl Receipt {
    /// Number of products removed by the end-of-sale sweep.
    pub fn purged_count(&self) -> usize {
        self.purged.len()
    }
}

// =============================================================================
// Sale Session
// =============================================================================

/// One run of the till against an inventory.
///
/// Holds the inventory mutably for its whole lifetime, so nothing else can
/// change the catalog mid-sale.
#[derive(Debug)]
pub struct SaleSession<'a> {
    inventory: &'a mut Inventory,
    bill: Bill,
    policy: PurgePolicy,
}

impl<'a> SaleSession<'a> {
    /// Opens a session that purges expired stock when it finishes.
    pub fn new(inventory: &'a mut Inventory) -> Self {
        Self::with_policy(inventory, PurgePolicy::default())
    }

    pub fn with_policy(inventory: &'a mut Inventory, policy: PurgePolicy) -> Self {
        SaleSession {
            inventory,
            bill: Bill::new(),
            policy,
        }
    }

    /// True for the identifier the operator types to end the sale.
    pub fn is_finish_signal(id: ProductId) -> bool {
        id == FINISH_SENTINEL
    }

    /// Confirms that `id` exists and is not expired, without selling.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`]
    /// - [`CoreError::Expired`]
    pub fn check(&self, id: ProductId, today: NaiveDate) -> CoreResult<&Product> {
        let product = self
            .inventory
            .find_by_id(id)
            .ok_or(CoreError::ProductNotFound(id))?;
        ensure_sellable(product, today)?;
        Ok(product)
    }

    /// Sells `quantity` units of product `id`.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`]
    /// - [`CoreError::Expired`]
    /// - [`CoreError::Validation`] for a zero or negative quantity
    /// - [`CoreError::InsufficientStock`]
    /// - [`CoreError::AmountOutOfRange`] when the line or bill total overflows
    ///
    /// Stock and the running total only change on success.
    pub fn sell(&mut self, id: ProductId, quantity: i64, today: NaiveDate) -> CoreResult<LineItem> {
        let product = self
            .inventory
            .find_by_id_mut(id)
            .ok_or(CoreError::ProductNotFound(id))?;
        ensure_sellable(product, today)?;
        validate_sale_quantity(quantity)?;

        let available = product.quantity();
        if quantity > available {
            return Err(CoreError::InsufficientStock {
                name: product.name().to_string(),
                available,
                requested: quantity,
            });
        }

        let line = LineItem::from_product(product, quantity)?;
        let total = self
            .bill
            .total_with(&line)
            .ok_or_else(|| out_of_range(product, quantity))?;

        product.set_quantity(available - quantity)?;
        self.bill.push(line.clone(), total);
        Ok(line)
    }

    /// The bill so far.
    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    /// Running total so far.
    pub fn total(&self) -> Money {
        self.bill.total()
    }

    /// Ends the sale, applying the purge policy.
    pub fn finish(self, today: NaiveDate) -> Receipt {
        let purged = match self.policy {
            PurgePolicy::OnFinish => self.inventory.drain_expired(today),
            PurgePolicy::Never => Vec::new(),
        };

        Receipt {
            bill: self.bill,
            purged,
        }
    }
}

fn out_of_range(product: &Product, quantity: i64) -> CoreError {
    CoreError::AmountOutOfRange {
        name: product.name().to_string(),
        quantity,
    }
}

fn ensure_sellable(product: &Product, today: NaiveDate) -> CoreResult<()> {
    if product.is_expired(today) {
        return Err(CoreError::Expired {
            name: product.name().to_string(),
            expiry: product.expiry_text(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
