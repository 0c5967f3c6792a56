//! # Inventory
//!
//! The catalog: an ordered, capacity-bounded list of products in which no
//! two entries share an id or a case-insensitive name.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Caller                   Method                  Catalog Change        │
//! │  ──────                   ──────                  ──────────────        │
//! │                                                                         │
//! │  Add / bulk load ────────► add_product() ───────► products.push(p)     │
//! │                                                                         │
//! │  Till lookup ────────────► find_by_id() ────────► (read only)          │
//! │                                                                         │
//! │  Purge / sale end ───────► remove_expired() ────► order-preserving      │
//! │                                                   partition             │
//! │                                                                         │
//! │  Display ────────────────► list_all() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `products.len() <= capacity`
//! - ids are unique; names are unique ignoring case
//! - insertion order is kept; removals never reorder survivors
//!
//! Every lookup is a linear scan. With the catalog bounded at a hundred
//! entries, a map index would not pay for itself.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};
use crate::DEFAULT_CAPACITY;

/// Ordered, capacity-bounded product catalog.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    capacity: usize,
}

impl Inventory {
    /// Creates an empty catalog holding at most [`DEFAULT_CAPACITY`] products.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty catalog with a configured capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Inventory {
            products: Vec::new(),
            capacity,
        }
    }

    /// Appends a product to the end of the catalog.
    ///
    /// ## Errors
    /// - [`CoreError::InventoryFull`] when the catalog is at capacity
    /// - [`CoreError::Duplicate`] when a live entry shares the id or name
    ///
    /// The catalog is unchanged on error.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::InventoryFull {
                capacity: self.capacity,
            });
        }

        if self.is_duplicate(product.name(), product.id()) {
            return Err(CoreError::Duplicate {
                id: product.id(),
                name: product.name().to_string(),
            });
        }

        self.products.push(product);
        Ok(())
    }

    /// Returns the product with this id, if any.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Mutable lookup, used by the till to take stock.
    pub fn find_by_id_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// True if any live entry has this id or this name (ignoring case).
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::{Inventory, Money, Product};
    ///
    /// let mut inventory = Inventory::new();
    /// inventory
    ///     .add_product(Product::new(1, "Rice", Money::from_cents(5000), 10, "01-01-2099").unwrap())
    ///     .unwrap();
    ///
    /// assert!(inventory.is_duplicate("RICE", 99));
    /// assert!(inventory.is_duplicate("Lentils", 1));
    /// assert!(!inventory.is_duplicate("Lentils", 2));
    /// ```
    pub fn is_duplicate(&self, name: &str, id: ProductId) -> bool {
        self.products
            .iter()
            .any(|p| p.id() == id || p.has_name(name))
    }

    /// Removes every product expired as of `today` and returns them in
    /// their former catalog order.
    ///
    /// Survivors keep their relative order.
    pub fn drain_expired(&mut self, today: NaiveDate) -> Vec<Product> {
        let (expired, kept): (Vec<Product>, Vec<Product>) = std::mem::take(&mut self.products)
            .into_iter()
            .partition(|p| p.is_expired(today));

        self.products = kept;
        expired
    }

    /// Removes every product expired as of `today`, returning how many
    /// were discarded.
    pub fn remove_expired(&mut self, today: NaiveDate) -> usize {
        self.drain_expired(today).len()
    }

    /// Iterates the catalog in its current order.
    ///
    /// Call again to restart from the first entry.
    pub fn list_all(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Number of live products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Maximum number of products this catalog accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.products.len() >= self.capacity
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn product(id: ProductId, name: &str, expiry: &str) -> Product {
        Product::new(id, name, Money::from_cents(100), 5, expiry).unwrap()
    }

    fn names(inventory: &Inventory) -> Vec<&str> {
        inventory.list_all().map(Product::name).collect()
    }

    #[test]
    fn test_add_product_appends_in_order() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();
        inventory.add_product(product(2, "Milk", "01-01-2099")).unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(names(&inventory), vec!["Rice", "Milk"]);
        assert_eq!(inventory.find_by_id(2).unwrap().name(), "Milk");
    }

    #[test]
    fn test_add_product_rejects_duplicate_id() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();

        let err = inventory
            .add_product(product(1, "Lentils", "01-01-2099"))
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Duplicate {
                id: 1,
                name: "Lentils".to_string()
            }
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_add_product_rejects_duplicate_name_ignoring_case() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();

        let err = inventory
            .add_product(product(2, "rICE", "01-01-2099"))
            .unwrap_err();

        assert!(matches!(err, CoreError::Duplicate { id: 2, .. }));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.find_by_id(2).is_none());
    }

    #[test]
    fn test_add_product_rejects_when_full() {
        let mut inventory = Inventory::with_capacity(2);
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();
        inventory.add_product(product(2, "Milk", "01-01-2099")).unwrap();
        assert!(inventory.is_full());

        let err = inventory
            .add_product(product(3, "Eggs", "01-01-2099"))
            .unwrap_err();

        assert_eq!(err, CoreError::InventoryFull { capacity: 2 });
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_full_is_reported_before_duplicate() {
        let mut inventory = Inventory::with_capacity(1);
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();

        let err = inventory
            .add_product(product(1, "Rice", "01-01-2099"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InventoryFull { .. }));
    }

    #[test]
    fn test_default_capacity() {
        let inventory = Inventory::default();
        assert_eq!(inventory.capacity(), DEFAULT_CAPACITY);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_find_by_id_miss() {
        let inventory = Inventory::new();
        assert!(inventory.find_by_id(42).is_none());
    }

    #[test]
    fn test_find_by_id_mut_updates_stock() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();

        inventory.find_by_id_mut(1).unwrap().set_quantity(1).unwrap();
        assert_eq!(inventory.find_by_id(1).unwrap().quantity(), 1);
    }

    #[test]
    fn test_remove_expired_keeps_survivor_order() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();
        inventory.add_product(product(2, "Milk", "01-06-2024")).unwrap();
        inventory.add_product(product(3, "Bread", "16-06-2024")).unwrap();
        // Expires today, so it is already off the shelf
        inventory.add_product(product(4, "Yogurt", "15-06-2024")).unwrap();
        inventory.add_product(product(5, "Honey", "01-01-2030")).unwrap();

        let removed = inventory.remove_expired(today());

        assert_eq!(removed, 2);
        assert_eq!(names(&inventory), vec!["Rice", "Bread", "Honey"]);
        assert!(inventory.find_by_id(2).is_none());
        assert!(inventory.find_by_id(4).is_none());
    }

    #[test]
    fn test_remove_expired_is_idempotent() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Milk", "01-06-2024")).unwrap();
        inventory.add_product(product(2, "Rice", "01-01-2099")).unwrap();

        assert_eq!(inventory.remove_expired(today()), 1);
        assert_eq!(inventory.remove_expired(today()), 0);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_drain_expired_returns_removed_in_order() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Milk", "01-06-2024")).unwrap();
        inventory.add_product(product(2, "Rice", "01-01-2099")).unwrap();
        inventory.add_product(product(3, "Cream", "02-06-2024")).unwrap();

        let drained: Vec<String> = inventory
            .drain_expired(today())
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(drained, vec!["Milk", "Cream"]);
        assert_eq!(names(&inventory), vec!["Rice"]);
    }

    #[test]
    fn test_purge_frees_names_and_ids() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Milk", "01-06-2024")).unwrap();
        inventory.remove_expired(today());

        assert!(!inventory.is_duplicate("Milk", 1));
        inventory.add_product(product(1, "Milk", "01-07-2024")).unwrap();
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_list_all_is_restartable() {
        let mut inventory = Inventory::new();
        inventory.add_product(product(1, "Rice", "01-01-2099")).unwrap();
        inventory.add_product(product(2, "Milk", "01-01-2099")).unwrap();

        assert_eq!(inventory.list_all().count(), 2);
        assert_eq!(inventory.list_all().count(), 2);
        assert_eq!(Inventory::new().list_all().count(), 0);
    }
}
