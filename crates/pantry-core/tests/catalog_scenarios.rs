//! End-to-end catalog and till scenarios against the public API.

use chrono::NaiveDate;
use pantry_core::{CoreError, Inventory, Money, Product, SaleSession};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rice() -> Product {
    let price: Money = "50.0".parse().unwrap();
    Product::new(1, "Rice", price, 10, "01-01-2099").unwrap()
}

#[test]
fn adding_to_an_empty_catalog() {
    let mut inventory = Inventory::new();

    inventory.add_product(rice()).unwrap();

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.find_by_id(1).unwrap().name(), "Rice");
}

#[test]
fn adding_the_same_id_twice() {
    let mut inventory = Inventory::new();
    inventory.add_product(rice()).unwrap();

    let err = inventory.add_product(rice()).unwrap_err();

    assert!(matches!(err, CoreError::Duplicate { id: 1, .. }));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn selling_part_of_the_stock() {
    let today = date(2024, 6, 15);
    let mut inventory = Inventory::new();
    inventory.add_product(rice()).unwrap();

    let mut session = SaleSession::new(&mut inventory);
    let before = session.total();
    session.sell(1, 4, today).unwrap();
    let after = session.total();
    session.finish(today);

    assert_eq!(after - before, "200.0".parse::<Money>().unwrap());
    assert_eq!(inventory.find_by_id(1).unwrap().quantity(), 6);
}

#[test]
fn selling_more_than_the_stock() {
    let today = date(2024, 6, 15);
    let mut inventory = Inventory::new();
    inventory.add_product(rice()).unwrap();

    let mut session = SaleSession::new(&mut inventory);
    session.sell(1, 4, today).unwrap();
    let total_before = session.total();

    let err = session.sell(1, 7, today).unwrap_err();

    assert!(matches!(
        err,
        CoreError::InsufficientStock {
            available: 6,
            requested: 7,
            ..
        }
    ));
    assert_eq!(session.total(), total_before);
    session.finish(today);
    assert_eq!(inventory.find_by_id(1).unwrap().quantity(), 6);
}

#[test]
fn expired_products_are_purged_and_disappear() {
    let today = date(2024, 6, 15);
    let mut inventory = Inventory::new();
    inventory.add_product(rice()).unwrap();
    inventory
        .add_product(Product::new(2, "Milk", Money::from_cents(120), 3, "10-06-2024").unwrap())
        .unwrap();

    assert!(inventory.find_by_id(2).unwrap().is_expired(today));

    assert_eq!(inventory.remove_expired(today), 1);
    assert!(inventory.find_by_id(2).is_none());
    assert_eq!(inventory.remove_expired(today), 0);
}

#[test]
fn full_catalog_rejects_new_products() {
    let mut inventory = Inventory::with_capacity(3);
    for (id, name) in [(1, "Rice"), (2, "Milk"), (3, "Eggs")] {
        inventory
            .add_product(Product::new(id, name, Money::from_cents(100), 1, "01-01-2099").unwrap())
            .unwrap();
    }

    let err = inventory
        .add_product(Product::new(4, "Bread", Money::from_cents(100), 1, "01-01-2099").unwrap())
        .unwrap_err();

    assert_eq!(err, CoreError::InventoryFull { capacity: 3 });
    assert_eq!(inventory.len(), 3);
}

#[test]
fn a_sale_session_sweeps_expired_stock_on_finish() {
    let today = date(2024, 6, 15);
    let mut inventory = Inventory::new();
    inventory.add_product(rice()).unwrap();
    inventory
        .add_product(Product::new(2, "Milk", Money::from_cents(120), 3, "10-06-2024").unwrap())
        .unwrap();

    let mut session = SaleSession::new(&mut inventory);
    assert!(matches!(session.sell(2, 1, today), Err(CoreError::Expired { .. })));
    assert!(matches!(session.sell(7, 1, today), Err(CoreError::ProductNotFound(7))));
    session.sell(1, 1, today).unwrap();
    let receipt = session.finish(today);

    assert_eq!(receipt.bill.lines().len(), 1);
    assert_eq!(receipt.bill.total(), Money::from_cents(5000));
    assert_eq!(receipt.purged_count(), 1);
    assert_eq!(inventory.list_all().count(), 1);
}

#[test]
fn a_product_is_off_the_shelf_on_its_expiry_day() {
    let today = date(2024, 6, 15);
    let mut inventory = Inventory::new();
    inventory
        .add_product(Product::new(1, "Bread", Money::from_cents(250), 5, "15-06-2024").unwrap())
        .unwrap();
    inventory
        .add_product(Product::new(2, "Jam", Money::from_cents(400), 5, "16-06-2024").unwrap())
        .unwrap();

    let mut session = SaleSession::new(&mut inventory);
    assert!(matches!(session.sell(1, 1, today), Err(CoreError::Expired { .. })));
    session.sell(2, 1, today).unwrap();
    let receipt = session.finish(today);

    assert_eq!(receipt.purged_count(), 1);
    assert_eq!(receipt.purged[0].name(), "Bread");
    assert!(inventory.find_by_id(2).is_some());
}
