//! # Product Commands

use std::io::{BufRead, Write};

use pantry_core::Product;
use tracing::{debug, info, warn};

use crate::error::ConsoleResult;
use crate::prompt::Prompter;
use crate::state::AppState;

/// Prints every product in catalog order.
pub fn display_catalog<R: BufRead, W: Write>(
    state: &AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    debug!(count = state.inventory.len(), "display_catalog command");

    if state.inventory.is_empty() {
        return prompter.say("No products available in inventory.");
    }

    prompter.say("\nInventory:")?;
    for product in state.inventory.list_all() {
        prompter.say(product.display_with_currency(&state.config.currency_symbol))?;
    }
    Ok(())
}

/// Prompts for a new product and adds it to the catalog.
///
/// The duplicate check runs as soon as id and name are known, so the
/// operator is not asked for the remaining fields of a rejected product.
pub fn add_product<R: BufRead, W: Write>(
    state: &mut AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    debug!("add_product command");

    if state.inventory.is_full() {
        return prompter.say(format!(
            "Inventory is full! Cannot add more than {} products.",
            state.inventory.capacity()
        ));
    }

    let Some(id) = prompter.read_i64("Enter Product ID: ", "product ID")? else {
        return Ok(());
    };
    let Some(name) = prompter.read_line("Enter Product Name: ")? else {
        return Ok(());
    };

    if state.inventory.is_duplicate(&name, id) {
        return prompter.say("Product with this ID or name already exists!");
    }

    let Some(price) = prompter.read_money("Enter Product Price: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompter.read_i64("Enter Product Quantity: ", "quantity")? else {
        return Ok(());
    };
    let Some(expiry) = prompter.read_line("Enter Expiry Date (dd-MM-yyyy): ")? else {
        return Ok(());
    };

    let added = Product::new(id, &name, price, quantity, &expiry)
        .and_then(|product| state.inventory.add_product(product));

    match added {
        Ok(()) => {
            info!(id, name = %name, "Product added");
            prompter.say("Product added successfully!")
        }
        Err(e) => {
            warn!(id, error = %e, "Product rejected");
            prompter.say(e)
        }
    }
}

/// Removes every expired product, naming each one.
pub fn purge_expired<R: BufRead, W: Write>(
    state: &mut AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let today = state.today();
    let removed = state.inventory.drain_expired(today);
    info!(removed = removed.len(), %today, "Expired products purged");

    report_purged(&removed, prompter)
}

/// Names each purged product, then prints the purge summary.
///
/// Shared by the menu purge and the sweep at the end of a sale.
pub(crate) fn report_purged<R: BufRead, W: Write>(
    removed: &[Product],
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    for product in removed {
        prompter.say(format!("Removing expired product: {}", product.name()))?;
    }
    prompter.say(format!(
        "Expired products have been removed. ({} removed)",
        removed.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use crate::state::{AppState, ConsoleConfig};
    use pantry_core::Money;

    #[test]
    fn test_display_empty_catalog() {
        let state = state();
        let mut p = prompter("");
        display_catalog(&state, &mut p).unwrap();
        assert_eq!(output(p), "No products available in inventory.\n");
    }

    #[test]
    fn test_display_lists_in_insertion_order() {
        let mut state = stocked_state();
        state.config.currency_symbol = "$".to_string();
        let mut p = prompter("");
        display_catalog(&state, &mut p).unwrap();

        let out = output(p);
        let rice = out.find("Name: Rice").unwrap();
        let milk = out.find("Name: Milk").unwrap();
        let salt = out.find("Name: Salt").unwrap();
        assert!(rice < milk && milk < salt);
        assert!(out.contains(
            "ID: 1 | Name: Rice | Price: $50.00 | Quantity: 10 | Expiry Date: 01-01-2031"
        ));
    }

    #[test]
    fn test_display_uses_default_currency() {
        let state = stocked_state();
        let mut p = prompter("");
        display_catalog(&state, &mut p).unwrap();

        assert!(output(p).contains("Price: RS. 1.50"));
    }

    #[test]
    fn test_add_product_success() {
        let mut state = state();
        let mut p = prompter("7\nBasmati Rice\nabc\n12.5\n40\n31-12-2030\n");
        add_product(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Invalid input 'abc'"));
        assert!(out.contains("Product added successfully!"));

        let product = state.inventory.find_by_id(7).unwrap();
        assert_eq!(product.name(), "Basmati Rice");
        assert_eq!(product.price(), Money::from_cents(1250));
        assert_eq!(product.quantity(), 40);
    }

    #[test]
    fn test_add_product_duplicate_stops_early() {
        let mut state = stocked_state();
        // Name matches case-insensitively; no further prompts are read
        let mut p = prompter("99\nrice\n");
        add_product(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Product with this ID or name already exists!"));
        assert!(!out.contains("Enter Product Price"));
        assert_eq!(state.inventory.len(), 3);
    }

    #[test]
    fn test_add_product_bad_date_is_reported() {
        let mut state = state();
        let mut p = prompter("1\nRice\n50\n10\n2030-01-01\n");
        add_product(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Invalid expiry date '2030-01-01'"));
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_add_product_when_full() {
        let config = ConsoleConfig {
            capacity: 1,
            ..ConsoleConfig::default()
        };
        let mut state = AppState::new(config);
        state
            .inventory
            .add_product(Product::new(1, "Rice", Money::from_cents(100), 1, "01-01-2031").unwrap())
            .unwrap();

        let mut p = prompter("2\nSalt\n");
        add_product(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Inventory is full! Cannot add more than 1 products."));
        assert!(!out.contains("Enter Product ID"));
    }

    #[test]
    fn test_purge_expired_names_removed_products() {
        let mut state = stocked_state();
        let mut p = prompter("");
        purge_expired(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Removing expired product: Milk"));
        assert!(!out.contains("Removing expired product: Salt"));
        assert!(out.contains("(1 removed)"));
        let ids: Vec<_> = state.inventory.list_all().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
