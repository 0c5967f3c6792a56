//! # Menu Commands
//!
//! The numbered main menu and the commands behind each entry.
//!
//! | Choice | Command                          |
//! |--------|----------------------------------|
//! | 1      | [`product::display_catalog`]     |
//! | 2      | [`product::add_product`]         |
//! | 3      | [`sale::run_sale`]               |
//! | 4      | [`product::purge_expired`]       |
//! | 5      | exit                             |

pub mod product;
pub mod sale;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};
use crate::prompt::Prompter;
use crate::state::AppState;

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayCatalog,
    AddProduct,
    Sale,
    PurgeExpired,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = ConsoleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::DisplayCatalog),
            2 => Ok(MenuChoice::AddProduct),
            3 => Ok(MenuChoice::Sale),
            4 => Ok(MenuChoice::PurgeExpired),
            5 => Ok(MenuChoice::Exit),
            other => Err(ConsoleError::InvalidChoice(other)),
        }
    }
}

const MENU: &str = "\n--- Inventory Management System ---\n\
1. Display Inventory\n\
2. Add Product\n\
3. Generate Bill\n\
4. Remove Expired Products\n\
5. Exit";

/// Runs the main menu until the operator exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    state: &mut AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    loop {
        prompter.say(MENU)?;

        let Some(choice) = prompter.read_i64("Choose an option: ", "number")? else {
            break;
        };

        let choice = match MenuChoice::try_from(choice) {
            Ok(choice) => choice,
            Err(e) => {
                prompter.say(e)?;
                continue;
            }
        };
        debug!(?choice, "Menu selection");

        match choice {
            MenuChoice::DisplayCatalog => product::display_catalog(state, prompter)?,
            MenuChoice::AddProduct => product::add_product(state, prompter)?,
            MenuChoice::Sale => sale::run_sale(state, prompter)?,
            MenuChoice::PurgeExpired => product::purge_expired(state, prompter)?,
            MenuChoice::Exit => break,
        }
    }

    prompter.say("Exiting the system. Goodbye!")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_menu_choice_from_number() {
        assert_eq!(MenuChoice::try_from(1).unwrap(), MenuChoice::DisplayCatalog);
        assert_eq!(MenuChoice::try_from(5).unwrap(), MenuChoice::Exit);
        assert!(matches!(
            MenuChoice::try_from(0),
            Err(ConsoleError::InvalidChoice(0))
        ));
        assert!(MenuChoice::try_from(6).is_err());
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let mut state = state();
        let mut p = prompter("5\n");
        run_menu(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("1. Display Inventory"));
        assert!(out.contains("Exiting the system. Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut state = state();
        let mut p = prompter("9\nmenu\n5\n");
        run_menu(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Invalid choice. Please enter a number between 1 and 5."));
        assert!(out.contains("Invalid input 'menu'"));
        assert_eq!(out.matches("5. Exit").count(), 2);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut state = stocked_state();
        let mut p = prompter("1\n");
        run_menu(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Name: Rice"));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn test_full_session() {
        let mut state = stocked_state();
        let script = "2\n4\nOats\n3.25\n8\n01-01-2031\n3\n1\n4\n-1\n1\n5\n";
        let mut p = prompter(script);
        run_menu(&mut state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Product added successfully!"));
        assert!(out.contains("Total Amount: RS. 200.00"));
        // Milk expired on 01-06-2030 and is swept when the sale finishes
        assert!(out.contains("Removing expired product: Milk"));
        assert!(state.inventory.find_by_id(2).is_none());
        assert_eq!(state.inventory.find_by_id(1).unwrap().quantity(), 6);
        assert!(state.inventory.find_by_id(4).is_some());
    }
}
