//! # Sale Commands
//!
//! Drives one [`SaleSession`] from the till prompt.
//!
//! ```text
//! Enter Product ID ──► -1 ? ──yes──► finish ──► bill + purge report
//!        │               │
//!        │               no
//!        │               ▼
//!        │        check (not found / expired) ──err──► report, ask again
//!        │               │
//!        │               ▼
//!        │        Enter quantity ──► sell ──err──► report, ask again
//!        │                             │
//!        └──────────◄──────────────────┘
//! ```

use std::io::{BufRead, Write};

use pantry_core::{PurgePolicy, Receipt, SaleSession};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::error::ConsoleResult;
use crate::commands::product::report_purged;
use crate::prompt::Prompter;
use crate::state::{AppState, ConsoleConfig};

/// Runs a sale until the operator enters the finish sentinel.
pub fn run_sale<R: BufRead, W: Write>(
    state: &mut AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let session_id = Uuid::new_v4();
    let span = info_span!("sale", session = %session_id);
    let _guard = span.enter();

    let today = state.today();
    let AppState {
        inventory, config, ..
    } = state;
    let mut session = SaleSession::with_policy(inventory, config.purge_policy);
    debug!(%today, policy = ?config.purge_policy, "Sale started");

    loop {
        let Some(id) =
            prompter.read_i64("Enter Product ID to buy (or -1 to finish): ", "product ID")?
        else {
            break;
        };
        if SaleSession::is_finish_signal(id) {
            break;
        }

        if let Err(e) = session.check(id, today) {
            debug!(id, error = %e, "Product not sellable");
            prompter.say(e)?;
            continue;
        }

        let Some(quantity) = prompter.read_i64("Enter quantity to buy: ", "quantity")? else {
            break;
        };

        match session.sell(id, quantity, today) {
            Ok(line) => prompter.say(format!(
                "Added {} x {} to your bill ({})",
                line.quantity,
                line.name,
                config.format_currency(line.line_total)
            ))?,
            Err(e) => {
                warn!(id, quantity, error = %e, "Sale line rejected");
                prompter.say(e)?;
            }
        }
    }

    let receipt = session.finish(today);
    info!(
        lines = receipt.bill.lines().len(),
        total = %receipt.bill.total(),
        purged = receipt.purged_count(),
        "Sale finished"
    );
    print_receipt(&receipt, config, prompter)
}

fn print_receipt<R: BufRead, W: Write>(
    receipt: &Receipt,
    config: &ConsoleConfig,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    prompter.say("\nYour Bill:")?;
    for line in receipt.bill.lines() {
        prompter.say(format!(
            "{} x {} @ {} = {}",
            line.quantity,
            line.name,
            config.format_currency(line.unit_price),
            config.format_currency(line.line_total)
        ))?;
    }
    prompter.say(format!(
        "Total Amount: {}",
        config.format_currency(receipt.bill.total())
    ))?;

    match config.purge_policy {
        PurgePolicy::OnFinish => report_purged(&receipt.purged, prompter),
        PurgePolicy::Never => Ok(()),
    }
}
