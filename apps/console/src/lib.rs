//! # Pantry Console Library
//!
//! Interactive menu for the Pantry inventory tracker.
//!
//! ## Module Organization
//! ```text
//! pantry_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── prompt.rs       ◄─── Line-oriented operator I/O
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState and Clock
//! │   └── config.rs   ◄─── Configuration from PANTRY_* variables
//! ├── commands/
//! │   ├── mod.rs      ◄─── Main menu loop
//! │   ├── product.rs  ◄─── Display / add / purge commands
//! │   └── sale.rs     ◄─── Billing session command
//! └── error.rs        ◄─── Console error type
//! ```

pub mod commands;
pub mod error;
pub mod prompt;
pub mod state;

use std::io::{self, BufRead, Write};

use pantry_store::load_file;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use error::{ConsoleError, ConsoleResult};
use prompt::Prompter;
use state::{AppState, ConsoleConfig};

/// Runs the console against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, PANTRY crates at INFO; override with RUST_LOG      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • PANTRY_* environment variables over defaults                      │
/// │                                                                         │
/// │  3. Load Inventory File ──────────────────────────────────────────────► │
/// │     • Bad lines reported and skipped                                    │
/// │     • Missing file reported, session starts empty                       │
/// │                                                                         │
/// │  4. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • Until option 5 or end of input                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ConsoleResult<()> {
    init_tracing();

    let config = ConsoleConfig::from_env();
    info!(?config, "Starting Pantry console");

    let mut state = AppState::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run_with(&mut state, &mut prompter)
}

/// Loads the configured inventory file into `state`, then runs the menu.
pub fn run_with<R: BufRead, W: Write>(
    state: &mut AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    load_inventory(state, prompter)?;
    commands::run_menu(state, prompter)
}

fn load_inventory<R: BufRead, W: Write>(
    state: &mut AppState,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    match load_file(&state.config.inventory_path, &mut state.inventory) {
        Ok(report) => {
            prompter.say(format!("Loaded {} products from inventory.", report.loaded))?;
            for rejected in &report.rejected {
                prompter.say(format!("Line {}: {}", rejected.line, rejected.error))?;
            }
        }
        Err(e) => {
            warn!(error = %e, "Starting with an empty inventory");
            prompter.say(format!("An error getting data occurred: {}", e))?;
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pantry_core=trace` - Trace one crate only
/// - Default: WARN, with the pantry crates at INFO
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,pantry_console=info,pantry_store=info")
    });

    // A subscriber may already be installed when embedded in a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
