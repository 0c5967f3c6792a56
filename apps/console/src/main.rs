//! # Pantry Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Read configuration from the environment
//! 3. Load the inventory file
//! 4. Run the menu on stdin/stdout

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    match pantry_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pantry: {}", e);
            ExitCode::FAILURE
        }
    }
}
