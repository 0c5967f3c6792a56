//! # Console Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Operator input                  Rust                                   │
//! │  ──────────────                  ────                                   │
//! │                                                                         │
//! │  "abc" at a numeric prompt ──► ConsoleError::MalformedInput            │
//! │                                   └── reported, prompt repeats          │
//! │                                                                         │
//! │  "7" at the menu ────────────► ConsoleError::InvalidChoice             │
//! │                                   └── reported, menu repeats            │
//! │                                                                         │
//! │  Catalog refuses an action ──► CoreError (Duplicate, Expired, ...)     │
//! │                                   └── reported, command ends            │
//! │                                                                         │
//! │  stdin/stdout fails ─────────► ConsoleError::Io                        │
//! │                                   └── propagated out of run()           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only I/O failures on the terminal itself escape [`crate::run`]. Catalog
//! and loader errors are printed where they occur and the session carries on.

use thiserror::Error;

/// Errors raised while driving the menu.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A numeric prompt received something that is not a number.
    #[error("Invalid input '{input}'. Please enter a valid {field}.")]
    MalformedInput { field: String, input: String },

    /// The menu selection is outside 1..=5.
    #[error("Invalid choice. Please enter a number between 1 and 5.")]
    InvalidChoice(i64),

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Creates a malformed-input error for `field`.
    pub fn malformed(field: impl Into<String>, input: impl Into<String>) -> Self {
        ConsoleError::MalformedInput {
            field: field.into(),
            input: input.into(),
        }
    }
}

/// Result type for console commands.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = ConsoleError::malformed("quantity", "ten");
        assert_eq!(
            err.to_string(),
            "Invalid input 'ten'. Please enter a valid quantity."
        );
    }

    #[test]
    fn test_io_error_message() {
        let err: ConsoleError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(err.to_string(), "Terminal I/O failed: gone");
    }
}
