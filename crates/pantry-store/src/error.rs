//! # Store Error Types
//!
//! Error types for loading the inventory file.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / bad field / CoreError                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path / line context                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Console reports it and continues with whatever was loaded             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use pantry_core::{CoreError, ValidationError};
use thiserror::Error;

/// Inventory file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened or read.
    ///
    /// ## When This Occurs
    /// - `inventory.txt` does not exist in the working directory
    /// - File permissions issue
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record does not have the `id,name,price,quantity,expiryDate` shape.
    #[error("Malformed record: {reason}")]
    Malformed { reason: String },

    /// The record parsed but the catalog refused it (bad date, duplicate,
    /// full, invalid field).
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

impl StoreError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Rejected(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::malformed("expected 5 fields, found 3");
        assert_eq!(err.to_string(), "Malformed record: expected 5 fields, found 3");

        let err: StoreError = CoreError::ProductNotFound(4).into();
        assert_eq!(err.to_string(), "Product not found: 4");
    }

    #[test]
    fn test_validation_lifts_into_rejected() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Rejected(CoreError::Validation(_))));
    }
}
