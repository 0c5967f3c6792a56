//! # Inventory File Loader
//!
//! Reads `id,name,price,quantity,expiryDate` records into an [`Inventory`].
//!
//! ## File Format
//! ```text
//! 1,Rice,50.0,10,01-01-2099
//! 2,Whole Milk,1.20,24,20-06-2024
//! 3,Eggs,2.99,12,30-06-2024
//! ```
//!
//! - One record per line, fields in that order, comma-separated
//! - `expiryDate` is `dd-mm-yyyy`
//! - Whitespace around fields is ignored, blank lines are skipped
//!
//! ## Error Policy
//! A missing file fails the whole load (the caller starts with an empty
//! catalog). A bad record only fails its own line: it is recorded in the
//! [`LoadReport`] and loading continues.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use pantry_core::{Inventory, Money, Product, ProductId};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

/// Number of comma-separated fields in a record.
pub const FIELD_COUNT: usize = 5;

/// A line the loader skipped, with the reason.
#[derive(Debug)]
pub struct RejectedRecord {
    /// 1-based line number in the file.
    pub line: usize,
    pub error: StoreError,
}

/// Summary of one load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Products added to the inventory.
    pub loaded: usize,
    /// Lines that were skipped.
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parses one record into a product.
///
/// ## Example
/// ```rust
/// use pantry_store::parse_record;
///
/// let product = parse_record("1, Rice, 50.0, 10, 01-01-2099").unwrap();
/// assert_eq!(product.name(), "Rice");
/// assert_eq!(product.price().cents(), 5000);
///
/// assert!(parse_record("1,Rice,50.0").is_err());
/// ```
pub fn parse_record(line: &str) -> StoreResult<Product> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StoreError::malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let id: ProductId = fields[0]
        .parse()
        .map_err(|_| StoreError::malformed(format!("id '{}' is not a whole number", fields[0])))?;
    let price: Money = fields[2].parse()?;
    let quantity: i64 = fields[3].parse().map_err(|_| {
        StoreError::malformed(format!("quantity '{}' is not a whole number", fields[3]))
    })?;

    Ok(Product::new(id, fields[1], price, quantity, fields[4])?)
}

/// Renders a product as one record line (the inverse of [`parse_record`]).
pub fn format_record(product: &Product) -> String {
    format!(
        "{},{},{},{},{}",
        product.id(),
        product.name(),
        product.price().to_decimal_string(),
        product.quantity(),
        product.expiry_text()
    )
}

/// Loads every record from `reader` into `inventory`.
///
/// Read failures abort the load; record failures are collected in the
/// returned report.
pub fn load_from_reader<R: BufRead>(reader: R, inventory: &mut Inventory) -> StoreResult<LoadReport> {
    load_lines(reader, Path::new("<input>"), inventory)
}

/// Opens `path` and loads it into `inventory`.
///
/// ## Errors
/// [`StoreError::Io`] when the file cannot be opened or read.
pub fn load_file(path: impl AsRef<Path>, inventory: &mut Inventory) -> StoreResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_lines(BufReader::new(file), path, inventory)?;
    info!(
        path = %path.display(),
        loaded = report.loaded,
        rejected = report.rejected.len(),
        "Inventory file loaded"
    );
    Ok(report)
}

fn load_lines<R: BufRead>(reader: R, path: &Path, inventory: &mut Inventory) -> StoreResult<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| StoreError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let line_no = index + 1;

        // Editors on some platforms prefix the file with a byte order mark
        let record = line.trim_start_matches('\u{feff}').trim();
        if record.is_empty() {
            continue;
        }

        let outcome = parse_record(record)
            .and_then(|product| inventory.add_product(product).map_err(StoreError::from));

        match outcome {
            Ok(()) => report.loaded += 1,
            Err(error) => {
                warn!(line = line_no, %error, "Skipping inventory record");
                report.rejected.push(RejectedRecord {
                    line: line_no,
                    error,
                });
            }
        }
    }

    Ok(report)
}

// =============================================================================
// Unit Tests
// =============================================================================
