//! # Seed Data Generator
//!
//! Writes a sample `inventory.txt` for development.
//!
//! ## Usage
//! ```bash
//! # Generate 20 products (default) into ./inventory.txt
//! cargo run -p pantry-store --bin seed
//!
//! # Generate a custom amount, three of them already expired
//! cargo run -p pantry-store --bin seed -- --count 60 --expired 3
//!
//! # Specify output path
//! cargo run -p pantry-store --bin seed -- --out ./data/inventory.txt
//! ```
//!
//! Each product has:
//! - Sequential id starting at 1
//! - Unique name: `{Item} {Size}`
//! - Price: 0.99 - 19.99
//! - Stock: 0 - 100
//! - Expiry: 1 - 365 days from today (or 1 - 30 days ago for the expired ones)

use chrono::{Duration, Local};
use pantry_core::{Money, Product, DEFAULT_CAPACITY};
use pantry_store::{format_record, DEFAULT_INVENTORY_FILE};
use std::env;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};

/// Perishable items for realistic test data
const ITEMS: &[&str] = &[
    "Whole Milk",
    "Skim Milk",
    "Greek Yogurt",
    "Cheddar Cheese",
    "Butter",
    "Eggs",
    "White Bread",
    "Brown Bread",
    "Basmati Rice",
    "Lentils",
    "Chickpeas",
    "Tomatoes",
    "Potatoes",
    "Onions",
    "Bananas",
    "Apples",
    "Chicken Breast",
    "Minced Beef",
    "Orange Juice",
    "Tofu",
];

/// Size variants for products, with a price add-on in cents
const SIZES: &[(&str, i64)] = &[
    ("Small", 0),
    ("Medium", 150),
    ("Large", 300),
    ("Family", 600),
    ("Bulk", 1000),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 20;
    let mut expired: usize = 2;
    let mut out_path = String::from(DEFAULT_INVENTORY_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--count" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(count);
                    i += 1;
                }
            }
            "-e" | "--expired" => {
                if i + 1 < args.len() {
                    expired = args[i + 1].parse().unwrap_or(expired);
                    i += 1;
                }
            }
            "-o" | "--out" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Pantry Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of products to generate (default: 20)");
                println!("  -e, --expired <N>   How many of them are already expired (default: 2)");
                println!("  -o, --out <PATH>    Output file (default: ./{})", DEFAULT_INVENTORY_FILE);
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let max = ITEMS.len() * SIZES.len();
    if count > max {
        println!("⚠ Only {} distinct products available, capping count", max);
        count = max;
    }
    if count > DEFAULT_CAPACITY {
        println!(
            "⚠ {} products exceed the default capacity of {}; set PANTRY_CAPACITY when loading",
            count, DEFAULT_CAPACITY
        );
    }

    println!("🌱 Pantry Seed Data Generator");
    println!("============================");
    println!("Output:   {}", out_path);
    println!("Products: {} ({} expired)", count, expired.min(count));
    println!();

    let file = match OpenOptions::new().write(true).create_new(true).open(&out_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            println!("⚠ {} already exists", out_path);
            println!("  Skipping seed to avoid clobbering it.");
            println!("  Delete the file to regenerate.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let mut writer = BufWriter::new(file);

    let mut generated = 0;
    for seed in 0..count {
        let product = generate_product(seed, seed < expired)?;
        writeln!(writer, "{}", format_record(&product))?;
        generated += 1;
    }
    writer.flush()?;

    println!("✓ Wrote {} products", generated);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with realistic data.
fn generate_product(seed: usize, expired: bool) -> Result<Product, pantry_core::CoreError> {
    let today = Local::now().date_naive();

    let item = ITEMS[seed % ITEMS.len()];
    let (size, price_addon) = SIZES[(seed / ITEMS.len()) % SIZES.len()];
    let name = format!("{} {}", item, size);

    // Base price 0.99 - 9.99 plus size addon
    let price = Money::from_cents(99 + ((seed * 37) % 900) as i64 + price_addon);

    // Stock 0 - 100
    let quantity = ((seed * 13) % 101) as i64;

    let offset = if expired {
        -(1 + (seed % 30) as i64)
    } else {
        1 + ((seed * 7) % 365) as i64
    };

    Product::with_expiry_date(
        seed as i64 + 1,
        &name,
        price,
        quantity,
        today + Duration::days(offset),
    )
}
