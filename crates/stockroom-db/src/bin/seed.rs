//! # Seed Data Generator
//!
//! Populates the product slot with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 40 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//!
//! # Replace whatever the slot already holds
//! cargo run -p stockroom-db --bin seed -- --reset
//! ```
//!
//! Names are combined from a pantry word list and a size, so the list
//! exercises accented names and case differences in sorting.

use std::env;

use stockroom_core::{Catalog, Product};
use stockroom_db::migrations::migration_status;
use stockroom_db::{Database, DbConfig, DbError, ProductStore, DEFAULT_SLOT_KEY};

/// Base product names, deliberately unsorted and mixed-case.
const NAMES: &[&str] = &[
    "Pão de Forma",
    "arroz",
    "Feijão Preto",
    "Açúcar",
    "Café",
    "Óleo de Soja",
    "macarrão",
    "Leite",
    "Manteiga",
    "Ovos",
    "Farinha de Trigo",
    "Sal",
    "Detergente",
    "Sabão em Pó",
    "Papel Higiênico",
    "Água Mineral",
    "Suco de Laranja",
    "Biscoito",
    "Chocolate",
    "Iogurte",
];

/// Size variants appended to names once the base list is used up.
const SIZES: &[&str] = &["", "1kg", "500g", "2L", "12un"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut db_path = String::from("./stockroom_dev.db");
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--reset" | "-r" => reset = true,
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 40)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -r, --reset        Clear the product slot before seeding");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let store = ProductStore::new(db.clone());

    let (total, applied) = migration_status(db.pool()).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied ({}/{})", applied, total);

    if reset {
        match db.slots().delete(DEFAULT_SLOT_KEY).await {
            Ok(()) => println!("✓ Cleared existing products"),
            Err(DbError::NotFound { .. }) => println!("  Nothing to clear"),
            Err(e) => return Err(e.into()),
        }
    }

    let existing = store.try_load_all().await?;
    if !existing.is_empty() {
        println!("⚠ Slot already has {} products", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Run with --reset to regenerate.");
        return Ok(());
    }

    let catalog = Catalog::from_products((0..count).map(generate_product).collect());
    store.try_save_all(catalog.products()).await?;

    println!();
    println!("✓ Generated {} products", catalog.len());
    if let (Some(first), Some(last)) = (catalog.products().first(), catalog.products().last()) {
        println!("  First: {}", first.name);
        println!("  Last:  {}", last.name);
    }

    db.close().await;
    Ok(())
}

/// Generates a single product from its index.
fn generate_product(seed: usize) -> Product {
    let base = NAMES[seed % NAMES.len()];
    let size = SIZES[(seed / NAMES.len()) % SIZES.len()];
    let round = seed / (NAMES.len() * SIZES.len());

    let mut name = base.to_string();
    if !size.is_empty() {
        name = format!("{} {}", name, size);
    }
    if round > 0 {
        name = format!("{} #{}", name, round + 1);
    }

    // Quantity 0-24, with every seventh product out of stock
    let quantity = if seed % 7 == 0 { 0 } else { ((seed * 13) % 25) as u32 };

    Product::new(name, quantity)
}
