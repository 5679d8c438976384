//! # Seed Data Generator
//!
//! Populates the shopping list with demo items for development.
//!
//! ## Usage
//! ```bash
//! # 24 items into the database named by DB_URL
//! cargo run -p shopping-db --bin seed
//!
//! # Custom amount and database
//! cargo run -p shopping-db --bin seed -- --count 60 --db "sqlite://./shop.db?mode=rwc"
//! ```
//!
//! Items cycle through the categories `Main`, `Snack`, `Lunch`, `Breakfast`,
//! with prices between 0.99 and 12.98 and `date_added` spread over the last
//! 30 days so the age report has something to show.

use anyhow::Context;
use chrono::{Duration, Utc};
use clap::Parser;
use tracing::{info, warn};

use shopping_core::{Money, NewItem};
use shopping_db::{tracing_setup, Database, DbConfig, ItemStore};

/// Item names per category
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Main",
        &[
            "Fish tacos",
            "Swordfish steak",
            "Roast chicken",
            "Lasagna",
            "Veggie burger",
            "Salmon fillet",
        ],
    ),
    (
        "Snack",
        &[
            "Pretzels",
            "Trail mix",
            "Goldfish crackers",
            "Popcorn",
            "Granola bar",
            "Rice cakes",
        ],
    ),
    (
        "Lunch",
        &[
            "Turkey sandwich",
            "Tuna salad",
            "Tomato soup",
            "Caesar wrap",
            "Pasta salad",
            "Grilled cheese",
        ],
    ),
    (
        "Breakfast",
        &[
            "Oatmeal",
            "Bagels",
            "Greek yogurt",
            "Eggs dozen",
            "Maple syrup",
            "Orange juice",
        ],
    ),
];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Shopping list seed data generator")]
struct Args {
    /// Number of items to generate
    #[arg(short, long, default_value_t = 24)]
    count: usize,

    /// Database URL (defaults to DB_URL)
    #[arg(short, long)]
    db: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_setup::init_tracing()?;

    let args = Args::parse();

    let config = match args.db {
        Some(url) => DbConfig::new(url),
        None => DbConfig::from_env().context("DB_URL is not set; pass --db")?,
    }
    // Seeding targets development databases, which may be empty
    .bootstrap_schema(true);

    let db = Database::new(config).await?;
    info!("Connected to database");

    let existing = db.items().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has items, skipping seed to avoid duplicates");
        db.close().await;
        return Ok(());
    }

    let result = seed_items(&db.items(), args.count).await;
    db.close().await;

    let generated = result?;
    info!(generated, "Seed complete");
    Ok(())
}

/// Inserts `count` generated items, stopping at the first failure.
async fn seed_items(store: &ItemStore, count: usize) -> anyhow::Result<usize> {
    for seed in 0..count {
        let item = generate_item(seed);
        store
            .insert_item(&item)
            .await
            .with_context(|| format!("inserting seed item {seed} ({:?})", item.name))?;
    }
    Ok(count)
}

/// Builds one deterministic demo item.
fn generate_item(seed: usize) -> NewItem {
    let (category, names) = CATEGORIES[seed % CATEGORIES.len()];
    let name = names[(seed / CATEGORIES.len()) % names.len()];

    // 0.99 - 12.98
    let price = Money::from_cents(99 + ((seed * 173) % 1200) as i64);
    let added = Utc::now() - Duration::days((seed % 30) as i64);

    NewItem::new(name, price.to_string(), category)
        .date_added(added)
        .checked(seed % 3 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_items_inserts_every_item() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert_eq!(seed_items(&db.items(), 10).await.unwrap(), 10);
        assert_eq!(db.items().count().await.unwrap(), 10);

        db.close().await;
    }

    #[tokio::test]
    async fn seed_items_stops_on_first_failure() {
        let db = Database::new(DbConfig::in_memory().bootstrap_schema(false))
            .await
            .unwrap();

        let err = seed_items(&db.items(), 5).await.unwrap_err();

        assert!(err.to_string().contains("inserting seed item 0"));

        db.close().await;
    }

    #[test]
    fn generated_prices_are_valid() {
        for seed in 0..48 {
            let item = generate_item(seed);
            let price = Money::parse(item.price.as_deref().unwrap()).unwrap();
            assert!(price.cents() >= 99 && price.cents() <= 1298);
        }
    }
}
