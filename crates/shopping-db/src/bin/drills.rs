//! # Shopping List Drills
//!
//! Runs the report queries against the database named by `DB_URL` and
//! prints the result as pretty JSON on stdout. Logs go to stderr.
//!
//! ## Usage
//! ```bash
//! shopping-drills list
//! shopping-drills search fish
//! shopping-drills paginate 2
//! shopping-drills added-before 10
//! shopping-drills category-cost
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use shopping_db::{tracing_setup, Database, DbConfig};

#[derive(Debug, Parser)]
#[command(name = "shopping-drills", about = "Report queries over the shopping list")]
struct Cli {
    /// Database URL (defaults to DB_URL)
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Every item, in insertion order
    List,
    /// Items whose name contains TERM (case-insensitive)
    Search { term: String },
    /// One page of six items (pages start at 1)
    Paginate { page: u32 },
    /// Items added more than DAYS days ago
    AddedBefore { days: i64 },
    /// Total price per category
    CategoryCost,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_setup::init_tracing()?;

    let cli = Cli::parse();

    let config = match cli.db {
        Some(url) => DbConfig::new(url),
        None => DbConfig::from_env().context("DB_URL is not set; pass --db")?,
    };
    let db = Database::new(config).await?;

    let result = run(&db, cli.command).await;
    db.close().await;

    println!("{}", result?);
    Ok(())
}

async fn run(db: &Database, command: Command) -> anyhow::Result<String> {
    debug!(?command, "Running drill");

    let reports = db.reports();
    match command {
        Command::List => to_json(&db.items().get_all_items().await?),
        Command::Search { term } => to_json(&reports.search_by_name(&term).await?),
        Command::Paginate { page } => to_json(&reports.paginate(page).await?),
        Command::AddedBefore { days } => to_json(&reports.added_before(days).await?),
        Command::CategoryCost => to_json(&reports.category_cost().await?),
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("serializing result")
}
