//! # shopping-db: Database Layer for the Shopping List
//!
//! This crate provides database access for the `shopping_list` table.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopping List Data Flow                            │
//! │                                                                         │
//! │  Caller (test, seed, shopping-drills)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopping-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (bootstrap) │  │   │
//! │  │   │               │    │ ItemStore     │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ Reports       │    │ shopping_list│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (URL from DB_URL)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Database configuration and environment loading
//! - [`pool`] - Connection pool creation and release
//! - [`schema`] - Bootstrap DDL for the `shopping_list` table
//! - [`tracing_setup`] - Log filter and subscriber for the binaries
//! - [`error`] - Normalized database error types
//! - [`repository`] - ItemStore and report queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopping_core::NewItem;
//! use shopping_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let item = db.items().insert_item(&NewItem::new("Fish", "4.99", "Main")).await?;
//! let found = db.items().get_by_id(item.id).await?;
//!
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod tracing_setup;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, DbConfig};
pub use error::{ConstraintKind, DbError, DbResult};
pub use pool::Database;

// Repository re-exports for convenience
pub use repository::item::ItemStore;
pub use repository::report::ShoppingListReports;
