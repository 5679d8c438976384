//! # Database Pool Management
//!
//! Connection pool creation and release for SQLite.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Pool                           │
//! │                                                                         │
//! │  Process / test setup                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::from_env() / DbConfig::in_memory()                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Acquire pool (+ optional bootstrap)     │
//! │       │                                                                 │
//! │       ├── db.items()    → ItemStore (pool clone)                       │
//! │       └── db.reports()  → ShoppingListReports (pool clone)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← Explicit release at teardown                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each repository call is one independent round-trip on whichever pooled
//! connection is free; write conflicts are SQLite's to resolve.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};
use crate::repository::item::ItemStore;
use crate::repository::report::ShoppingListReports;
use crate::schema;

/// Main database handle providing repository access.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::from_env()?).await?;
///
/// let items = db.items().get_all_items().await?;
/// let totals = db.reports().category_cost().await?;
///
/// db.close().await;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Creates a new database connection pool.
    ///
    /// ## What This Does
    /// 1. Parses the URL into connect options (no further validation)
    /// 2. Enables foreign keys
    /// 3. Creates the connection pool
    /// 4. Creates the `shopping_list` table if `bootstrap_schema` is set
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError::Connectivity)` - The store could not be opened
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(url = %config.redacted_url(), "Initializing database connection");

        let connect_options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| DbError::Connectivity(e.to_string()))?
            // SQLite has them disabled by default for backwards compatibility
            .foreign_keys(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::Connectivity(e.to_string()))?;

        info!(max_connections = config.max_connections, "Database pool created");

        let db = Database::from_pool(pool);

        if config.bootstrap_schema {
            schema::apply(&db.pool).await?;
        }

        Ok(db)
    }

    /// Wraps an already-open pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Database { pool }
    }

    /// Returns a reference to the connection pool.
    ///
    /// For queries not covered by the repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the item store.
    pub fn items(&self) -> ItemStore {
        ItemStore::new(self.pool.clone())
    }

    /// Returns the report queries.
    pub fn reports(&self) -> ShoppingListReports {
        ShoppingListReports::new(self.pool.clone())
    }

    /// Closes the connection pool.
    ///
    /// After calling close, every repository operation fails with
    /// [`DbError::Connectivity`].
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
