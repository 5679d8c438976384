//! # Schema Bootstrap
//!
//! The `shopping_list` table is an external contract: in production it is
//! expected to exist already. This module only creates it when missing, for
//! tests and the `seed` binary. There is no version tracking.
//!
//! ## Table Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shopping_list                                                          │
//! │                                                                         │
//! │  product_id  INTEGER  PK AUTOINCREMENT   ← never reused                │
//! │  name        TEXT     NOT NULL, <> ''                                  │
//! │  price       TEXT     NOT NULL, decimal digits only                    │
//! │  date_added  TEXT     NOT NULL DEFAULT now (RFC 3339, UTC)             │
//! │  checked     BOOLEAN  NOT NULL DEFAULT 0                               │
//! │  category    TEXT     NOT NULL, <> ''                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};
use shopping_core::SHOPPING_LIST_TABLE;

/// DDL for the `shopping_list` table, embedded at compile time.
pub static SHOPPING_LIST_DDL: &str = include_str!("../schema/shopping_list.sql");

/// Creates the `shopping_list` table if it does not exist.
///
/// ## Example
/// ```rust,ignore
/// schema::apply(&pool).await?;
/// ```
pub async fn apply(pool: &SqlitePool) -> DbResult<()> {
    info!(table = SHOPPING_LIST_TABLE, "Bootstrapping schema");

    sqlx::raw_sql(SHOPPING_LIST_DDL)
        .execute(pool)
        .await
        .map_err(|e| DbError::Schema(e.to_string()))?;

    Ok(())
}

/// Returns whether the `shopping_list` table exists.
pub async fn table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(SHOPPING_LIST_TABLE)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}
