//! # Item Store
//!
//! Entity-level operations against the `shopping_list` table.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Outcomes per Operation                               │
//! │                                                                         │
//! │  operation        found / ok          not found        store rejects   │
//! │  ───────────────  ──────────────────  ───────────────  ─────────────── │
//! │  get_all_items    Vec<Item>           vec![]           DbError         │
//! │  get_by_id        Some(Item)          None             DbError         │
//! │  insert_item      Item (with id)      -                Constraint      │
//! │  delete_item      1                   0                DbError         │
//! │  update_item      1                   0                Constraint      │
//! │                                                                         │
//! │  "Not found" is a value, never an error.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store does no validation of its own: missing or empty fields go to
//! SQLite as they are and its constraints decide.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use super::ITEM_COLUMNS;
use crate::error::DbResult;
use shopping_core::{Item, ItemPatch, NewItem};

/// Service object for shopping-list items.
///
/// ## Usage
/// ```rust,ignore
/// let store = ItemStore::new(pool);
///
/// let item = store.insert_item(&NewItem::new("Fish tacos", "4.99", "Lunch")).await?;
/// let affected = store.update_item(item.id, &ItemPatch::new().checked(true)).await?;
/// assert_eq!(affected, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Creates a new ItemStore over an injected pool.
    pub fn new(pool: SqlitePool) -> Self {
        ItemStore { pool }
    }

    /// Returns every item, in insertion (id) order.
    ///
    /// An empty table yields an empty vec.
    pub async fn get_all_items(&self) -> DbResult<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM shopping_list ORDER BY product_id");

        let items = sqlx::query_as::<_, Item>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - No row with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM shopping_list WHERE product_id = ?1");

        let item = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        debug!(id, found = item.is_some(), "Fetched item");
        Ok(item)
    }

    /// Inserts a new item and returns the stored row.
    ///
    /// ## Column Handling
    /// ```text
    /// name, price, category  → always bound (None binds NULL → NOT NULL fails)
    /// date_added, checked    → only when present (else column default)
    /// ```
    ///
    /// ## Returns
    /// * `Ok(Item)` - Stored row including the store-assigned id
    /// * `Err(DbError::Constraint)` - e.g. `NOT NULL constraint failed: shopping_list.name`
    pub async fn insert_item(&self, new_item: &NewItem) -> DbResult<Item> {
        debug!(name = ?new_item.name, category = ?new_item.category, "Inserting item");

        let mut qb: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("INSERT INTO shopping_list (name, price, category");
        if new_item.date_added.is_some() {
            qb.push(", date_added");
        }
        if new_item.checked.is_some() {
            qb.push(", checked");
        }

        qb.push(") VALUES (");
        qb.push_bind(new_item.name.as_deref());
        qb.push(", ");
        qb.push_bind(new_item.price.as_deref());
        qb.push(", ");
        qb.push_bind(new_item.category.as_deref());
        if let Some(date_added) = new_item.date_added {
            qb.push(", ");
            qb.push_bind(date_added);
        }
        if let Some(checked) = new_item.checked {
            qb.push(", ");
            qb.push_bind(checked);
        }
        qb.push(") RETURNING ");
        qb.push(ITEM_COLUMNS);

        let item = qb.build_query_as::<Item>().fetch_one(&self.pool).await?;

        debug!(id = item.id, "Inserted item");
        Ok(item)
    }

    /// Deletes an item by id.
    ///
    /// ## Returns
    /// * `Ok(1)` - Row deleted
    /// * `Ok(0)` - No row with that id (not an error)
    pub async fn delete_item(&self, id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM shopping_list WHERE product_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, rows_affected = result.rows_affected(), "Deleted item");
        Ok(result.rows_affected())
    }

    /// Applies a partial update to one item.
    ///
    /// Only the fields present in `patch` appear in the `SET` clause, so
    /// every other column keeps its stored bytes. An empty patch writes
    /// nothing and reports whether the row exists.
    ///
    /// ## Returns
    /// * `Ok(1)` - Row updated
    /// * `Ok(0)` - No row with that id (not an error)
    /// * `Err(DbError::Constraint)` - e.g. an empty name
    pub async fn update_item(&self, id: i64, patch: &ItemPatch) -> DbResult<u64> {
        debug!(id, ?patch, "Updating item");

        if patch.is_empty() {
            let exists: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list WHERE product_id = ?1")
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?;
            return Ok(exists as u64);
        }

        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE shopping_list SET ");
        let mut set = qb.separated(", ");
        if let Some(name) = patch.name.as_deref() {
            set.push("name = ").push_bind_unseparated(name);
        }
        if let Some(price) = patch.price.as_deref() {
            set.push("price = ").push_bind_unseparated(price);
        }
        if let Some(date_added) = patch.date_added {
            set.push("date_added = ").push_bind_unseparated(date_added);
        }
        if let Some(checked) = patch.checked {
            set.push("checked = ").push_bind_unseparated(checked);
        }
        if let Some(category) = patch.category.as_deref() {
            set.push("category = ").push_bind_unseparated(category);
        }
        qb.push(" WHERE product_id = ");
        qb.push_bind(id);

        let result = qb.build().execute(&self.pool).await?;

        debug!(id, rows_affected = result.rows_affected(), "Updated item");
        Ok(result.rows_affected())
    }

    /// Counts all items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
