//! # Shopping List Reports
//!
//! Read-only queries over `shopping_list`: name search, pagination,
//! age filtering, and per-category cost totals.
//!
//! Every user-supplied value is bound as a parameter; nothing is formatted
//! into SQL text.
//!
//! ## Category Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECT category, price FROM shopping_list ORDER BY category           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "1.25" ──► Money(125) ─┐                                              │
//! │  "2.25" ──► Money(225) ─┼──► Snack: Money(350) → "3.50"                │
//! │                         │                                               │
//! │  Summed in integer cents, never as REAL                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use super::ITEM_COLUMNS;
use crate::error::DbResult;
use shopping_core::{CategoryTotal, Item, Money, ITEMS_PER_PAGE};

/// Report queries over the shopping list.
#[derive(Debug, Clone)]
pub struct ShoppingListReports {
    pool: SqlitePool,
}

impl ShoppingListReports {
    pub fn new(pool: SqlitePool) -> Self {
        ShoppingListReports { pool }
    }

    /// Items whose name contains `term`, case-insensitively.
    ///
    /// SQLite's `LIKE` and `lower()` only fold ASCII, so matching happens
    /// here with Unicode lowercasing. `%` and `_` in `term` are plain
    /// characters.
    pub async fn search_by_name(&self, term: &str) -> DbResult<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM shopping_list ORDER BY product_id");

        let needle = term.to_lowercase();
        let items: Vec<Item> = sqlx::query_as::<_, Item>(&sql)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect();

        debug!(term, count = items.len(), "Searched items by name");
        Ok(items)
    }

    /// One page of [`ITEMS_PER_PAGE`] items. Pages start at 1; page 0 is
    /// treated as page 1.
    pub async fn paginate(&self, page: u32) -> DbResult<Vec<Item>> {
        let offset = i64::from(ITEMS_PER_PAGE) * (i64::from(page.max(1)) - 1);
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM shopping_list ORDER BY product_id LIMIT ?1 OFFSET ?2"
        );

        let items = sqlx::query_as::<_, Item>(&sql)
            .bind(i64::from(ITEMS_PER_PAGE))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        debug!(page, offset, count = items.len(), "Fetched page");
        Ok(items)
    }

    /// Items added more than `days` days ago.
    ///
    /// A cutoff past chrono's date range matches nothing for positive
    /// `days` and everything for negative `days`.
    pub async fn added_before(&self, days: i64) -> DbResult<Vec<Item>> {
        let cutoff = Duration::try_days(days).and_then(|age| Utc::now().checked_sub_signed(age));

        match cutoff {
            Some(cutoff) => self.added_before_cutoff(cutoff).await,
            None if days > 0 => {
                debug!(days, "Cutoff precedes the earliest date, nothing that old");
                Ok(Vec::new())
            }
            None => {
                let sql = format!("SELECT {ITEM_COLUMNS} FROM shopping_list ORDER BY product_id");
                let items = sqlx::query_as::<_, Item>(&sql).fetch_all(&self.pool).await?;
                debug!(days, count = items.len(), "Cutoff follows the latest date, every item");
                Ok(items)
            }
        }
    }

    /// Items whose `date_added` is strictly earlier than `cutoff`.
    ///
    /// Both sides go through `julianday()` so stored timestamps compare by
    /// instant regardless of their textual offset form (`Z` vs `+00:00`).
    pub async fn added_before_cutoff(&self, cutoff: DateTime<Utc>) -> DbResult<Vec<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM shopping_list \
             WHERE julianday(date_added) < julianday(?1) \
             ORDER BY product_id"
        );

        let items = sqlx::query_as::<_, Item>(&sql)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;

        debug!(%cutoff, count = items.len(), "Fetched items added before cutoff");
        Ok(items)
    }

    /// Total price per category, category ascending then total descending.
    ///
    /// ## Errors
    /// * `DbError::Decode` - a stored price is not a decimal with at most
    ///   two fractional digits, or a category total overflows
    pub async fn category_cost(&self) -> DbResult<Vec<CategoryTotal>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT category, price FROM shopping_list ORDER BY category")
                .fetch_all(&self.pool)
                .await?;

        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for (category, price) in rows {
            let total = totals.entry(category).or_default();
            *total = total.checked_add(Money::parse(&price)?)?;
        }

        let mut report: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        report.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| b.total.cmp(&a.total))
        });

        debug!(categories = report.len(), "Computed category totals");
        Ok(report)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
