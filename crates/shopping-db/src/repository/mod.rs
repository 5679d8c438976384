//! # Repository Module
//!
//! Database repository implementations for the shopping list.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Caller                                                                │
//! │       │                                                                 │
//! │       │  db.items().update_item(1, &patch)                             │
//! │       ▼                                                                 │
//! │  ItemStore                                                             │
//! │  ├── get_all_items(&self)                                              │
//! │  ├── get_by_id(&self, id)            → Option<Item>                    │
//! │  ├── insert_item(&self, new_item)    → Item (with store id)            │
//! │  ├── delete_item(&self, id)          → rows affected (0 | 1)           │
//! │  └── update_item(&self, id, patch)   → rows affected (0 | 1)           │
//! │       │                                                                 │
//! │       │  One parameter-bound SQL statement per call                    │
//! │       ▼                                                                 │
//! │  SQLite shopping_list                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemStore`](item::ItemStore) - Item CRUD with merge-patch updates
//! - [`ShoppingListReports`](report::ShoppingListReports) - Search,
//!   pagination, age filter, category totals

pub mod item;
pub mod report;

/// Column list shared by every query that materializes an `Item`.
pub(crate) const ITEM_COLUMNS: &str = "product_id, name, price, date_added, checked, category";
