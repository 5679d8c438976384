//! # Domain Types
//!
//! Entity types for the shopping list.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     NewItem     │   │    ItemPatch    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  no id          │   │  no id          │       │
//! │  │  name           │   │  all Option     │   │  all Option     │       │
//! │  │  price (text)   │   │  (store checks) │   │  None = keep    │       │
//! │  │  date_added     │   └─────────────────┘   └─────────────────┘       │
//! │  │  checked        │                                                    │
//! │  │  category       │   ┌─────────────────┐                             │
//! │  └─────────────────┘   │  CategoryTotal  │                             │
//! │                        │  category       │                             │
//! │                        │  total (Money)  │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Serialized names follow the table columns (`product_id`, `date_added`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A stored shopping-list row.
///
/// `price` stays a decimal string so it round-trips byte-for-byte; use
/// [`Item::price_amount`] when arithmetic is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Store-assigned primary key. Never reused, never changed.
    #[serde(rename = "product_id")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_id"))]
    pub id: i64,

    pub name: String,

    /// Decimal price, e.g. `"1.25"`.
    pub price: String,

    pub date_added: DateTime<Utc>,

    pub checked: bool,

    pub category: String,
}

impl Item {
    /// Parses the stored price into integer cents.
    pub fn price_amount(&self) -> crate::error::CoreResult<Money> {
        Money::parse(&self.price)
    }
}

// =============================================================================
// NewItem
// =============================================================================

/// Insert input: an [`Item`] without its id.
///
/// Every field is optional so an omitted field reaches the store as-is and
/// the store's constraints decide. Omitted `date_added`/`checked` fall back to
/// the column defaults; omitted `name`/`price`/`category` are rejected by the
/// store's NOT NULL constraints.
///
/// ## Example
/// ```rust
/// use shopping_core::NewItem;
///
/// let item = NewItem::new("Fish tacos", "4.99", "Lunch").checked(true);
/// assert_eq!(item.name.as_deref(), Some("Fish tacos"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewItem {
    /// Creates an insert input with the three required fields set.
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        NewItem {
            name: Some(name.into()),
            price: Some(price.into()),
            category: Some(category.into()),
            ..NewItem::default()
        }
    }

    /// Sets the creation timestamp instead of using the store default.
    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// Sets the checked flag.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

/// Copies every non-id field of a stored item.
impl From<&Item> for NewItem {
    fn from(item: &Item) -> Self {
        NewItem {
            name: Some(item.name.clone()),
            price: Some(item.price.clone()),
            date_added: Some(item.date_added),
            checked: Some(item.checked),
            category: Some(item.category.clone()),
        }
    }
}

// =============================================================================
// ItemPatch
// =============================================================================

/// Partial update. `None` leaves the stored value untouched.
///
/// ## Merge-Patch Semantics
/// ```text
/// stored:  { name: "product 1", price: "1.25", checked: true, ... }
/// patch:   { name: Some("new name!") }
///      │
///      ▼
/// stored:  { name: "new name!", price: "1.25", checked: true, ... }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        ItemPatch::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.date_added.is_none()
            && self.checked.is_none()
            && self.category.is_none()
    }

    /// Applies the patch to an in-memory copy, the same way the store does.
    pub fn apply_to(&self, item: &Item) -> Item {
        Item {
            id: item.id,
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            price: self.price.clone().unwrap_or_else(|| item.price.clone()),
            date_added: self.date_added.unwrap_or(item.date_added),
            checked: self.checked.unwrap_or(item.checked),
            category: self.category.clone().unwrap_or_else(|| item.category.clone()),
        }
    }
}

/// A full replacement expressed as a patch (every field present).
impl From<&Item> for ItemPatch {
    fn from(item: &Item) -> Self {
        ItemPatch {
            name: Some(item.name.clone()),
            price: Some(item.price.clone()),
            date_added: Some(item.date_added),
            checked: Some(item.checked),
            category: Some(item.category.clone()),
        }
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Total cost of all items in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Item {
        Item {
            id: 1,
            name: "product 1".to_string(),
            price: "1.25".to_string(),
            date_added: Utc.with_ymd_and_hms(2029, 1, 22, 16, 28, 32).unwrap(),
            checked: true,
            category: "Snack".to_string(),
        }
    }

    #[test]
    fn test_item_serializes_with_column_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["product_id"], 1);
        assert_eq!(json["price"], "1.25");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let item = sample();
        let patched = ItemPatch::new().name("new name!").apply_to(&item);

        assert_eq!(patched.name, "new name!");
        assert_eq!(patched.price, item.price);
        assert_eq!(patched.date_added, item.date_added);
        assert_eq!(patched.checked, item.checked);
        assert_eq!(patched.category, item.category);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ItemPatch::new().is_empty());
        assert!(!ItemPatch::new().checked(false).is_empty());
        assert!(!ItemPatch::from(&sample()).is_empty());
    }

    #[test]
    fn test_new_item_omits_unset_fields_when_serialized() {
        let json = serde_json::to_value(NewItem::new("a", "1.00", "Main")).unwrap();
        assert!(json.get("date_added").is_none());
        assert!(json.get("checked").is_none());

        let parsed: NewItem = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("x"));
        assert!(parsed.category.is_none());
    }

    #[test]
    fn test_price_amount() {
        assert_eq!(sample().price_amount().unwrap().cents(), 125);
    }
}
