//! # shopping-core: Pure Domain Types for the Shopping List
//!
//! This crate holds the entity types and the price arithmetic used by the
//! data-access layer. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shopping List Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Callers (tests, seed, shopping-drills)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shopping-db (ItemStore, reports)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ uses                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopping-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │   error   │                  │   │
//! │  │   │   Item    │  │   Money   │  │ CoreError │                  │   │
//! │  │   │ ItemPatch │  │  parsing  │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Item, NewItem, ItemPatch, CategoryTotal)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopping_core::money::Money;
//!
//! // Prices are stored as decimal strings and summed as integer cents
//! let a = Money::parse("1.25").unwrap();
//! let b = Money::parse("2.25").unwrap();
//!
//! assert_eq!((a + b).to_string(), "3.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::CoreError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the table every repository reads and writes.
pub const SHOPPING_LIST_TABLE: &str = "shopping_list";

/// Number of items per page for list pagination.
pub const ITEMS_PER_PAGE: u32 = 6;
