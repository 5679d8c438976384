//! # Error Types
//!
//! Domain-specific error types for shopping-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopping-core errors (this file)                                      │
//! │  └── CoreError        - Price parsing and arithmetic failures          │
//! │                                                                         │
//! │  shopping-db errors (separate crate)                                   │
//! │  ├── DbError          - Store-originated failures                      │
//! │  └── ConfigError      - Environment configuration failures             │
//! │                                                                         │
//! │  Flow: CoreError → DbError::Decode → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field constraints (non-empty name, required category) are NOT checked
//! here. The store owns them and reports violations through `DbError`.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A price string is not a plain decimal number.
    ///
    /// ## When This Occurs
    /// - Empty string
    /// - Non-digit characters (`"1.2a"`, `"$3"`)
    /// - More than one decimal point
    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    /// A price has more fractional digits than cents can represent.
    #[error("Price '{value}' has more than {max} decimal places")]
    TooPrecise { value: String, max: usize },

    /// Arithmetic left the i64 cent range.
    #[error("Price overflow in '{0}'")]
    Overflow(String),
}

impl CoreError {
    /// Creates an InvalidPrice error.
    pub fn invalid_price(value: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidPrice {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
