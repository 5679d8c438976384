//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorized, store message preserved          │
//! │       │                                                                 │
//! │       ├── Constraint    (not-null, check, unique, ...)  never retried  │
//! │       ├── Connectivity  (io, pool closed/timed out)     never retried  │
//! │       └── Query / Decode / Schema                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller                                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Not found" is never an error here: lookups return `Option`, deletes
//! and updates return a row count.

use std::fmt;

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use shopping_core::CoreError;

/// Which schema constraint the store reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    NotNull,
    Check,
    Unique,
    ForeignKey,
    TypeMismatch,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ConstraintKind::NotNull => "not-null",
            ConstraintKind::Check => "check",
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign-key",
            ConstraintKind::TypeMismatch => "type-mismatch",
        };
        f.write_str(tag)
    }
}

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The store rejected a write because of a schema constraint.
    ///
    /// ## When This Occurs
    /// - Inserting without `name`, `price` or `category` (NOT NULL)
    /// - Writing an empty `name`/`category` or a non-decimal `price` (CHECK)
    ///
    /// `message` is the store's own text, e.g.
    /// `NOT NULL constraint failed: shopping_list.name`.
    #[error("Constraint violation ({kind}): {message}")]
    Constraint {
        kind: ConstraintKind,
        message: String,
    },

    /// The store could not be reached or the connection was lost.
    ///
    /// ## When This Occurs
    /// - Database file can't be opened or created
    /// - Pool closed (after `Database::close`)
    /// - Pool acquire timed out
    #[error("Connectivity failure: {0}")]
    Connectivity(String),

    /// Any other store-reported failure.
    #[error("Query failed: {0}")]
    Query(String),

    /// A stored value did not fit the expected shape.
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Schema bootstrap failed.
    #[error("Schema bootstrap failed: {0}")]
    Schema(String),
}

impl DbError {
    /// Creates a Constraint error.
    pub fn constraint(kind: ConstraintKind, message: impl Into<String>) -> Self {
        DbError::Constraint {
            kind,
            message: message.into(),
        }
    }

    /// Returns the constraint kind if this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            DbError::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns what the violated constraint is about.
    ///
    /// For not-null and unique violations this is the column
    /// (`"name"` from `NOT NULL constraint failed: shopping_list.name`);
    /// for check violations it is the constraint name
    /// (`"category_not_empty"`).
    pub fn constraint_column(&self) -> Option<&str> {
        let DbError::Constraint { message, .. } = self else {
            return None;
        };

        let subject = message.rsplit_once(": ")?.1;
        // Multi-column unique failures list "t.a, t.b"; report the first
        let first = subject.split(", ").next()?;
        Some(first.rsplit_once('.').map_or(first, |(_, column)| column))
    }

    /// True for failures where the store was unreachable.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, DbError::Connectivity(_))
    }
}

/// Classifies a store message when the driver's error kind is generic.
///
/// SQLite phrases:
/// ```text
/// NOT NULL constraint failed: <table>.<column>
/// CHECK constraint failed: <constraint>
/// UNIQUE constraint failed: <table>.<column>
/// FOREIGN KEY constraint failed
/// datatype mismatch
/// ```
fn classify_message(msg: &str) -> Option<ConstraintKind> {
    if msg.contains("NOT NULL constraint failed") {
        Some(ConstraintKind::NotNull)
    } else if msg.contains("CHECK constraint failed") {
        Some(ConstraintKind::Check)
    } else if msg.contains("UNIQUE constraint failed") {
        Some(ConstraintKind::Unique)
    } else if msg.contains("FOREIGN KEY constraint failed") {
        Some(ConstraintKind::ForeignKey)
    } else if msg.contains("datatype mismatch") {
        Some(ConstraintKind::TypeMismatch)
    } else {
        None
    }
}

fn classify(db_err: &dyn DatabaseError) -> Option<ConstraintKind> {
    match db_err.kind() {
        ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
        ErrorKind::CheckViolation => Some(ConstraintKind::Check),
        ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
        ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
        _ => classify_message(db_err.message()),
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (constraint)     → DbError::Constraint
/// sqlx::Error::Database (other)          → DbError::Query
/// Io / Tls / PoolTimedOut / PoolClosed   → DbError::Connectivity
/// WorkerCrashed                          → DbError::Connectivity
/// ColumnDecode / Decode / ColumnNotFound → DbError::Decode
/// Other                                  → DbError::Query
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match classify(db_err.as_ref()) {
                    Some(kind) => DbError::Constraint { kind, message },
                    None => DbError::Query(message),
                }
            }

            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::WorkerCrashed => DbError::Connectivity(err.to_string()),

            sqlx::Error::PoolClosed => DbError::Connectivity("Pool is closed".to_string()),

            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_) => DbError::Decode(err.to_string()),

            _ => DbError::Query(err.to_string()),
        }
    }
}

impl From<CoreError> for DbError {
    fn from(err: CoreError) -> Self {
        DbError::Decode(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_message() {
        assert_eq!(
            classify_message("NOT NULL constraint failed: shopping_list.name"),
            Some(ConstraintKind::NotNull)
        );
        assert_eq!(
            classify_message("CHECK constraint failed: name_not_empty"),
            Some(ConstraintKind::Check)
        );
        assert_eq!(
            classify_message("UNIQUE constraint failed: shopping_list.product_id"),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(classify_message("datatype mismatch"), Some(ConstraintKind::TypeMismatch));
        assert_eq!(classify_message("no such table: shopping_list"), None);
    }

    #[test]
    fn test_constraint_column() {
        let err = DbError::constraint(
            ConstraintKind::NotNull,
            "NOT NULL constraint failed: shopping_list.category",
        );
        assert_eq!(err.constraint_column(), Some("category"));

        let err = DbError::constraint(
            ConstraintKind::Check,
            "CHECK constraint failed: name_not_empty",
        );
        assert_eq!(err.constraint_column(), Some("name_not_empty"));

        let err = DbError::constraint(ConstraintKind::ForeignKey, "FOREIGN KEY constraint failed");
        assert_eq!(err.constraint_column(), None);

        assert_eq!(DbError::Query("boom".into()).constraint_column(), None);
    }

    #[test]
    fn test_display_mentions_kind() {
        let err = DbError::constraint(
            ConstraintKind::NotNull,
            "NOT NULL constraint failed: shopping_list.name",
        );
        assert_eq!(
            err.to_string(),
            "Constraint violation (not-null): NOT NULL constraint failed: shopping_list.name"
        );
    }

    #[test]
    fn test_pool_errors_are_connectivity() {
        assert!(DbError::from(sqlx::Error::PoolClosed).is_connectivity());
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_connectivity());
        assert!(!DbError::from(sqlx::Error::RowNotFound).is_connectivity());
    }

    #[test]
    fn test_core_error_becomes_decode() {
        let err: DbError = CoreError::invalid_price("x", "no digits").into();
        assert!(matches!(err, DbError::Decode(_)));
    }
}
