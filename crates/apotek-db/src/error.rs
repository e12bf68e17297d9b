//! # Gateway Error Types
//!
//! Error types for remote store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  GatewayError (this module) ← adds context and categorization       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SessionError (apotek-session) ← one "remote operation failed"      │
//! │       │                          message                            │
//! │       ▼                                                             │
//! │  Destructive toast shown to the user                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Remote store operation errors.
///
/// These wrap sqlx errors and provide categorization for debugging; the
/// session layer collapses all of them into one failure toast.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Row not found in the store.
    ///
    /// ## When This Occurs
    /// - update/delete targets an id that does not exist
    /// - the row was deleted by another session since the last load
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate category name
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Store connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        GatewayError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        GatewayError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convert sqlx errors to GatewayError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → GatewayError::NotFound
/// sqlx::Error::Database       → analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → GatewayError::PoolExhausted
/// Other                       → GatewayError::Internal
/// ```
impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => GatewayError::NotFound {
                entity: "Row".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // UNIQUE: "UNIQUE constraint failed: <table>.<column>"
                // FK:     "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    GatewayError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    GatewayError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    GatewayError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => GatewayError::PoolExhausted,

            sqlx::Error::PoolClosed => {
                GatewayError::ConnectionFailed("Pool is closed".to_string())
            }

            _ => GatewayError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for GatewayError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        GatewayError::MigrationFailed(err.to_string())
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

// =============================================================================
// Unit Tests
// =============================================================================
