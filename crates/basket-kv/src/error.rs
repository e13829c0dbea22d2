//! # Storage Error Types
//!
//! Error types for key-value storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KvError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (basket-store) ← What consumers see                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Key-value storage errors.
///
/// These errors wrap sqlx errors and provide additional context. The
/// in-memory implementation reuses the same variants so callers handle one
/// taxonomy regardless of backend.
#[derive(Debug, Error)]
pub enum KvError {
    /// Storage backend could not be opened.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A get or set could not be executed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to KvError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → KvError::QueryFailed
/// sqlx::Error::PoolTimedOut   → KvError::PoolExhausted
/// sqlx::Error::PoolClosed     → KvError::ConnectionFailed
/// Other                       → KvError::Internal
/// ```
impl From<sqlx::Error> for KvError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => KvError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => KvError::PoolExhausted,
            sqlx::Error::PoolClosed => KvError::ConnectionFailed("Pool is closed".to_string()),
            _ => KvError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for KvError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        KvError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type KvResult<T> = Result<T, KvError>;
