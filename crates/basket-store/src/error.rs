//! # Store Error Type
//!
//! Unified error type for cart store operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Basket                                 │
//! │                                                                         │
//! │  Consumer                     Store                                     │
//! │  ────────                     ─────                                     │
//! │                                                                         │
//! │  increment("missing")                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Unknown id? ──── CoreError::ItemNotFound ──► Cart(..) ─────────►│  │
//! │  │       │           (state untouched)                              │  │
//! │  │       ▼                                                          │  │
//! │  │  Write failed? ── KvError ──► Persistence(..) ──────────────────►│  │
//! │  │       │           (state already updated, NOT rolled back)       │  │
//! │  │       ▼                                                          │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed blob found during restore is NOT represented here: the store
//! recovers by starting empty and only logs a warning.

use thiserror::Error;

use basket_core::CoreError;
use basket_kv::KvError;

/// Errors surfaced by [`CartStore`](crate::CartStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart transition failed (unknown id, invalid candidate).
    ///
    /// The in-memory cart and the persisted state are both untouched.
    #[error(transparent)]
    Cart(#[from] CoreError),

    /// The new cart state could not be serialized for persistence.
    ///
    /// The in-memory mutation has already been applied and is kept.
    #[error("Failed to serialize cart state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage write failed.
    ///
    /// The in-memory mutation has already been applied and is kept; durable
    /// state catches up on the next successful persist.
    #[error("Failed to persist cart state: {0}")]
    Persistence(#[from] KvError),
}

impl StoreError {
    /// True when the operation failed because the id is not in the cart.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Cart(CoreError::ItemNotFound(_)))
    }

    /// True when the in-memory state was updated but not persisted.
    pub fn state_diverged(&self) -> bool {
        matches!(self, StoreError::Serialize(_) | StoreError::Persistence(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
