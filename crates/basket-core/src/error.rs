//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Cart transition failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  basket-kv errors (separate crate)                                     │
//! │  └── KvError          - Storage operation failures                     │
//! │                                                                         │
//! │  basket-store errors (separate crate)                                  │
//! │  └── StoreError       - What consumers see                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Consumer             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart logic errors.
///
/// These errors represent failed cart transitions. Callers translate them
/// to user-facing feedback; the cart itself is left untouched when one is
/// returned.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line item in the cart carries this id.
    ///
    /// ## When This Occurs
    /// - `increment`/`decrement` called with an id that was never added
    /// - The referenced item belongs to a different cart instance
    #[error("Item not found in cart: {0}")]
    ItemNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a candidate item doesn't meet requirements.
/// Used for early validation before a transition runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// A numeric field is below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("sku-404".to_string());
        assert_eq!(err.to_string(), "Item not found in cart: sku-404");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotFinite {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
