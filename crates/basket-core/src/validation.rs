//! # Validation Module
//!
//! Candidate item validation for Basket.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Type checks (quantity is an integer, ...)                         │
//! │  └── Price coercion (number or numeric string → f64)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields are non-empty                                     │
//! │  └── Price is finite and non-negative                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart invariants (cart.rs)                                    │
//! │  ├── id uniqueness                                                     │
//! │  └── quantity floor of 1                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::item::NewItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item id.
///
/// Ids are externally assigned, so the only rule is that one is present.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_item_id;
///
/// assert!(validate_item_id("sku-42").is_ok());
/// assert!(validate_item_id("  ").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }
    Ok(())
}

/// Validates a display title.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }
    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities are rejected)
/// - Must not be negative
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }
    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Candidate Validator
// =============================================================================

/// Validates a candidate item before it enters the cart.
pub fn validate_new_item(item: &NewItem) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_title(&item.title)?;
    validate_price(item.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
