//! # Line Item Types
//!
//! The two item shapes that cross the cart boundary.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Types                                      │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      NewItem        │          │      LineItem       │              │
//! │  │  ─────────────────  │  add to  │  ─────────────────  │              │
//! │  │  id                 │  cart    │  id                 │              │
//! │  │  title              │ ───────► │  title              │              │
//! │  │  image_url          │          │  image_url          │              │
//! │  │  price (coerced)    │          │  price              │              │
//! │  │                     │          │  quantity (≥ 1)     │              │
//! │  └─────────────────────┘          └─────────────────────┘              │
//! │                                                                         │
//! │  NewItem is what the product catalog hands us; quantity is always      │
//! │  assigned by the cart itself, starting at 1.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Coercion
//! Catalog payloads are not consistent about the `price` field: some emit a
//! JSON number, others a numeric string (`"10.5"`). [`NewItem`] accepts both
//! at the deserialization boundary and always carries an `f64` afterwards.
//! Anything non-numeric is rejected during deserialization, so a `NewItem`
//! value never holds an unparsed price.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// LineItem
// =============================================================================

/// One product entry in the cart, carrying a quantity.
///
/// ## Identity
/// `id` is externally assigned (the product id) and unique within a cart.
/// All other fields are display data frozen at the time of adding.
///
/// ## Persisted Form
/// This struct is the unit of the persisted cart blob: the cart is stored as
/// a JSON array of `LineItem` objects, field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Unique identifier (externally assigned, e.g. product id).
    pub id: String,

    /// Display name shown in the cart.
    pub title: String,

    /// Product image shown in the cart.
    pub image_url: String,

    /// Unit price. Non-negative and finite.
    pub price: f64,

    /// Units of this product in the cart. Never below 1.
    pub quantity: u32,
}

impl LineItem {
    /// Creates the first unit of a product in the cart.
    ///
    /// All provided fields are preserved; quantity starts at 1.
    pub fn first_unit(item: NewItem) -> Self {
        LineItem {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: 1,
        }
    }

    /// Price of this line (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// =============================================================================
// NewItem
// =============================================================================

/// A candidate item: a [`LineItem`] minus quantity.
///
/// This is the shape the product catalog provides when the user adds a
/// product. The cart decides the quantity (1 for a new entry, +1 for an
/// existing one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewItem {
    /// Unique identifier (externally assigned, e.g. product id).
    pub id: String,

    /// Display name shown in the cart.
    pub title: String,

    /// Product image shown in the cart.
    pub image_url: String,

    /// Unit price. Accepts a JSON number or a numeric string.
    #[serde(deserialize_with = "coerce_price")]
    #[ts(type = "number | string")]
    pub price: f64,
}

// =============================================================================
// Price Coercion
// =============================================================================

/// Deserializes a price from a JSON number or a numeric string.
fn coerce_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct PriceVisitor;

    impl<'de> Visitor<'de> for PriceVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E>(self, value: f64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_i64<E>(self, value: i64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<f64, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}

// =============================================================================
// Unit Tests
// =============================================================================
