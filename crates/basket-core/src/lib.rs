//! # basket-core: Pure Cart Logic for Basket
//!
//! This crate is the **heart** of Basket. It contains the cart aggregate and
//! every transition it supports as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Client Application (consumer)                   │   │
//! │  │    Product list ──► Cart screen ──► Badge/total display         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads snapshots, invokes mutations     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    basket-store (CartStore)                     │   │
//! │  │    restore-on-start, persist-after-mutate, subscriptions        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   item    │  │   cart    │  │ validation│                  │   │
//! │  │   │ LineItem  │  │   Cart    │  │   rules   │                  │   │
//! │  │   │ NewItem   │  │ add/inc/  │  │  checks   │                  │   │
//! │  │   │           │  │   dec     │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - Line item types ([`LineItem`], [`NewItem`]) and price coercion
//! - [`cart`] - The [`Cart`] aggregate and its three transitions
//! - [`error`] - Domain error types
//! - [`validation`] - Candidate item validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Stable Order**: The cart is an ordered sequence; transitions never reorder it
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Cart, NewItem};
//!
//! let mut cart = Cart::new();
//! cart.add_or_increment(NewItem {
//!     id: "sku-42".into(),
//!     title: "Trail Shoe".into(),
//!     image_url: "https://cdn.example.com/shoe.png".into(),
//!     price: 89.9,
//! })?;
//!
//! // Adding the same id again bumps the quantity instead of duplicating
//! cart.add_or_increment(NewItem {
//!     id: "sku-42".into(),
//!     title: "Trail Shoe".into(),
//!     image_url: "https://cdn.example.com/shoe.png".into(),
//!     price: 89.9,
//! })?;
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.quantity_of("sku-42"), Some(2));
//! # Ok::<(), basket_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod item;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Cart` instead of
// `use basket_core::cart::Cart`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{LineItem, NewItem};
