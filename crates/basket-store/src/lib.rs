//! # basket-store: The Cart State Container
//!
//! The crate the rest of the application talks to. It owns the cart,
//! restores it from durable storage when opened, funnels every mutation
//! through a single-writer path, and persists the full state after each one.
//!
//! ## Module Organization
//! ```text
//! basket_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: restore, mutate, persist, subscribe
//! └── error.rs        ◄─── StoreError: what consumers see
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Lifecycle                                  │
//! │                                                                         │
//! │  App startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore::open(kv).await ── reads "storageCart", installs the        │
//! │       │                       restored cart (or empty on first run)    │
//! │       ▼                                                                 │
//! │  add_to_cart / increment / decrement                                   │
//! │       │         (each: lock → mutate → publish → persist)              │
//! │       ▼                                                                 │
//! │  items() / subscribe() ── consumers render the latest snapshot         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because `open` completes the restore before the handle exists, consumers
//! can never observe the pre-restore empty state or mutate ahead of it.
//!
//! ## Example
//! ```rust
//! use basket_kv::MemoryKv;
//! use basket_store::{CartStore, NewItem};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), basket_store::StoreError> {
//! let store = CartStore::open(MemoryKv::new()).await;
//!
//! store
//!     .add_to_cart(NewItem {
//!         id: "sku-42".into(),
//!         title: "Trail Shoe".into(),
//!         image_url: "https://cdn.example.com/shoe.png".into(),
//!         price: 89.9,
//!     })
//!     .await?;
//! store.increment("sku-42").await?;
//!
//! assert_eq!(store.items()[0].quantity, 2);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{CartStore, CART_STORAGE_KEY};

// Re-export the types consumers need to talk to the store, so a frontend
// crate can depend on basket-store alone.
pub use basket_core::{Cart, CoreError, LineItem, NewItem, ValidationError};
pub use basket_kv::{KeyValueStore, KvConfig, KvError, MemoryKv, SqliteKv};
