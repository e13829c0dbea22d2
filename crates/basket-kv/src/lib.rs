//! # basket-kv: Durable Key-Value Storage for Basket
//!
//! The persistence layer. Everything above this crate talks about carts;
//! everything in this crate talks about string keys and opaque string values.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    basket-store (CartStore)                             │
//! │         serializes the cart, decides when to read/write                 │
//! └─────────────────────────────────┬───────────────────────────────────────┘
//!                                   │ KeyValueStore trait
//! ┌─────────────────────────────────▼───────────────────────────────────────┐
//! │                    basket-kv (THIS CRATE)                               │
//! │                                                                         │
//! │   ┌────────────────────┐        ┌────────────────────┐                 │
//! │   │      SqliteKv      │        │      MemoryKv      │                 │
//! │   │  ────────────────  │        │  ────────────────  │                 │
//! │   │  SqlitePool (WAL)  │        │  HashMap + Mutex   │                 │
//! │   │  kv table          │        │  failure injection │                 │
//! │   │  migrations        │        │  (tests)           │                 │
//! │   └────────────────────┘        └────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The [`KeyValueStore`] trait
//! - [`sqlite`] - SQLite-backed implementation and its configuration
//! - [`memory`] - In-memory implementation for tests
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Storage error types

pub mod error;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod store;

pub use error::{KvError, KvResult};
pub use memory::MemoryKv;
pub use sqlite::{KvConfig, SqliteKv};
pub use store::KeyValueStore;
