//! # Cart Store
//!
//! Owns the cart, keeps durable storage in sync with it, and exposes the
//! read/mutate surface consumers use.
//!
//! ## Mutation Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Read-Modify-Persist Sequence                         │
//! │                                                                         │
//! │  add_to_cart / increment / decrement                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock cart (single writer) ◄── a second call issued back-to-back       │
//! │       │                        queues here until the first one has     │
//! │       ▼                        BOTH mutated and persisted              │
//! │  apply pure transition (basket-core)                                   │
//! │       │                                                                 │
//! │       ├── transition failed? release lock, return error, nothing       │
//! │       │   published, nothing persisted                                 │
//! │       ▼                                                                 │
//! │  publish snapshot to subscribers (optimistic: UI sees it now)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serialize entire state, write under "storageCart"                     │
//! │       │                                                                 │
//! │       ├── write failed? return error, in-memory state KEPT             │
//! │       ▼                                                                 │
//! │  release lock                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Holding the lock across the persistence write is what rules out the
//! lost-update hazard: no mutation can read a pre-mutation snapshot of a
//! neighbour that is still mid-persist.

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use basket_core::{Cart, LineItem, NewItem};
use basket_kv::KeyValueStore;

use crate::error::StoreResult;

/// Storage key the serialized cart lives under.
///
/// The payload is a JSON array of [`LineItem`] objects, the same shape on
/// the write and the read path.
pub const CART_STORAGE_KEY: &str = "storageCart";

// =============================================================================
// CartStore
// =============================================================================

/// The cart state container.
///
/// ## Thread Safety
/// The cart is wrapped in a `tokio::sync::Mutex` because:
/// 1. Only one mutation may run at a time
/// 2. The lock is held across the persistence write (an await point), which
///    a std mutex does not allow
///
/// ## Construction Guarantee
/// A `CartStore` value only exists after [`open`](CartStore::open) has
/// finished restoring persisted state, so there is no window in which
/// consumers could read or mutate a not-yet-restored cart.
#[derive(Debug)]
pub struct CartStore<K> {
    /// Storage backend. Only this store writes [`CART_STORAGE_KEY`].
    kv: K,

    /// Current cart. Locked for the whole read-modify-persist sequence.
    cart: Mutex<Cart>,

    /// Latest committed snapshot, broadcast to subscribers.
    snapshot_tx: watch::Sender<Vec<LineItem>>,
}

impl<K: KeyValueStore> CartStore<K> {
    /// Opens the store, restoring previously persisted state.
    ///
    /// ## Restore Policy
    /// - No value under the key: start empty (first run).
    /// - Unreadable storage or malformed payload: log a warning and start
    ///   empty. Restore problems are recovered here, never surfaced.
    ///
    /// ## Why Infallible
    /// Every restore failure has the same sensible recovery (an empty cart),
    /// so `open` hands back a working store instead of making each caller
    /// re-implement that fallback.
    pub async fn open(kv: K) -> Self {
        let cart = restore(&kv).await;
        let (snapshot_tx, _) = watch::channel(cart.items().to_vec());

        CartStore {
            kv,
            cart: Mutex::new(cart),
            snapshot_tx,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart, or bumps its quantity if already present.
    ///
    /// New products enter at the end of the sequence with quantity 1; known
    /// ids get +1 in place with every other field untouched. The entire new
    /// state is persisted afterwards.
    ///
    /// ## Errors
    /// - [`StoreError::Cart`](crate::StoreError::Cart) if the candidate is
    ///   invalid; nothing changed.
    /// - [`StoreError::Persistence`](crate::StoreError::Persistence) /
    ///   [`StoreError::Serialize`](crate::StoreError::Serialize) if the write
    ///   failed; the in-memory cart keeps the mutation.
    pub async fn add_to_cart(&self, item: NewItem) -> StoreResult<()> {
        debug!(id = %item.id, "add_to_cart");

        let mut cart = self.cart.lock().await;
        cart.add_or_increment(item)?;
        self.commit(&cart).await
    }

    /// Increases the referenced item's quantity by exactly 1 and persists.
    ///
    /// ## Errors
    /// [`StoreError::Cart`](crate::StoreError::Cart) with
    /// [`CoreError::ItemNotFound`](basket_core::CoreError::ItemNotFound) if
    /// the id is not in the cart; the cart is unchanged. Persistence errors
    /// as in [`add_to_cart`](CartStore::add_to_cart).
    pub async fn increment(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "increment");

        let mut cart = self.cart.lock().await;
        cart.increment(id)?;
        self.commit(&cart).await
    }

    /// Decreases the referenced item's quantity by 1, floored at 1, and
    /// persists.
    ///
    /// A quantity of 1 stays at 1; the item is never removed by this
    /// operation.
    ///
    /// ## Errors
    /// Same as [`increment`](CartStore::increment).
    pub async fn decrement(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "decrement");

        let mut cart = self.cart.lock().await;
        cart.decrement(id)?;
        self.commit(&cart).await
    }

    // -------------------------------------------------------------------------
    // Read Surface
    // -------------------------------------------------------------------------

    /// Returns the latest committed snapshot of the cart, in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribes to cart changes.
    ///
    /// The receiver observes one value per committed mutation (plus the
    /// snapshot current at subscription time). Consumers re-render from the
    /// received snapshot instead of re-reading the store.
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.snapshot_tx.subscribe()
    }

    /// Returns the quantity of the referenced item, if present.
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.snapshot_tx
            .borrow()
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.quantity)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.snapshot_tx.borrow().len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot_tx.borrow().is_empty()
    }

    /// Total number of units across all items.
    pub fn total_quantity(&self) -> u64 {
        self.snapshot_tx
            .borrow()
            .iter()
            .map(|i| u64::from(i.quantity))
            .sum()
    }

    /// Sum of every line total.
    pub fn total_price(&self) -> f64 {
        self.snapshot_tx.borrow().iter().map(LineItem::line_total).sum()
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// Publishes the new snapshot and writes the entire state to storage.
    ///
    /// The snapshot goes out before the write: the visible cart must keep the
    /// user's last action even when the write then fails, so durable state is
    /// allowed to lag until the next successful persist.
    ///
    /// Callers hold the cart lock for the full duration.
    async fn commit(&self, cart: &Cart) -> StoreResult<()> {
        self.snapshot_tx.send_replace(cart.items().to_vec());

        let payload = serde_json::to_string(cart.items())?;
        if let Err(err) = self.kv.set(CART_STORAGE_KEY, &payload).await {
            error!(error = %err, "Failed to persist cart state");
            return Err(err.into());
        }

        debug!(items = cart.len(), "Cart state persisted");
        Ok(())
    }
}

// =============================================================================
// Restore
// =============================================================================

/// Reads and deserializes the persisted cart, falling back to empty.
async fn restore<K: KeyValueStore>(kv: &K) -> Cart {
    let blob = match kv.get(CART_STORAGE_KEY).await {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("No persisted cart found, starting empty");
            return Cart::new();
        }
        Err(err) => {
            warn!(error = %err, "Could not read persisted cart, starting empty");
            return Cart::new();
        }
    };

    match serde_json::from_str::<Vec<LineItem>>(&blob) {
        Ok(items) => {
            info!(items = items.len(), "Cart state restored");
            Cart::from_items(items)
        }
        Err(err) => {
            warn!(error = %err, "Persisted cart is malformed, starting empty");
            Cart::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basket_kv::{KvConfig, MemoryKv, SqliteKv};
    use serde_json::json;

    fn new_item(id: &str) -> NewItem {
        NewItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.example.com/{}.png", id),
            price: 10.5,
        }
    }

    #[tokio::test]
    async fn test_open_on_empty_storage_starts_empty() {
        let store = CartStore::open(MemoryKv::new()).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_appends_with_quantity_one() {
        let store = CartStore::open(MemoryKv::new()).await;

        store.add_to_cart(new_item("a")).await.unwrap();
        store.add_to_cart(new_item("b")).await.unwrap();

        let items = store.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].id, "b");
        assert!(items.iter().all(|i| i.quantity == 1));
    }

    #[tokio::test]
    async fn test_full_user_scenario() {
        let store = CartStore::open(MemoryKv::new()).await;

        // Catalog payloads may carry the price as a numeric string
        let item: NewItem = serde_json::from_value(json!({
            "id": "a",
            "title": "Shoe",
            "image_url": "u",
            "price": "10.5",
        }))
        .unwrap();

        store.add_to_cart(item.clone()).await.unwrap();
        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 10.5);
        assert_eq!(items[0].quantity, 1);

        store.add_to_cart(item).await.unwrap();
        assert_eq!(store.quantity_of("a"), Some(2));

        store.increment("a").await.unwrap();
        assert_eq!(store.quantity_of("a"), Some(3));

        store.decrement("a").await.unwrap();
        store.decrement("a").await.unwrap();
        store.decrement("a").await.unwrap();
        // Floors at 1, never disappears
        assert_eq!(store.quantity_of("a"), Some(1));

        store.decrement("a").await.unwrap();
        assert_eq!(store.quantity_of("a"), Some(1));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_increment_missing_id_on_empty_cart() {
        let store = CartStore::open(MemoryKv::new()).await;

        let err = store.increment("missing-id").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_persists_nothing() {
        let kv = MemoryKv::new();
        let store = CartStore::open(kv.clone()).await;

        store.decrement("missing-id").await.unwrap_err();

        // No mutation was applied, so nothing was written either
        assert_eq!(kv.get(CART_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_persisted_payload_is_a_flat_item_array() {
        let kv = MemoryKv::new();
        let store = CartStore::open(kv.clone()).await;

        store.add_to_cart(new_item("a")).await.unwrap();

        let blob = kv.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();

        // A direct array of item objects, not an array wrapped in an array
        let items = value.as_array().expect("payload must be an array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "a");
        assert_eq!(items[0]["title"], "Product a");
        assert_eq!(items[0]["image_url"], "https://cdn.example.com/a.png");
        assert_eq!(items[0]["price"], 10.5);
        assert_eq!(items[0]["quantity"], 1);
    }

    #[tokio::test]
    async fn test_round_trip_through_storage() {
        let kv = MemoryKv::new();

        let store = CartStore::open(kv.clone()).await;
        store.add_to_cart(new_item("a")).await.unwrap();
        store.add_to_cart(new_item("b")).await.unwrap();
        store.increment("b").await.unwrap();
        let before = store.items();
        drop(store);

        let reopened = CartStore::open(kv).await;
        assert_eq!(reopened.items(), before);
    }

    #[tokio::test]
    async fn test_restore_from_malformed_blob_starts_empty() {
        let kv = MemoryKv::new();
        kv.set(CART_STORAGE_KEY, "definitely not json").await.unwrap();

        let store = CartStore::open(kv.clone()).await;

        assert!(store.is_empty());
        // The store still works after the fallback
        store.add_to_cart(new_item("a")).await.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_persistence_failure_keeps_in_memory_state() {
        let kv = MemoryKv::new();
        let store = CartStore::open(kv.clone()).await;
        store.add_to_cart(new_item("a")).await.unwrap();

        kv.fail_writes(true);
        let err = store.increment("a").await.unwrap_err();

        // Surfaced to the caller, but the visible cart keeps the user's action
        assert!(err.state_diverged());
        assert_eq!(store.quantity_of("a"), Some(2));

        // Durable state still holds the last successful persist
        let blob = kv.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let items: Vec<LineItem> = serde_json::from_str(&blob).unwrap();
        assert_eq!(items[0].quantity, 1);

        // The next successful mutation re-converges durable state
        kv.fail_writes(false);
        store.increment("a").await.unwrap();
        let blob = kv.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let items: Vec<LineItem> = serde_json::from_str(&blob).unwrap();
        assert_eq!(items[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_reads_without_mutation_are_stable() {
        let store = CartStore::open(MemoryKv::new()).await;
        store.add_to_cart(new_item("a")).await.unwrap();

        assert_eq!(store.items(), store.items());
        assert_eq!(store.total_quantity(), 1);
        assert_eq!(store.total_price(), 10.5);
    }

    #[tokio::test]
    async fn test_subscription_observes_committed_snapshots() {
        let store = CartStore::open(MemoryKv::new()).await;
        let mut rx = store.subscribe();

        // Initial value is the snapshot current at subscription time
        assert!(rx.borrow_and_update().is_empty());

        store.add_to_cart(new_item("a")).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.increment("a").await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_mutations_from_concurrent_tasks_all_land() {
        use std::sync::Arc;

        let kv = MemoryKv::new();
        let store = Arc::new(CartStore::open(kv.clone()).await);
        store.add_to_cart(new_item("a")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.increment("a").await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Every increment fully completed (mutate + persist) before the next
        assert_eq!(store.quantity_of("a"), Some(17));
        let blob = kv.get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let items: Vec<LineItem> = serde_json::from_str(&blob).unwrap();
        assert_eq!(items[0].quantity, 17);
    }

    #[tokio::test]
    async fn test_end_to_end_with_sqlite_backend() {
        let kv = SqliteKv::open(KvConfig::in_memory()).await.unwrap();

        let store = CartStore::open(kv.clone()).await;
        store.add_to_cart(new_item("a")).await.unwrap();
        store.increment("a").await.unwrap();
        drop(store);

        // Same pool, fresh store: state comes back from SQLite
        let reopened = CartStore::open(kv).await;
        assert_eq!(reopened.quantity_of("a"), Some(2));
        assert_eq!(reopened.items()[0].title, "Product a");
    }
}
