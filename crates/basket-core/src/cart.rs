//! # Cart Aggregate
//!
//! The ordered collection of line items and its three transitions.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Transitions                                   │
//! │                                                                         │
//! │  Consumer Action           Transition              Effect               │
//! │  ───────────────           ──────────              ──────               │
//! │                                                                         │
//! │  Add product ────────────► add_or_increment ─────► append qty=1, or    │
//! │                                                    qty+1 if id known   │
//! │                                                                         │
//! │  Tap "+" ────────────────► increment ────────────► qty+1               │
//! │                                                                         │
//! │  Tap "−" ────────────────► decrement ────────────► qty−1, floored at 1 │
//! │                                                                         │
//! │  NOTE: decrement never removes an item. A single unit stays a single   │
//! │        unit; removal is not a cart transition.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two items share an id.
//! - Every quantity is at least 1.
//! - Order is insertion order and transitions never reorder items.

use crate::error::{CoreError, CoreResult};
use crate::item::{LineItem, NewItem};
use crate::validation;

// =============================================================================
// Cart
// =============================================================================

/// The cart: an ordered sequence of [`LineItem`], unique by id.
///
/// This type is purely in-memory. Restoring it from storage and writing it
/// back after each transition is the job of `basket-store`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    /// Items in insertion order.
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from previously persisted items.
    ///
    /// The items are taken as-is: callers hand us a sequence that this crate
    /// produced earlier, so uniqueness and the quantity floor already hold.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Cart { items }
    }

    /// Adds a product to the cart or bumps its quantity if already present.
    ///
    /// ## Behavior
    /// - Unknown id: the item is appended at the end with quantity 1, all
    ///   provided fields preserved.
    /// - Known id: that item's quantity increases by 1; every other field and
    ///   the item's position stay as they were.
    ///
    /// ## Errors
    /// [`CoreError::Validation`] if the candidate fails validation; the cart
    /// is unchanged in that case.
    pub fn add_or_increment(&mut self, item: NewItem) -> CoreResult<()> {
        validation::validate_new_item(&item)?;

        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(LineItem::first_unit(item)),
        }

        Ok(())
    }

    /// Increases the referenced item's quantity by exactly 1.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if no item carries this id; the cart is
    /// unchanged in that case.
    pub fn increment(&mut self, id: &str) -> CoreResult<()> {
        let item = self.find_mut(id)?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(())
    }

    /// Decreases the referenced item's quantity by 1, floored at 1.
    ///
    /// A quantity of 1 stays at 1: decrementing a single unit never removes
    /// the item nor drops the quantity to 0.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if no item carries this id; the cart is
    /// unchanged in that case.
    pub fn decrement(&mut self, id: &str) -> CoreResult<()> {
        let item = self.find_mut(id)?;
        if item.quantity > 1 {
            item.quantity -= 1;
        }
        Ok(())
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the quantity of the referenced item, if present.
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.items.iter().find(|i| i.id == id).map(|i| i.quantity)
    }

    /// Total number of units across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of every line total.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn find_mut(&mut self, id: &str) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(id: &str) -> NewItem {
        NewItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            image_url: format!("https://cdn.example.com/{}.png", id),
            price: 10.5,
        }
    }

    #[test]
    fn test_distinct_adds_create_one_entry_each() {
        let mut cart = Cart::new();

        cart.add_or_increment(new_item("a")).unwrap();
        cart.add_or_increment(new_item("b")).unwrap();
        cart.add_or_increment(new_item("c")).unwrap();

        assert_eq!(cart.len(), 3);
        assert!(cart.items().iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn test_same_id_add_bumps_quantity_instead_of_duplicating() {
        let mut cart = Cart::new();

        cart.add_or_increment(new_item("a")).unwrap();
        cart.add_or_increment(new_item("a")).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(2));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();

        cart.add_or_increment(new_item("a")).unwrap();
        cart.add_or_increment(new_item("b")).unwrap();
        // Re-adding "a" must bump it in place, not move it to the end
        cart.add_or_increment(new_item("a")).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_increment_touches_only_the_referenced_item() {
        let mut cart = Cart::new();
        cart.add_or_increment(new_item("a")).unwrap();
        cart.add_or_increment(new_item("b")).unwrap();

        cart.increment("a").unwrap();

        assert_eq!(cart.quantity_of("a"), Some(2));
        assert_eq!(cart.quantity_of("b"), Some(1));

        let other = &cart.items()[1];
        assert_eq!(other.title, "Product b");
        assert_eq!(other.price, 10.5);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add_or_increment(new_item("a")).unwrap();

        cart.decrement("a").unwrap();
        cart.decrement("a").unwrap();

        // Still present, still a single unit
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(1));
    }

    #[test]
    fn test_decrement_reduces_by_exactly_one() {
        let mut cart = Cart::new();
        cart.add_or_increment(new_item("a")).unwrap();
        cart.increment("a").unwrap();
        cart.increment("a").unwrap();

        cart.decrement("a").unwrap();

        assert_eq!(cart.quantity_of("a"), Some(2));
    }

    #[test]
    fn test_increment_unknown_id_fails_and_leaves_cart_unchanged() {
        let mut cart = Cart::new();

        let err = cart.increment("missing-id").unwrap_err();

        assert!(matches!(err, CoreError::ItemNotFound(id) if id == "missing-id"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_unknown_id_fails_and_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_or_increment(new_item("a")).unwrap();
        let before = cart.clone();

        let err = cart.decrement("missing-id").unwrap_err();

        assert!(matches!(err, CoreError::ItemNotFound(_)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_invalid_candidate_is_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();

        let mut bad = new_item("a");
        bad.price = -1.0;
        let err = cart.add_or_increment(bad).unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_or_increment(new_item("a")).unwrap();
        cart.add_or_increment(new_item("b")).unwrap();
        cart.increment("b").unwrap();

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price(), 31.5);
    }

    #[test]
    fn test_from_items_round_trip() {
        let mut cart = Cart::new();
        cart.add_or_increment(new_item("a")).unwrap();
        cart.add_or_increment(new_item("b")).unwrap();
        cart.increment("a").unwrap();

        let rebuilt = Cart::from_items(cart.items().to_vec());
        assert_eq!(rebuilt, cart);
    }
}
