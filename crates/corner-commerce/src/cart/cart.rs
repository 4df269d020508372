//! The shopping cart.

use crate::cart::line_item::{clamp_quantity, LineItem, MAX_QUANTITY};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An ordered collection of line items, keyed by product name.
///
/// Lines keep insertion order. Adding a product whose name is already in
/// the cart merges into the existing line instead of appending a second
/// one, so the cart holds at most one line per distinct name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from an untrusted sequence of lines.
    ///
    /// Used when loading a persisted snapshot: duplicate names merge into
    /// the first occurrence (quantities summed and capped), quantities are
    /// clamped into range, and negative prices are floored at zero.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item.name, item.image, item.unit_price, item.quantity);
        }
        cart
    }

    /// Add `quantity` units of a product.
    ///
    /// The per-call quantity is clamped into [1, 999] first. If a line
    /// with the same name exists, its quantity is bumped (capped at 999)
    /// and its price and image are left as they were; otherwise a new
    /// line is appended.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        image: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) {
        let name = name.into();
        let quantity = clamp_quantity(quantity);

        if let Some(existing) = self.items.iter_mut().find(|i| i.name == name) {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(MAX_QUANTITY);
            return;
        }

        self.items.push(LineItem::new(name, image, unit_price, quantity));
    }

    /// Apply a quantity delta to the line at `index`.
    ///
    /// The result is clamped into [1, 999]; a delta can never remove a
    /// line (removal goes through [`Cart::remove`]). Returns false on an
    /// out-of-range index, which is a no-op.
    pub fn set_quantity(&mut self, index: usize, delta: i64) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.quantity = clamp_quantity(item.quantity.saturating_add(delta));
                true
            }
            None => false,
        }
    }

    /// Remove the line at `index`. No-op if out of range.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line at `index`.
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Find a line by product name.
    pub fn find(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beans(price: i64) -> Money {
        Money::from_cents(price)
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 1);
        cart.add("German Coffee Beans", "p3.png", beans(2000), 1);

        assert_eq!(cart.items[0].name, "Arabian Coffee Beans");
        assert_eq!(cart.items[1].name, "German Coffee Beans");
    }

    #[test]
    fn test_add_merges_by_name() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 2);
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 3);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_add_sequence_sums_clamped_quantities() {
        // Each call clamps into [1, 999] before merging.
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 0);
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), -10);
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 4);

        assert_eq!(cart.items[0].quantity, 1 + 1 + 4);
    }

    #[test]
    fn test_merge_caps_at_max_quantity() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 900);
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 900);

        assert_eq!(cart.items[0].quantity, 999);
    }

    #[test]
    fn test_merge_keeps_first_price_and_image() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 1);
        cart.add("Arabian Coffee Beans", "other.png", beans(9999), 1);

        assert_eq!(cart.items[0].unit_price, beans(1500));
        assert_eq!(cart.items[0].image, "p1.png");
    }

    #[test]
    fn test_set_quantity_floors_at_one() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 3);

        assert!(cart.set_quantity(0, -100));
        assert_eq!(cart.items[0].quantity, 1);

        assert!(cart.set_quantity(0, i64::MIN));
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 3);

        assert!(!cart.set_quantity(5, 1));
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 1);

        assert!(cart.remove(7).is_none());
        assert_eq!(cart.unique_item_count(), 1);

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.name, "Arabian Coffee Beans");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("Arabian Coffee Beans", "p1.png", beans(1500), 2);
        cart.add("German Coffee Beans", "p3.png", beans(2000), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_from_items_normalizes_duplicates() {
        let items = vec![
            LineItem::new("Arabian Coffee Beans", "p1.png", beans(1500), 2),
            LineItem::new("German Coffee Beans", "p3.png", beans(2000), 1),
            LineItem::new("Arabian Coffee Beans", "p1.png", beans(1500), 3),
        ];

        let cart = Cart::from_items(items);
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.find("Arabian Coffee Beans").unwrap().quantity, 5);
    }
}
