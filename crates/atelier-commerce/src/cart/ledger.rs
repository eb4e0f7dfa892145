//! The cart ledger: line items keyed by product, size and color.

use crate::cart::{CartSummary, LineItem};
use crate::catalog::Product;
use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Result of adding a variant to the cart.
///
/// Every addition asks the presentation layer to show the cart; the signal
/// travels back to the caller instead of being wired into the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartAddition {
    /// Line item that was created or incremented.
    pub line_item_id: LineItemId,
    /// Quantity of that line item after the addition.
    pub quantity: i64,
    /// Whether a new line was appended.
    pub new_line: bool,
}

impl CartAddition {
    /// Whether the cart view should open in response.
    pub fn opens_cart(&self) -> bool {
        true
    }
}

/// The shopping cart for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product variant.
    ///
    /// An existing line with the same composite key is incremented by one;
    /// otherwise a new line with quantity 1 is appended, snapshotting the
    /// product's name, price and image.
    pub fn add_to_cart(&mut self, product: &Product, size: &str, color: &str) -> CartAddition {
        let id = LineItemId::for_variant(&product.id, size, color);

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(line_item_id = %id, quantity = existing.quantity, "Incremented cart line");
            return CartAddition {
                line_item_id: id,
                quantity: existing.quantity,
                new_line: false,
            };
        }

        let item = LineItem::from_product(product, size, color);
        debug!(line_item_id = %id, product_id = %product.id, "Added cart line");
        self.items.push(item);
        CartAddition {
            line_item_id: id,
            quantity: 1,
            new_line: true,
        }
    }

    /// Set a line's quantity, clamped to at least 1.
    ///
    /// Returns `false` (and changes nothing) if the line does not exist.
    pub fn update_quantity(&mut self, line_item_id: &LineItemId, quantity: i64) -> bool {
        match self.items.iter_mut().find(|i| &i.id == line_item_id) {
            Some(item) => {
                item.set_quantity(quantity);
                debug!(line_item_id = %line_item_id, quantity = item.quantity, "Updated cart quantity");
                true
            }
            None => {
                trace!(line_item_id = %line_item_id, "Quantity update for unknown line ignored");
                false
            }
        }
    }

    /// Raise a line's quantity by one.
    pub fn increment(&mut self, line_item_id: &LineItemId) -> bool {
        match self.get_item(line_item_id) {
            Some(item) => {
                let next = item.quantity.saturating_add(1);
                self.update_quantity(line_item_id, next)
            }
            None => false,
        }
    }

    /// Lower a line's quantity by one, stopping at 1.
    pub fn decrement(&mut self, line_item_id: &LineItemId) -> bool {
        match self.get_item(line_item_id) {
            Some(item) => {
                let next = item.quantity - 1;
                self.update_quantity(line_item_id, next)
            }
            None => false,
        }
    }

    /// Remove a line from the cart.
    ///
    /// Returns `false` if the line was not present.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(line_item_id = %line_item_id, "Removed cart line");
        } else {
            trace!(line_item_id = %line_item_id, "Removal of unknown line ignored");
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by ID.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Per-line totals plus the cart total.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(price), "Test")
            .with_image(format!("https://img.example/{id}.jpg"))
            .with_colors(["red", "blue"])
            .with_sizes(["M", "L"])
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartLedger::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartLedger::new();
        let added = cart.add_to_cart(&product("p", 1000), "M", "red");

        assert!(added.new_line);
        assert!(added.opens_cart());
        assert_eq!(added.quantity, 1);
        assert_eq!(added.line_item_id.as_str(), "p-M-red");
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_same_variant_increases_quantity() {
        let mut cart = CartLedger::new();
        let p = product("p", 1000);
        cart.add_to_cart(&p, "M", "red");
        let second = cart.add_to_cart(&p, "M", "red");

        assert!(!second.new_line);
        assert!(second.opens_cart());
        assert_eq!(second.quantity, 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_different_size_is_new_line() {
        let mut cart = CartLedger::new();
        let p = product("p", 1000);
        cart.add_to_cart(&p, "M", "red");
        cart.add_to_cart(&p, "L", "red");

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.items()[0].size, "M");
        assert_eq!(cart.items()[1].size, "L");
    }

    #[test]
    fn test_snapshot_is_independent_of_product() {
        let mut cart = CartLedger::new();
        let mut p = product("p", 1000);
        let added = cart.add_to_cart(&p, "M", "red");

        p.name = "Renamed".to_string();
        p.price = Money::new(5);

        let item = cart.get_item(&added.line_item_id).unwrap();
        assert_eq!(item.name, "Product p");
        assert_eq!(item.price, Money::new(1000));
        assert_eq!(item.image, "https://img.example/p.jpg");
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartLedger::new();
        let id = cart.add_to_cart(&product("p", 1000), "M", "red").line_item_id;

        assert!(cart.update_quantity(&id, 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let mut cart = CartLedger::new();
        let id = cart.add_to_cart(&product("p", 1000), "M", "red").line_item_id;

        cart.update_quantity(&id, 0);
        assert_eq!(cart.get_item(&id).unwrap().quantity, 1);

        cart.update_quantity(&id, -7);
        assert_eq!(cart.get_item(&id).unwrap().quantity, 1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = CartLedger::new();
        cart.add_to_cart(&product("p", 1000), "M", "red");
        let before = cart.clone();

        assert!(!cart.update_quantity(&LineItemId::new("nope"), 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = CartLedger::new();
        let id = cart.add_to_cart(&product("p", 1000), "M", "red").line_item_id;

        assert!(cart.increment(&id));
        assert!(cart.increment(&id));
        assert_eq!(cart.get_item(&id).unwrap().quantity, 3);

        for _ in 0..5 {
            cart.decrement(&id);
        }
        assert_eq!(cart.get_item(&id).unwrap().quantity, 1);
        assert!(!cart.decrement(&LineItemId::new("nope")));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartLedger::new();
        let id = cart.add_to_cart(&product("p", 1000), "M", "red").line_item_id;

        assert!(cart.remove_item(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = CartLedger::new();
        cart.add_to_cart(&product("p", 1000), "M", "red");
        cart.add_to_cart(&product("q", 2000), "L", "blue");
        let before = cart.clone();

        assert!(!cart.remove_item(&LineItemId::new("p-XL-red")));
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_is_exact() {
        let mut cart = CartLedger::new();
        let tee = product("1", 1990);
        let jeans = product("2", 4990);
        cart.add_to_cart(&tee, "M", "red");
        cart.add_to_cart(&tee, "M", "red");
        cart.add_to_cart(&jeans, "L", "blue");

        assert_eq!(cart.total(), Money::new(8970));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_summary() {
        let mut cart = CartLedger::new();
        let tee = product("1", 1990);
        cart.add_to_cart(&tee, "M", "red");
        cart.add_to_cart(&tee, "M", "red");
        cart.add_to_cart(&product("2", 4990), "L", "blue");

        let summary = cart.summary();
        assert_eq!(summary.line_items.len(), 2);
        assert_eq!(summary.line_items[0].total, Money::new(3980));
        assert_eq!(summary.total, cart.total());
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartLedger::new();
        cart.add_to_cart(&product("p", 1000), "M", "red");
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.summary().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no sequence of quantity updates drops a line below 1.
            #[test]
            fn quantity_never_below_one(updates in proptest::collection::vec(-50_i64..50, 0..32)) {
                let mut cart = CartLedger::new();
                let id = cart.add_to_cart(&product("p", 100), "M", "red").line_item_id;

                for q in updates {
                    cart.update_quantity(&id, q);
                    let item = cart.get_item(&id).unwrap();
                    prop_assert!(item.quantity >= 1);
                    prop_assert_eq!(item.quantity, q.max(1));
                }
                prop_assert_eq!(cart.line_count(), 1);
            }

            /// Property: total equals the sum of price * quantity.
            #[test]
            fn total_matches_manual_sum(adds in proptest::collection::vec((0_usize..3, 0_usize..2, 0_usize..2), 1..40)) {
                let catalog = [product("a", 1990), product("b", 4990), product("c", 12990)];
                let sizes = ["M", "L"];
                let colors = ["red", "blue"];
                let mut cart = CartLedger::new();
                let mut expected = 0_i64;

                for (p, s, c) in adds {
                    cart.add_to_cart(&catalog[p], sizes[s], colors[c]);
                    expected += catalog[p].price.amount_minor;
                }

                prop_assert_eq!(cart.total(), Money::new(expected));
            }
        }
    }
}
