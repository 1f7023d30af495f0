//! Buyer cart backed by local storage.
//!
//! The cart is an ordered list of line items keyed by product ID. Adding a
//! product that is already in the cart bumps its quantity instead of adding
//! a second line, so the list never holds two lines for one product.

mod manager;
mod view;

use std::num::NonZeroU32;

use handloom_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

pub use manager::CartManager;
pub use view::{CartItemView, CartPanel, CartView};

/// Storage key of the persisted cart.
pub const CART_STORAGE_KEY: &str = "handloomCart";

/// One product in the cart.
///
/// Name and price are captured when the product is first added and are not
/// refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub qty: NonZeroU32,
}

impl CartLineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.qty.get()
    }
}

/// Ordered cart contents, in first-added order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product, merging with an existing line.
    ///
    /// Returns the line's quantity after the add. Quantity has no upper
    /// bound other than saturating at `u32::MAX`.
    pub fn add_or_increment(&mut self, id: &ProductId, name: &str, price: Price) -> NonZeroU32 {
        if let Some(line) = self.items.iter_mut().find(|line| &line.id == id) {
            line.qty = line.qty.saturating_add(1);
            return line.qty;
        }

        self.items.push(CartLineItem {
            id: id.clone(),
            name: name.to_owned(),
            price,
            qty: NonZeroU32::MIN,
        });
        NonZeroU32::MIN
    }

    /// Remove the line for `id`. Returns whether a line was removed;
    /// removing a product that is not in the cart is not an error.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);
        self.items.len() != before
    }

    /// Sum of all line quantities, shown on the cart badge.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.qty.get())).sum()
    }

    /// Sum of `price * qty` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Returns the line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Line items in first-added order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Data attributes of a product card (`data-product-id`,
/// `data-product-name`, `data-product-price`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl ProductCard {
    /// Build a card from raw attribute values. A price that is not a number
    /// is coerced to zero.
    #[must_use]
    pub fn from_attributes(id: ProductId, name: &str, raw_price: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            price: Price::coerce(raw_price),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_or_increment(&id("shawl"), "Pashmina Shawl", Price::coerce("20"));
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&id("shawl")).unwrap().qty.get(), 5);
    }

    #[test]
    fn test_increment_keeps_first_added_order() {
        let mut cart = Cart::new();
        cart.add_or_increment(&id("a"), "A", Price::coerce("1"));
        cart.add_or_increment(&id("b"), "B", Price::coerce("2"));
        cart.add_or_increment(&id("a"), "A", Price::coerce("1"));

        let ids: Vec<&str> = cart.items().iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_name_and_price_captured_on_first_add() {
        let mut cart = Cart::new();
        cart.add_or_increment(&id("a"), "Old name", Price::coerce("10"));
        cart.add_or_increment(&id("a"), "New name", Price::coerce("99"));

        let line = cart.get(&id("a")).unwrap();
        assert_eq!(line.name, "Old name");
        assert_eq!(line.price, Price::coerce("10"));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_or_increment(&id("a"), "A", Price::coerce("20"));
        cart.add_or_increment(&id("a"), "A", Price::coerce("20"));
        cart.add_or_increment(&id("b"), "B", Price::coerce("4.25"));

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price().display(), "$44.25");
    }

    #[test]
    fn test_huge_prices_total_without_panicking() {
        let mut cart = Cart::new();
        let huge = Price::coerce("50000000000000000000000000000");
        cart.add_or_increment(&id("a"), "Heirloom Tapestry", huge);
        cart.add_or_increment(&id("a"), "Heirloom Tapestry", huge);
        cart.add_or_increment(&id("b"), "Loom", huge);

        assert_eq!(cart.get(&id("a")).unwrap().line_total(), Price::MAX * 2);
        assert_eq!(cart.total_price(), Price::MAX * 3);

        let reloaded: Cart = serde_json::from_str(&serde_json::to_string(&cart).unwrap()).unwrap();
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_increment(&id("a"), "A", Price::coerce("1"));
        let before = cart.clone();

        assert!(!cart.remove(&id("missing-id")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_existing() {
        let mut cart = Cart::new();
        cart.add_or_increment(&id("a"), "A", Price::coerce("1"));
        cart.add_or_increment(&id("b"), "B", Price::coerce("1"));
        assert!(cart.remove(&id("a")));
        assert!(cart.get(&id("a")).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = Cart::new();
        cart.add_or_increment(&id("a"), "Shawl", Price::coerce("20"));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "id": "a", "name": "Shawl", "price": 20.0, "qty": 1 }])
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected_on_load() {
        let raw = r#"[{"id":"a","name":"Shawl","price":20,"qty":0}]"#;
        assert!(serde_json::from_str::<Cart>(raw).is_err());
    }

    #[test]
    fn test_product_card_coerces_price() {
        let card = ProductCard::from_attributes(id("a"), "Shawl", "n/a");
        assert_eq!(card.price, Price::ZERO);
    }
}
