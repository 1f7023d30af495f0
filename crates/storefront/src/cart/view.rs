//! Cart display data and the panel it is rendered into.

use handloom_core::{Mountable, ProductId};

use super::{Cart, CartLineItem};

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: String,
    pub quantity: u32,
    /// Quantity label as shown on the row (e.g., `"x2"`).
    pub quantity_label: String,
    /// Line total (e.g., `"$40.00"`).
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }

    /// Returns true when there are no rows to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: cart.total_price().display(),
            item_count: cart.total_quantity(),
        }
    }
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id.clone(),
            title: line.name.clone(),
            quantity: line.qty.get(),
            quantity_label: format!("x{}", line.qty),
            line_price: line.line_total().display(),
        }
    }
}

/// The cart panel on the buyer dashboard.
///
/// The panel's item list is fully replaced on every render; implementations
/// must not append to previous rows.
pub trait CartPanel: Mountable {
    /// Update the cart count badge.
    fn set_item_count(&mut self, count: u64);

    /// Show the empty indicator and hide the summary.
    fn show_empty(&mut self);

    /// Replace the rows (each with a remove trigger), set the total text,
    /// hide the empty indicator and show the summary.
    fn show_items(&mut self, cart: &CartView);

    /// Make the panel visible and scroll it into view.
    fn reveal(&mut self);
}
