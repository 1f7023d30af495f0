//! Cart manager: owns the cart for the lifetime of a page.

use handloom_core::view::can_mount;
use handloom_core::{KeyValueStorage, Price, ProductId, RecordStore, StoreError};
use tracing::instrument;

use super::{CART_STORAGE_KEY, Cart, CartPanel, CartView, ProductCard};

/// Keeps the cart, its storage slot and its panel in step.
///
/// Every mutation is persisted before it returns. If the write fails the
/// in-memory cart keeps the change and the error is returned to the caller.
#[derive(Debug)]
pub struct CartManager<S, P> {
    store: RecordStore<S>,
    panel: P,
    cart: Cart,
}

impl<S: KeyValueStorage, P: CartPanel> CartManager<S, P> {
    /// Mount the cart on a page: load the stored cart (an empty cart if
    /// absent or malformed) and render it without revealing the panel.
    ///
    /// Returns `None` when the page has no product cards to wire up.
    pub fn mount(storage: S, panel: P) -> Option<Self> {
        if !can_mount("cart", &panel) {
            return None;
        }

        let store = RecordStore::new(storage);
        let cart: Cart = store.load_or_default(CART_STORAGE_KEY);
        tracing::debug!(lines = cart.len(), "cart loaded");

        let mut manager = Self { store, panel, cart };
        manager.render(false);
        Some(manager)
    }

    /// Add one unit of a product, or bump the quantity of its line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be persisted.
    #[instrument(skip(self, name, price))]
    pub fn add_or_increment(
        &mut self,
        id: &ProductId,
        name: &str,
        price: Price,
    ) -> Result<(), StoreError> {
        let qty = self.cart.add_or_increment(id, name, price);
        tracing::info!(qty = qty.get(), "added to cart");
        self.persist()
    }

    /// Remove a product's line. Removing a product that is not in the cart
    /// succeeds without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &ProductId) -> Result<(), StoreError> {
        if self.cart.remove(id) {
            tracing::info!("removed from cart");
        }
        self.persist()
    }

    /// "Add to cart" trigger on a product card.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be persisted; the panel is
    /// not re-rendered in that case.
    pub fn add_to_cart(&mut self, card: &ProductCard) -> Result<(), StoreError> {
        self.add_or_increment(&card.id, &card.name, card.price)?;
        self.render(true);
        Ok(())
    }

    /// "Buy now" trigger on a product card. Same effect as
    /// [`add_to_cart`](Self::add_to_cart): the buyer lands on the cart panel.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be persisted.
    pub fn buy_now(&mut self, card: &ProductCard) -> Result<(), StoreError> {
        self.add_to_cart(card)
    }

    /// Remove trigger on a rendered cart row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be persisted.
    pub fn remove_line(&mut self, id: &ProductId) -> Result<(), StoreError> {
        self.remove(id)?;
        self.render(false);
        Ok(())
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Sum of `price * qty` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// Regenerate the panel from the current cart.
    ///
    /// This is a full replace, so rendering twice without a mutation
    /// produces the same output. The badge is always updated; the panel is
    /// revealed only when requested and the cart is non-empty.
    pub fn render(&mut self, reveal: bool) {
        let view = CartView::from(&self.cart);

        if view.is_empty() {
            self.panel.show_empty();
        } else {
            self.panel.show_items(&view);
            if reveal {
                self.panel.reveal();
            }
        }

        self.panel.set_item_count(view.item_count);
    }

    /// Returns the current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the panel the cart renders into.
    #[must_use]
    pub const fn panel(&self) -> &P {
        &self.panel
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(CART_STORAGE_KEY, &self.cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use handloom_core::{InMemoryStorage, Mountable};

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingPanel {
        has_products: bool,
        badge: u64,
        rows: Vec<String>,
        total: Option<String>,
        empty_shown: bool,
        reveals: usize,
    }

    impl RecordingPanel {
        fn with_products() -> Self {
            Self {
                has_products: true,
                ..Self::default()
            }
        }
    }

    impl Mountable for RecordingPanel {
        fn missing_elements(&self) -> Vec<&'static str> {
            if self.has_products {
                Vec::new()
            } else {
                vec!["[data-product-id]"]
            }
        }
    }

    impl CartPanel for RecordingPanel {
        fn set_item_count(&mut self, count: u64) {
            self.badge = count;
        }

        fn show_empty(&mut self) {
            self.rows.clear();
            self.total = None;
            self.empty_shown = true;
        }

        fn show_items(&mut self, cart: &CartView) {
            self.rows = cart
                .items
                .iter()
                .map(|item| format!("{} {} {}", item.title, item.quantity_label, item.line_price))
                .collect();
            self.total = Some(cart.total.clone());
            self.empty_shown = false;
        }

        fn reveal(&mut self) {
            self.reveals += 1;
        }
    }

    fn card(id: &str, name: &str, price: &str) -> ProductCard {
        ProductCard::from_attributes(ProductId::parse(id).unwrap(), name, price)
    }

    fn mount(storage: &InMemoryStorage) -> CartManager<InMemoryStorage, RecordingPanel> {
        CartManager::mount(storage.clone(), RecordingPanel::with_products()).unwrap()
    }

    #[test]
    fn test_mount_without_products_is_inactive() {
        let manager = CartManager::mount(InMemoryStorage::new(), RecordingPanel::default());
        assert!(manager.is_none());
    }

    #[test]
    fn test_mount_renders_empty_cart() {
        let manager = mount(&InMemoryStorage::new());
        assert!(manager.panel().empty_shown);
        assert_eq!(manager.panel().badge, 0);
        assert_eq!(manager.panel().reveals, 0);
    }

    #[test]
    fn test_add_to_cart_persists_and_reveals() {
        let storage = InMemoryStorage::new();
        let mut manager = mount(&storage);

        manager.add_to_cart(&card("shawl", "Shawl", "20")).unwrap();
        manager.add_to_cart(&card("shawl", "Shawl", "20")).unwrap();

        assert_eq!(manager.panel().badge, 2);
        assert_eq!(manager.panel().rows, ["Shawl x2 $40.00"]);
        assert_eq!(manager.panel().total.as_deref(), Some("$40.00"));
        assert_eq!(manager.panel().reveals, 2);

        let stored = storage.get_item(CART_STORAGE_KEY).unwrap().unwrap();
        let reloaded: Cart = serde_json::from_str(&stored).unwrap();
        assert_eq!(&reloaded, manager.cart());
    }

    #[test]
    fn test_buy_now_behaves_like_add() {
        let mut manager = mount(&InMemoryStorage::new());
        manager.buy_now(&card("saree", "Saree", "45.5")).unwrap();
        assert_eq!(manager.total_quantity(), 1);
        assert_eq!(manager.total_price().display(), "$45.50");
        assert_eq!(manager.panel().reveals, 1);
    }

    #[test]
    fn test_remove_last_line_shows_empty() {
        let mut manager = mount(&InMemoryStorage::new());
        manager.add_to_cart(&card("a", "A", "1")).unwrap();
        manager.remove_line(&ProductId::parse("a").unwrap()).unwrap();

        assert!(manager.panel().empty_shown);
        assert_eq!(manager.panel().badge, 0);
        assert!(manager.cart().is_empty());
    }

    #[test]
    fn test_remove_missing_leaves_cart_unchanged() {
        let storage = InMemoryStorage::new();
        let mut manager = mount(&storage);
        manager.add_to_cart(&card("a", "A", "1")).unwrap();
        let before = manager.cart().clone();

        manager.remove(&ProductId::parse("missing-id").unwrap()).unwrap();
        assert_eq!(manager.cart(), &before);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut manager = mount(&InMemoryStorage::new());
        manager.add_to_cart(&card("a", "A", "3.10")).unwrap();
        manager.add_to_cart(&card("b", "B", "2")).unwrap();

        manager.render(false);
        let rows = manager.panel().rows.clone();
        let total = manager.panel().total.clone();

        manager.render(false);
        assert_eq!(manager.panel().rows, rows);
        assert_eq!(manager.panel().total, total);
    }

    #[test]
    fn test_mount_restores_stored_cart() {
        let storage = InMemoryStorage::new();
        {
            let mut manager = mount(&storage);
            manager.add_to_cart(&card("a", "A", "5")).unwrap();
            manager.add_to_cart(&card("b", "B", "7")).unwrap();
        }

        let manager = mount(&storage);
        assert_eq!(manager.total_quantity(), 2);
        assert_eq!(manager.panel().total.as_deref(), Some("$12.00"));
    }

    #[test]
    fn test_malformed_storage_yields_empty_cart() {
        let storage = InMemoryStorage::new();
        storage
            .set_item(CART_STORAGE_KEY, r#"{"id":"a","qty":1}"#)
            .unwrap();

        let manager = mount(&storage);
        assert!(manager.cart().is_empty());
        assert!(manager.panel().empty_shown);
    }
}
