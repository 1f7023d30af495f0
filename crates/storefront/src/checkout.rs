//! Cash-on-delivery checkout page.
//!
//! The checkout reads the stored cart directly and never mutates it through
//! [`CartManager`](crate::CartManager). Confirming the order is simulated
//! locally: the cart slot is cleared and a success message replaces the
//! form. Nothing is transmitted.

use handloom_core::view::can_mount;
use handloom_core::{KeyValueStorage, Mountable, Price, RecordStore, StoreError};

use crate::cart::{CART_STORAGE_KEY, Cart, CartView};

/// The checkout page's elements.
pub trait CheckoutView: Mountable {
    /// Show the empty-cart message and hide the summary.
    fn show_empty(&mut self);

    /// Render the rows (no remove triggers) and the total, and show the
    /// summary.
    fn show_items(&mut self, summary: &CartView);

    /// Hide the cash-on-delivery form.
    fn hide_form(&mut self);

    /// Reveal the order-placed message.
    fn show_success(&mut self);
}

/// Where the checkout page is in its one-way flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Nothing in the cart; the form is still wired.
    Empty,
    /// Summary shown, waiting for the buyer to confirm.
    Pending,
    /// Order placed. Terminal.
    Confirmed,
}

/// One-shot reader of the stored cart for the checkout page.
#[derive(Debug)]
pub struct CheckoutReader<S, V> {
    store: RecordStore<S>,
    view: V,
    summary: CartView,
    total: Price,
    state: CheckoutState,
}

impl<S: KeyValueStorage, V: CheckoutView> CheckoutReader<S, V> {
    /// Mount the checkout on a page and render the summary.
    ///
    /// Returns `None` when any checkout element is missing.
    pub fn mount(storage: S, mut view: V) -> Option<Self> {
        if !can_mount("checkout", &view) {
            return None;
        }

        let store = RecordStore::new(storage);
        let cart: Cart = store.load_or_default(CART_STORAGE_KEY);
        let summary = CartView::from(&cart);

        let state = if cart.is_empty() {
            view.show_empty();
            CheckoutState::Empty
        } else {
            view.show_items(&summary);
            CheckoutState::Pending
        };

        Some(Self {
            store,
            view,
            summary,
            total: cart.total_price(),
            state,
        })
    }

    /// Submit the cash-on-delivery form.
    ///
    /// Clears the stored cart, hides the form and shows the success
    /// message. Once confirmed, further submissions do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart slot cannot be cleared; the form
    /// stays visible so the buyer can retry.
    pub fn confirm(&mut self) -> Result<(), StoreError> {
        if self.state == CheckoutState::Confirmed {
            tracing::debug!("checkout already confirmed");
            return Ok(());
        }

        self.store.clear(CART_STORAGE_KEY)?;
        self.view.hide_form();
        self.view.show_success();
        self.state = CheckoutState::Confirmed;

        tracing::info!(
            lines = self.summary.items.len(),
            total = %self.total,
            "cash-on-delivery order placed"
        );
        Ok(())
    }

    /// Current checkout state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// The summary rendered at mount.
    #[must_use]
    pub const fn summary(&self) -> &CartView {
        &self.summary
    }

    /// Order total, computed the same way as the cart's total.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Returns the checkout view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }
}
