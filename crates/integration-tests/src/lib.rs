//! Integration tests for the Handloom marketplace.
//!
//! The page features are exercised end to end against shared in-memory
//! storage, the way several dashboards in one browser share local storage.
//! This crate provides recording views for them.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p handloom-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use handloom_admin::{BannerDisplay, EditorDraft, EditorPanel, GridCard, ProductGrid};
use handloom_core::{KeyValueStorage, Mountable, ProductId, StorageError};
use handloom_storefront::{CartPanel, CartView, CheckoutView};

/// Cart panel that keeps every render.
#[derive(Debug, Default)]
pub struct RecordingCartPanel {
    pub badge: u64,
    pub renders: Vec<Option<CartView>>,
    pub revealed: bool,
}

impl RecordingCartPanel {
    /// What the panel currently shows; `None` is the empty-cart message.
    #[must_use]
    pub fn current(&self) -> Option<&CartView> {
        self.renders.last().and_then(Option::as_ref)
    }
}

impl Mountable for RecordingCartPanel {}

impl CartPanel for RecordingCartPanel {
    fn set_item_count(&mut self, count: u64) {
        self.badge = count;
    }

    fn show_empty(&mut self) {
        self.renders.push(None);
    }

    fn show_items(&mut self, cart: &CartView) {
        self.renders.push(Some(cart.clone()));
    }

    fn reveal(&mut self) {
        self.revealed = true;
    }
}

/// Checkout page elements.
#[derive(Debug)]
pub struct RecordingCheckout {
    pub summary: Option<CartView>,
    pub empty_shown: bool,
    pub form_visible: bool,
    pub success_shown: bool,
}

impl Default for RecordingCheckout {
    fn default() -> Self {
        Self {
            summary: None,
            empty_shown: false,
            form_visible: true,
            success_shown: false,
        }
    }
}

impl Mountable for RecordingCheckout {}

impl CheckoutView for RecordingCheckout {
    fn show_empty(&mut self) {
        self.empty_shown = true;
    }

    fn show_items(&mut self, summary: &CartView) {
        self.summary = Some(summary.clone());
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn show_success(&mut self) {
        self.success_shown = true;
    }
}

/// Artisan grid backed by a list of cards.
#[derive(Debug, Default)]
pub struct FakeGrid {
    pub cards: Vec<(ProductId, GridCard)>,
}

impl FakeGrid {
    /// Grid with one card per `(id, title, price_text)`.
    ///
    /// # Panics
    ///
    /// Panics if an ID is blank.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn with_cards(cards: &[(&str, &str, &str)]) -> Self {
        let cards = cards
            .iter()
            .map(|(id, title, price_text)| {
                let card = GridCard {
                    title: (*title).to_string(),
                    price_text: (*price_text).to_string(),
                    image_src: format!("/images/{id}.jpg"),
                };
                (ProductId::parse(id).unwrap(), card)
            })
            .collect();
        Self { cards }
    }
}

impl Mountable for FakeGrid {}

impl ProductGrid for FakeGrid {
    fn card_ids(&self) -> Vec<ProductId> {
        self.cards.iter().map(|(id, _)| id.clone()).collect()
    }

    fn card(&self, id: &ProductId) -> Option<GridCard> {
        self.cards
            .iter()
            .find(|(card_id, _)| card_id == id)
            .map(|(_, card)| card.clone())
    }

    fn set_card(&mut self, id: &ProductId, title: Option<&str>, price_text: &str) -> bool {
        let Some((_, card)) = self.cards.iter_mut().find(|(card_id, _)| card_id == id) else {
            return false;
        };
        if let Some(title) = title {
            card.title = title.to_string();
        }
        card.price_text = price_text.to_string();
        true
    }
}

/// Editor panel.
#[derive(Debug, Default)]
pub struct FakeEditor {
    pub draft: Option<EditorDraft>,
    pub visible: bool,
}

impl Mountable for FakeEditor {}

impl EditorPanel for FakeEditor {
    fn populate(&mut self, draft: &EditorDraft) {
        self.draft = Some(draft.clone());
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Current-banner text.
#[derive(Debug, Default)]
pub struct RecordingBanner {
    pub text: Option<String>,
}

impl Mountable for RecordingBanner {}

impl BannerDisplay for RecordingBanner {
    fn set_current_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// Storage that reads nothing and refuses every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullStorage;

impl KeyValueStorage for FullStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}
