//! Terminal renditions of the dashboard elements.
//!
//! Each view records what the page features write to it; `lines()` turns that
//! state into output once the command has finished.

use handloom_admin::{BannerDisplay, EditorDraft, EditorPanel, GridCard, ProductGrid};
use handloom_core::{Mountable, ProductId};
use handloom_storefront::{CartPanel, CartView, CheckoutView, Navigator};

use crate::grid::GridProduct;

fn cart_rows(view: &CartView) -> Vec<String> {
    let mut lines: Vec<String> = view
        .items
        .iter()
        .map(|item| {
            format!(
                "  {:<24} {:>4} {:>10}  [{}]",
                item.title, item.quantity_label, item.line_price, item.id
            )
        })
        .collect();
    lines.push(format!("  Total: {}", view.total));
    lines
}

/// Buyer dashboard cart panel and header badge.
#[derive(Debug, Default)]
pub struct TerminalCartPanel {
    has_cards: bool,
    badge: u64,
    contents: Option<CartView>,
    revealed: bool,
}

impl TerminalCartPanel {
    /// Panel for a page showing `grid`.
    #[must_use]
    pub fn new(grid: &[GridProduct]) -> Self {
        Self {
            has_cards: !grid.is_empty(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Cart ({})", self.badge)];
        match &self.contents {
            Some(view) => lines.extend(cart_rows(view)),
            None => lines.push("  Your cart is empty.".to_string()),
        }
        if self.revealed {
            lines.push("  Proceed to checkout: checkout.html".to_string());
        }
        lines
    }
}

impl Mountable for TerminalCartPanel {
    fn missing_elements(&self) -> Vec<&'static str> {
        if self.has_cards {
            Vec::new()
        } else {
            vec!["product cards"]
        }
    }
}

impl CartPanel for TerminalCartPanel {
    fn set_item_count(&mut self, count: u64) {
        self.badge = count;
    }

    fn show_empty(&mut self) {
        self.contents = None;
    }

    fn show_items(&mut self, cart: &CartView) {
        self.contents = Some(cart.clone());
    }

    fn reveal(&mut self) {
        self.revealed = true;
    }
}

/// Checkout page summary and cash-on-delivery form.
#[derive(Debug)]
pub struct TerminalCheckout {
    summary: Option<CartView>,
    form_visible: bool,
    success: bool,
}

impl Default for TerminalCheckout {
    fn default() -> Self {
        Self {
            summary: None,
            form_visible: true,
            success: false,
        }
    }
}

impl TerminalCheckout {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Order summary".to_string()];
        match &self.summary {
            Some(view) => lines.extend(cart_rows(view)),
            None => lines.push("  Your cart is empty.".to_string()),
        }
        if self.form_visible {
            lines.push("Payment: Cash on delivery (run `handloom checkout confirm`)".to_string());
        }
        if self.success {
            lines.push("Order placed! You will pay in cash on delivery.".to_string());
        }
        lines
    }
}

impl Mountable for TerminalCheckout {}

impl CheckoutView for TerminalCheckout {
    fn show_empty(&mut self) {
        self.summary = None;
    }

    fn show_items(&mut self, summary: &CartView) {
        self.summary = Some(summary.clone());
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn show_success(&mut self) {
        self.success = true;
    }
}

/// Artisan dashboard product grid, in display order.
#[derive(Debug, Default)]
pub struct TerminalGrid {
    cards: Vec<(ProductId, GridCard)>,
}

impl TerminalGrid {
    #[must_use]
    pub fn new(grid: &[GridProduct]) -> Self {
        let cards = grid
            .iter()
            .map(|product| {
                let card = GridCard {
                    title: product.name.clone(),
                    price_text: product.price_text(),
                    image_src: product.image.clone(),
                };
                (product.id.clone(), card)
            })
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.cards
            .iter()
            .map(|(id, card)| format!("{:<20} {:<24} {:>10}", id, card.title, card.price_text))
            .collect()
    }
}

impl Mountable for TerminalGrid {
    fn missing_elements(&self) -> Vec<&'static str> {
        if self.cards.is_empty() {
            vec!["product grid"]
        } else {
            Vec::new()
        }
    }
}

impl ProductGrid for TerminalGrid {
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
            title.clone_into(&mut card.title);
        }
        price_text.clone_into(&mut card.price_text);
        true
    }
}

/// Artisan dashboard editor panel.
#[derive(Debug, Default)]
pub struct TerminalEditor {
    draft: Option<EditorDraft>,
    visible: bool,
}

impl TerminalEditor {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let Some(draft) = self.draft.as_ref().filter(|_| self.visible) else {
            return Vec::new();
        };

        vec![
            format!("Editing {}", draft.id),
            format!("  Name:        {}", draft.name),
            format!("  Price:       {}", draft.price.amount()),
            format!("  Stock:       {}", draft.stock),
            format!("  Description: {}", draft.description),
            format!("  Image:       {}", draft.image_src),
        ]
    }
}

impl Mountable for TerminalEditor {}

impl EditorPanel for TerminalEditor {
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

/// Marketing dashboard "current banner" text.
#[derive(Debug, Default)]
pub struct TerminalBanner {
    text: Option<String>,
}

impl TerminalBanner {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.text
                .clone()
                .unwrap_or_else(|| "Homepage hero is using the default banner.".to_string()),
        ]
    }
}

impl Mountable for TerminalBanner {}

impl BannerDisplay for TerminalBanner {
    fn set_current_text(&mut self, text: &str) {
        self.text = Some(text.to_owned());
    }
}

/// Records the page the login form navigates to.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    location: Option<String>,
}

impl TerminalNavigator {
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_owned());
    }
}
