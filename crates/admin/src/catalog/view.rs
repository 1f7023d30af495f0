//! Artisan dashboard elements the editor reads from and writes to.

use handloom_core::{Mountable, Price, ProductId, Stock};

/// What a product card in the artisan grid currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCard {
    pub title: String,
    /// Displayed price text (e.g., `"$45.00"`).
    pub price_text: String,
    pub image_src: String,
}

/// The artisan product grid.
pub trait ProductGrid: Mountable {
    /// IDs of the cards on the grid, in display order.
    fn card_ids(&self) -> Vec<ProductId>;

    /// Current display values of the card for `id`, if it is on the grid.
    fn card(&self, id: &ProductId) -> Option<GridCard>;

    /// Update a card in place. `title` of `None` keeps the current title.
    /// Returns false if the card is no longer on the grid.
    fn set_card(&mut self, id: &ProductId, title: Option<&str>, price_text: &str) -> bool;
}

/// Values the editor form is populated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDraft {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub stock: Stock,
    pub description: String,
    pub image_src: String,
}

/// Raw form values on submit, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSubmission {
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

impl From<&EditorDraft> for EditorSubmission {
    /// The form exactly as populated, as if submitted without edits.
    fn from(draft: &EditorDraft) -> Self {
        Self {
            id: draft.id.to_string(),
            name: draft.name.clone(),
            price: draft.price.amount().to_string(),
            stock: draft.stock.to_string(),
            description: draft.description.clone(),
        }
    }
}

/// The editor panel and its form.
pub trait EditorPanel: Mountable {
    /// Fill the form fields and preview image.
    fn populate(&mut self, draft: &EditorDraft);

    /// Reveal the editor and scroll it into view.
    fn show(&mut self);

    /// Hide the editor. Form contents are left as they are.
    fn hide(&mut self);
}
