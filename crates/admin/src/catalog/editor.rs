//! Catalog editor for the artisan dashboard.

use handloom_core::view::can_mount;
use handloom_core::{KeyValueStorage, Price, ProductId, RecordStore, Stock, StoreError};
use tracing::instrument;

use super::{
    CATALOG_STORAGE_KEY, Catalog, CatalogEntry, DEFAULT_STOCK, EditorDraft, EditorPanel,
    EditorSubmission, ProductGrid,
};

/// Owns the saved catalog and overlays it on the artisan grid.
///
/// The grid is only consulted for defaults: a product with a saved entry is
/// always edited from that entry, never from what its card shows.
#[derive(Debug)]
pub struct CatalogEditor<S, G, E> {
    store: RecordStore<S>,
    grid: G,
    panel: E,
    catalog: Catalog,
}

impl<S, G, E> CatalogEditor<S, G, E>
where
    S: KeyValueStorage,
    G: ProductGrid,
    E: EditorPanel,
{
    /// Mount the editor: load saved entries and apply them to the cards on
    /// the grid, so edits survive a reload.
    ///
    /// Returns `None` when the grid or any editor element is missing.
    pub fn mount(storage: S, grid: G, panel: E) -> Option<Self> {
        if !can_mount("catalog grid", &grid) || !can_mount("catalog editor", &panel) {
            return None;
        }

        let store = RecordStore::new(storage);
        let catalog: Catalog = store.load_or_default(CATALOG_STORAGE_KEY);
        tracing::debug!(entries = catalog.len(), "catalog loaded");

        let mut editor = Self {
            store,
            grid,
            panel,
            catalog,
        };
        editor.apply_saved_entries();
        Some(editor)
    }

    /// Edit or view trigger on a card: resolve the current values, fill the
    /// form and reveal the editor.
    ///
    /// Returns `None` without touching the editor if the grid has no card
    /// for `id`.
    #[instrument(skip(self))]
    pub fn open_editor(&mut self, id: &ProductId) -> Option<EditorDraft> {
        let Some(card) = self.grid.card(id) else {
            tracing::debug!("no card on the grid");
            return None;
        };

        let saved = self.catalog.get(id);
        let draft = EditorDraft {
            id: id.clone(),
            name: saved
                .map(|entry| entry.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(&card.title)
                .to_owned(),
            price: saved.map_or_else(
                || Price::from_display_text(&card.price_text),
                |entry| entry.price,
            ),
            stock: saved.map_or(DEFAULT_STOCK, |entry| entry.stock),
            description: saved
                .map(|entry| entry.description.clone())
                .unwrap_or_default(),
            image_src: card.image_src,
        };

        self.panel.populate(&draft);
        self.panel.show();
        Some(draft)
    }

    /// Editor form submission.
    ///
    /// Name and description are trimmed, price and stock coerced (invalid
    /// input becomes zero), and the full entry replaces any saved one. The
    /// card is then updated in place and the editor hidden. A blank ID saves
    /// nothing and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the catalog cannot be persisted. The entry
    /// is kept in memory and the editor stays open.
    #[instrument(skip(self, submission), fields(product_id = %submission.id))]
    pub fn save(&mut self, submission: &EditorSubmission) -> Result<Option<CatalogEntry>, StoreError> {
        let Ok(id) = ProductId::parse(&submission.id) else {
            tracing::debug!("submission without product id ignored");
            return Ok(None);
        };

        let entry = CatalogEntry {
            name: submission.name.trim().to_owned(),
            price: Price::coerce(&submission.price),
            stock: Stock::coerce(&submission.stock),
            description: submission.description.trim().to_owned(),
        };

        self.catalog.upsert(id.clone(), entry.clone());
        self.store.save(CATALOG_STORAGE_KEY, &self.catalog)?;
        tracing::info!(price = %entry.price, stock = %entry.stock, "catalog entry saved");

        if !self.show_on_card(&id, &entry) {
            tracing::debug!("card gone before save, skipped view update");
        }
        self.panel.hide();
        Ok(Some(entry))
    }

    /// Cancel trigger: hide the editor without saving.
    pub fn cancel(&mut self) {
        self.panel.hide();
    }

    /// Saved entry for `id`, if any.
    #[must_use]
    pub fn entry(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.catalog.get(id)
    }

    /// All saved entries.
    #[must_use]
    pub const fn entries(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the product grid.
    #[must_use]
    pub const fn grid(&self) -> &G {
        &self.grid
    }

    /// Returns the editor panel.
    #[must_use]
    pub const fn panel(&self) -> &E {
        &self.panel
    }

    fn apply_saved_entries(&mut self) {
        for id in self.grid.card_ids() {
            if let Some(entry) = self.catalog.get(&id).cloned() {
                self.show_on_card(&id, &entry);
            }
        }
    }

    fn show_on_card(&mut self, id: &ProductId, entry: &CatalogEntry) -> bool {
        let title = Some(entry.name.as_str()).filter(|name| !name.is_empty());
        self.grid.set_card(id, title, &entry.price.display())
    }
}
