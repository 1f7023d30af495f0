//! Artisan catalog overrides.
//!
//! The catalog is sparse: only products an artisan has edited have an
//! entry, and every other product keeps the values its card already shows.
//! Entries are created or overwritten by saving the editor and are never
//! deleted.

mod editor;
mod view;

use std::collections::BTreeMap;

use handloom_core::{Price, ProductId, Stock};
use serde::{Deserialize, Serialize};

pub use editor::CatalogEditor;
pub use view::{EditorDraft, EditorPanel, EditorSubmission, GridCard, ProductGrid};

/// Storage key of the persisted catalog.
pub const CATALOG_STORAGE_KEY: &str = "handloomArtisanProducts";

/// Stock shown in the editor for a product without a saved entry.
pub const DEFAULT_STOCK: Stock = Stock::new(10);

/// Editable attributes of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: Price,
    pub stock: Stock,
    pub description: String,
}

/// Product ID to saved attributes, persisted as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<ProductId, CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Write the full entry for `id`, replacing any previous entry.
    /// Fields are never merged.
    pub fn upsert(&mut self, id: ProductId, entry: CatalogEntry) {
        self.entries.insert(id, entry);
    }

    /// Returns the saved entry for `id`.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Iterate over saved entries in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &CatalogEntry)> {
        self.entries.iter()
    }

    /// Number of saved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
