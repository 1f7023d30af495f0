//! Handloom Admin - Dashboard page features.
//!
//! - [`catalog`] - Artisan product editor with locally persisted overrides
//! - [`banner`] - Marketing homepage banner selection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod banner;
pub mod catalog;

pub use banner::{BANNER_STORAGE_KEY, Banner, BannerDisplay, BannerSelector, FALLBACK_BANNER_LABEL};
pub use catalog::{
    CATALOG_STORAGE_KEY, Catalog, CatalogEditor, CatalogEntry, DEFAULT_STOCK, EditorDraft,
    EditorPanel, EditorSubmission, GridCard, ProductGrid,
};
