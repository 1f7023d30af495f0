//! Integration tests for homepage banner selection.

#![allow(clippy::unwrap_used)]

use handloom_admin::{BANNER_STORAGE_KEY, Banner, BannerSelector, FALLBACK_BANNER_LABEL};
use handloom_core::{InMemoryStorage, KeyValueStorage};
use handloom_integration_tests::{FullStorage, RecordingBanner};

fn load_page(storage: &InMemoryStorage) -> BannerSelector<InMemoryStorage, RecordingBanner> {
    BannerSelector::mount(storage.clone(), RecordingBanner::default()).unwrap()
}

#[test]
fn test_selection_survives_reload() {
    let storage = InMemoryStorage::new();
    load_page(&storage).select(Banner::Sale.id()).unwrap();

    let selector = load_page(&storage);
    assert_eq!(selector.selected(), Some("sale"));
    assert_eq!(selector.current_label(), Some("Festival Sale"));
    assert!(selector.display().text.as_ref().unwrap().contains("Festival Sale"));
}

#[test]
fn test_stored_as_json_string() {
    let storage = InMemoryStorage::new();
    load_page(&storage).select("explore").unwrap();

    let raw = storage.get_item(BANNER_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(serde_json::from_str::<String>(&raw).unwrap(), "explore");
}

#[test]
fn test_unknown_selection_uses_fallback_label() {
    let storage = InMemoryStorage::new();
    let mut selector = load_page(&storage);

    selector.select("diwali-2025").unwrap();

    assert_eq!(selector.current_label(), Some(FALLBACK_BANNER_LABEL));
    assert!(storage.get_item(BANNER_STORAGE_KEY).unwrap().is_some());

    // On the next load the unknown ID is not shown.
    let reloaded = load_page(&storage);
    assert_eq!(reloaded.selected(), None);
    assert_eq!(reloaded.display().text, None);
}

#[test]
fn test_write_failure_keeps_previous_text() {
    let mut selector = BannerSelector::mount(FullStorage, RecordingBanner::default()).unwrap();

    assert!(selector.select("sale").is_err());
    assert_eq!(selector.selected(), None);
    assert_eq!(selector.display().text, None);
}

#[test]
fn test_bare_id_from_older_dashboard_restored() {
    let storage = InMemoryStorage::new();
    storage.set_item(BANNER_STORAGE_KEY, "explore").unwrap();

    let mut selector = load_page(&storage);
    assert_eq!(selector.current_label(), Some("Explore Now"));

    selector.select("sale").unwrap();
    assert_eq!(load_page(&storage).selected(), Some("sale"));
}
