//! Integration tests for the buyer dashboard cart.
//!
//! These tests drive `CartManager` across simulated page loads that share
//! one storage, and check what a fresh page load sees.

#![allow(clippy::unwrap_used)]

use handloom_core::{InMemoryStorage, KeyValueStorage, Price, ProductId, RecordStore};
use handloom_integration_tests::{FullStorage, RecordingCartPanel};
use handloom_storefront::{CART_STORAGE_KEY, Cart, CartManager, ProductCard};

fn card(id: &str, name: &str, price: &str) -> ProductCard {
    ProductCard::from_attributes(ProductId::parse(id).unwrap(), name, price)
}

fn load_page(storage: &InMemoryStorage) -> CartManager<InMemoryStorage, RecordingCartPanel> {
    CartManager::mount(storage.clone(), RecordingCartPanel::default()).unwrap()
}

// =============================================================================
// Quantity merging and totals
// =============================================================================

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);
    let shawl = card("ikat-shawl", "Ikat Cotton Shawl", "24");

    for _ in 0..5 {
        page.add_to_cart(&shawl).unwrap();
    }

    let cart = page.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(&shawl.id).unwrap().qty.get(), 5);
}

#[test]
fn test_totals_over_mixed_lines() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);

    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();
    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();
    page.add_to_cart(&card("b", "Saree", "129.99")).unwrap();
    page.add_to_cart(&card("c", "Stole", "not a price")).unwrap();

    assert_eq!(page.total_quantity(), 4);
    assert_eq!(page.total_price(), Price::coerce("169.99"));
    assert_eq!(page.panel().badge, 4);
    assert_eq!(page.panel().current().unwrap().total, "$169.99");
}

#[test]
fn test_first_price_wins_on_merge() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);

    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();
    page.add_to_cart(&card("a", "Shawl (sale)", "10")).unwrap();

    let line = page.cart().get(&ProductId::parse("a").unwrap()).unwrap();
    assert_eq!(line.name, "Shawl");
    assert_eq!(line.price, Price::coerce("20"));
    assert_eq!(page.total_price(), Price::coerce("40"));
}

#[test]
fn test_huge_price_survives_reload() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);
    let tapestry = card("tapestry", "Heirloom Tapestry", "50000000000000000000000000000");

    page.add_to_cart(&tapestry).unwrap();
    page.add_to_cart(&tapestry).unwrap();
    assert_eq!(page.total_price(), Price::MAX * 2);

    let reloaded = load_page(&storage);
    assert_eq!(reloaded.cart(), page.cart());
    assert_eq!(reloaded.panel().badge, 2);
    assert_eq!(
        reloaded.panel().current().unwrap().total,
        (Price::MAX * 2).display()
    );
}

// =============================================================================
// Persistence across page loads
// =============================================================================

#[test]
fn test_cart_survives_reload() {
    let storage = InMemoryStorage::new();

    let mut first = load_page(&storage);
    first.add_to_cart(&card("a", "Shawl", "20")).unwrap();
    first.buy_now(&card("b", "Saree", "50")).unwrap();

    let second = load_page(&storage);
    assert_eq!(second.cart(), first.cart());
    assert_eq!(second.panel().badge, 2);
    assert!(!second.panel().revealed);
}

#[test]
fn test_stored_shape_round_trips() {
    let storage = InMemoryStorage::new();
    storage
        .set_item(
            CART_STORAGE_KEY,
            r#"[{"id":"a","name":"Shawl","price":20,"qty":2}]"#,
        )
        .unwrap();

    let page = load_page(&storage);
    assert_eq!(page.total_quantity(), 2);
    assert_eq!(page.total_price(), Price::coerce("40"));

    let store = RecordStore::new(storage);
    let reloaded: Cart = store.load_or_default(CART_STORAGE_KEY);
    assert_eq!(&reloaded, page.cart());
}

#[test]
fn test_corrupt_cart_loads_empty() {
    for raw in [
        "not json",
        r#"{"id":"a"}"#,
        r#"[{"id":"a","name":"Shawl","price":20,"qty":0}]"#,
        r#"[{"id":"a","name":"Shawl","price":20,"qty":1},{"id":"b"}]"#,
    ] {
        let storage = InMemoryStorage::new();
        storage.set_item(CART_STORAGE_KEY, raw).unwrap();

        let page = load_page(&storage);
        assert!(page.cart().is_empty(), "expected empty cart for {raw}");
        assert_eq!(page.panel().current(), None);
        assert_eq!(page.panel().badge, 0);
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_is_idempotent() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);
    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();

    page.render(false);
    let first = page.panel().current().cloned();
    page.render(false);
    let second = page.panel().current().cloned();

    assert_eq!(first, second);
    assert_eq!(second.unwrap().items.len(), 1);
}

#[test]
fn test_empty_cart_is_never_revealed() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);

    page.render(true);
    assert!(!page.panel().revealed);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_remove_missing_is_noop() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);
    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();
    let before = page.cart().clone();

    page.remove_line(&ProductId::parse("missing-id").unwrap())
        .unwrap();

    assert_eq!(page.cart(), &before);
}

#[test]
fn test_remove_drops_whole_line() {
    let storage = InMemoryStorage::new();
    let mut page = load_page(&storage);
    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();
    page.add_to_cart(&card("a", "Shawl", "20")).unwrap();

    page.remove_line(&ProductId::parse("a").unwrap()).unwrap();

    assert!(load_page(&storage).cart().is_empty());
}

// =============================================================================
// Storage failures
// =============================================================================

#[test]
fn test_write_failure_is_reported() {
    let mut page = CartManager::mount(FullStorage, RecordingCartPanel::default()).unwrap();
    let result = page.add_to_cart(&card("a", "Shawl", "20"));

    assert!(result.is_err());
    // The in-memory cart keeps the change; the panel was not re-rendered.
    assert_eq!(page.total_quantity(), 1);
    assert_eq!(page.panel().badge, 0);
}
