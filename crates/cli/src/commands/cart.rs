//! Buyer dashboard cart.

use handloom_core::ProductId;
use handloom_storefront::CartManager;

use super::{CommandResult, Page, not_mounted};
use crate::storage::JsonFileStorage;
use crate::terminal::TerminalCartPanel;

type Manager = CartManager<JsonFileStorage, TerminalCartPanel>;

fn mount(page: &Page) -> Result<Manager, Box<dyn std::error::Error>> {
    let panel = TerminalCartPanel::new(&page.grid);
    CartManager::mount(page.storage.clone(), panel).ok_or_else(|| not_mounted("cart"))
}

/// Show the cart as loaded from storage.
pub fn show(page: &Page) -> CommandResult {
    Ok(mount(page)?.panel().lines())
}

/// "Add to cart" on the card for `id`.
pub fn add(page: &Page, id: &str) -> CommandResult {
    let card = page.product(id)?.card();
    let mut manager = mount(page)?;
    manager.add_to_cart(&card)?;
    Ok(manager.panel().lines())
}

/// "Buy now" on the card for `id`.
pub fn buy_now(page: &Page, id: &str) -> CommandResult {
    let card = page.product(id)?.card();
    let mut manager = mount(page)?;
    manager.buy_now(&card)?;
    Ok(manager.panel().lines())
}

/// Remove button on the cart row for `id`.
pub fn remove(page: &Page, id: &str) -> CommandResult {
    let id = ProductId::parse(id)?;
    let mut manager = mount(page)?;
    manager.remove_line(&id)?;
    Ok(manager.panel().lines())
}
