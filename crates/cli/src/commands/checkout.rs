//! Checkout page.

use handloom_storefront::CheckoutReader;

use super::{CommandResult, Page, not_mounted};
use crate::storage::JsonFileStorage;
use crate::terminal::TerminalCheckout;

type Reader = CheckoutReader<JsonFileStorage, TerminalCheckout>;

fn mount(page: &Page) -> Result<Reader, Box<dyn std::error::Error>> {
    CheckoutReader::mount(page.storage.clone(), TerminalCheckout::default())
        .ok_or_else(|| not_mounted("checkout"))
}

/// Show the order summary.
pub fn show(page: &Page) -> CommandResult {
    Ok(mount(page)?.view().lines())
}

/// Submit the cash-on-delivery form.
pub fn confirm(page: &Page) -> CommandResult {
    let mut checkout = mount(page)?;
    checkout.confirm()?;
    Ok(checkout.view().lines())
}
