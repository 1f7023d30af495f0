//! Login form.

use handloom_storefront::submit_login;

use super::CommandResult;
use crate::terminal::TerminalNavigator;

/// Submit the login form with `role` selected.
#[allow(clippy::unnecessary_wraps)]
pub fn submit(role: &str) -> CommandResult {
    let mut navigator = TerminalNavigator::default();
    let destination = submit_login(role, &mut navigator);

    let location = navigator.location().unwrap_or(destination.path());
    Ok(vec![format!("Redirecting to {location}")])
}
