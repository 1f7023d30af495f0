//! Marketing dashboard banner selector.

use handloom_admin::{Banner, BannerSelector};

use super::{CommandResult, Page, not_mounted};
use crate::storage::JsonFileStorage;
use crate::terminal::TerminalBanner;

type Selector = BannerSelector<JsonFileStorage, TerminalBanner>;

fn mount(page: &Page) -> Result<Selector, Box<dyn std::error::Error>> {
    BannerSelector::mount(page.storage.clone(), TerminalBanner::default())
        .ok_or_else(|| not_mounted("banner selector"))
}

fn page_lines(selector: &Selector) -> Vec<String> {
    let mut lines = selector.display().lines();
    lines.extend(Banner::ALL.iter().map(|banner| {
        let marker = if selector.selected() == Some(banner.id()) { '*' } else { ' ' };
        format!("{marker} {:<12} {}", banner.id(), banner.label())
    }));
    lines
}

/// Show the current banner and the available ones.
pub fn show(page: &Page) -> CommandResult {
    Ok(page_lines(&mount(page)?))
}

/// "Use banner" on the banner `id`.
pub fn use_banner(page: &Page, id: &str) -> CommandResult {
    let mut selector = mount(page)?;
    selector.select(id)?;
    Ok(page_lines(&selector))
}
