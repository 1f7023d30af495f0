//! Marketing dashboard homepage banner selection.

use core::fmt;

use handloom_core::view::can_mount;
use handloom_core::{KeyValueStorage, Mountable, RecordStore, StoreError};
use serde::{Deserialize, Serialize};

/// Storage key of the selected banner ID.
pub const BANNER_STORAGE_KEY: &str = "handloomHomepageBanner";

/// Label shown when a selected banner ID is not in the table.
pub const FALLBACK_BANNER_LABEL: &str = "Handloom banner";

/// Homepage hero banners the marketing team can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Banner {
    Collection,
    Explore,
    Sale,
}

impl Banner {
    /// All banners in dashboard order.
    pub const ALL: [Self; 3] = [Self::Collection, Self::Explore, Self::Sale];

    /// Banner ID as used by the dashboard's `data-banner-id` attribute.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Explore => "explore",
            Self::Sale => "sale",
        }
    }

    /// Human-readable banner label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Collection => "New Collection Launch",
            Self::Explore => "Explore Now",
            Self::Sale => "Festival Sale",
        }
    }

    /// Look up a banner by ID.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|banner| banner.id() == id)
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The "current banner" text on the marketing dashboard.
pub trait BannerDisplay: Mountable {
    /// Replace the current-banner text.
    fn set_current_text(&mut self, text: &str);
}

/// Persists the chosen banner and keeps the dashboard text in step.
#[derive(Debug)]
pub struct BannerSelector<S, D> {
    store: RecordStore<S>,
    display: D,
    selected: Option<String>,
}

impl<S: KeyValueStorage, D: BannerDisplay> BannerSelector<S, D> {
    /// Mount the selector and re-apply a stored selection. A stored ID that
    /// names no known banner is ignored, as if nothing were selected.
    ///
    /// Returns `None` when the banner list or current-banner text is missing.
    pub fn mount(storage: S, display: D) -> Option<Self> {
        if !can_mount("banner selector", &display) {
            return None;
        }

        let store = RecordStore::new(storage);
        let stored = stored_banner_id(&store);

        let mut selector = Self {
            store,
            display,
            selected: None,
        };

        match stored {
            Some(id) if Banner::from_id(&id).is_some() => selector.show(id),
            Some(id) => tracing::debug!(banner_id = %id, "ignoring unknown stored banner"),
            None => {}
        }
        Some(selector)
    }

    /// "Use banner" trigger: persist `banner_id` and show its label. An ID
    /// outside the table is still saved and shown with the fallback label.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the selection cannot be persisted.
    pub fn select(&mut self, banner_id: &str) -> Result<(), StoreError> {
        self.store.save(BANNER_STORAGE_KEY, banner_id)?;
        tracing::info!(banner_id, "homepage banner applied");
        self.show(banner_id.to_owned());
        Ok(())
    }

    /// ID of the banner currently shown, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Label of the banner currently shown, if any.
    #[must_use]
    pub fn current_label(&self) -> Option<&'static str> {
        self.selected.as_deref().map(label_for)
    }

    /// Returns the dashboard display.
    #[must_use]
    pub const fn display(&self) -> &D {
        &self.display
    }

    fn show(&mut self, banner_id: String) {
        let text = format!(
            "Homepage hero is currently using: {}. (Prototype configured from Marketing Dashboard.)",
            label_for(&banner_id)
        );
        self.display.set_current_text(&text);
        self.selected = Some(banner_id);
    }
}

/// Stored selection, written either as a JSON string or as the bare ID
/// older dashboards saved.
fn stored_banner_id<S: KeyValueStorage>(store: &RecordStore<S>) -> Option<String> {
    let raw = match store.storage().get_item(BANNER_STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(error = %e, "storage read failed, no banner restored");
            return None;
        }
    };
    Some(serde_json::from_str::<String>(&raw).unwrap_or(raw))
}

fn label_for(banner_id: &str) -> &'static str {
    Banner::from_id(banner_id).map_or(FALLBACK_BANNER_LABEL, |banner| banner.label())
}
