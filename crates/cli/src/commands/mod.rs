//! One module per dashboard feature.
//!
//! Every command is a single page load: mount the feature against the file
//! storage, dispatch at most one event, and return what the views show.

use std::error::Error;

use crate::config::{CliConfig, ConfigError};
use crate::grid::{self, GridProduct};
use crate::storage::JsonFileStorage;

pub mod banner;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod login;

/// Output lines of a command, or the reason it failed.
pub type CommandResult = Result<Vec<String>, Box<dyn Error>>;

/// Everything a page load needs: the shared storage and the product grid.
#[derive(Debug, Clone)]
pub struct Page {
    pub storage: JsonFileStorage,
    pub grid: Vec<GridProduct>,
}

impl Page {
    /// Open the page described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Grid` if the configured grid cannot be loaded.
    pub fn open(config: &CliConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            storage: JsonFileStorage::new(&config.storage_path),
            grid: grid::load(config.grid_path.as_deref())?,
        })
    }

    fn product(&self, raw_id: &str) -> Result<&GridProduct, Box<dyn Error>> {
        let id = handloom_core::ProductId::parse(raw_id)?;
        grid::find(&self.grid, &id).ok_or_else(|| format!("No product card for {id}").into())
    }
}

fn not_mounted(feature: &str) -> Box<dyn Error> {
    format!("The {feature} is not available on this page").into()
}
