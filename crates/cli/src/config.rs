//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HANDLOOM_STORAGE_PATH` - File acting as browser local storage
//!   (default: `.handloom/storage.json`)
//! - `HANDLOOM_GRID_PATH` - YAML product grid (default: built-in grid)
//! - `RUST_LOG` - Log filter (default: `warn`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_STORAGE_PATH: &str = ".handloom/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid product grid: {0}")]
    Grid(String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// File backing the key-value storage
    pub storage_path: PathBuf,
    /// Optional YAML file describing the product grid
    pub grid_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_path = lookup("HANDLOOM_STORAGE_PATH")
            .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string());
        if storage_path.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "HANDLOOM_STORAGE_PATH".to_string(),
                "path cannot be empty".to_string(),
            ));
        }

        let grid_path = match lookup("HANDLOOM_GRID_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "HANDLOOM_GRID_PATH".to_string(),
                    "path cannot be empty".to_string(),
                ));
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(Self {
            storage_path: PathBuf::from(storage_path),
            grid_path,
        })
    }
}
