//! `HashMap`-backed storage for tests and headless use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStorage, StorageError};

/// In-memory key-value storage.
///
/// Clone-friendly via `Arc`: clones share the same slots, like two scripts
/// on one page sharing `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] if the lock was poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StorageError::LockPoisoned("len"))?;
        Ok(slots.len())
    }

    /// Returns true when no slot is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] if the lock was poisoned.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StorageError::LockPoisoned("get_item"))?;
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::LockPoisoned("set_item"))?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::LockPoisoned("remove_item"))?;
        slots.remove(key);
        Ok(())
    }
}
