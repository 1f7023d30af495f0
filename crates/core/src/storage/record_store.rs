//! Typed JSON records stored in a single named slot.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{KeyValueStorage, StorageError};

/// Errors that can occur when writing a record.
///
/// Loading never fails; see [`RecordStore::load`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend rejected the write.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The record could not be serialized.
    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save wrapper around named slots holding JSON records.
///
/// Each data set lives under its own fixed key. There is no versioning and
/// no migration: a stored value that does not match the expected shape is
/// treated exactly like a missing one.
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Wrap a storage backend.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the record under `key`, failing soft.
    ///
    /// A missing slot, an unreadable backend, malformed JSON, or JSON of the
    /// wrong shape (a mapping where a sequence was expected, an entry with a
    /// missing field) all yield `fallback`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no stored record, using fallback");
                return fallback;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed, using fallback");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed record");
                fallback
            }
        }
    }

    /// Load the record under `key`, falling back to `T::default()`.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key, T::default())
    }

    /// Serialize `value` and write it under `key`, overwriting any previous
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization fails or the backend rejects
    /// the write (disabled storage, exhausted quota).
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(key, &raw)?;
        tracing::trace!(key, bytes = raw.len(), "record saved");
        Ok(())
    }

    /// Remove the record under `key` entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend rejects the removal.
    pub fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key)?;
        Ok(())
    }
}
