//! Local-storage style persistence.
//!
//! Pages persist their state in named string slots, the way a browser's
//! `localStorage` works. [`KeyValueStorage`] is that slot interface and
//! [`RecordStore`] layers typed JSON records on top of it.
//!
//! ## Example
//!
//! ```
//! use handloom_core::{InMemoryStorage, RecordStore};
//!
//! let store = RecordStore::new(InMemoryStorage::new());
//! store.save("handloomCart", &vec![1, 2, 3])?;
//!
//! let loaded: Vec<u32> = store.load("handloomCart", Vec::new());
//! assert_eq!(loaded, vec![1, 2, 3]);
//! # Ok::<(), handloom_core::StoreError>(())
//! ```

mod in_memory;
mod record_store;

use thiserror::Error;

pub use in_memory::InMemoryStorage;
pub use record_store::{RecordStore, StoreError};

/// Errors raised by a [`KeyValueStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A lock guarding shared storage was poisoned.
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(String),
    /// The backing medium exists but cannot be read as storage.
    #[error("storage is corrupt: {0}")]
    Corrupt(String),
    /// Storage is disabled or its quota is exhausted.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value slots shared by every feature on a page.
///
/// Methods take `&self`: implementations share their state between clones,
/// so the cart, checkout and catalog features can each hold a handle to
/// the same storage.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value under `key`. Removing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
