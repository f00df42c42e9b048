//! Synchronous key-value persistence for store snapshots.
//!
//! The stores persist whole JSON snapshots under fixed string keys - the
//! same contract browser local storage offers: synchronous get/set of one
//! complete value, no partial writes, no change notifications. Backends:
//!
//! - [`FileStore`] - one JSON document per key under a data directory
//! - [`MemoryStore`] - shared in-memory map, used by tests

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys for persisted snapshots.
pub mod keys {
    /// Key for the cart line-item snapshot.
    pub const CART: &str = "cart";

    /// Key for the wishlist snapshot.
    pub const WISHLIST: &str = "wishlist";
}

/// Errors that can occur reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a stored value failed.
    #[error("failed to read key {key:?}: {source}")]
    Read {
        /// The key being read.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a value failed.
    #[error("failed to write key {key:?}: {source}")]
    Write {
        /// The key being written.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing directory could not be created.
    #[error("failed to create data directory {dir:?}: {source}")]
    CreateDir {
        /// The directory path.
        dir: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A string-keyed store of whole JSON values.
///
/// Each operation is a single whole-value read or write from the caller's
/// perspective. Implementations do not coordinate between handles: the
/// last write to a key wins.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    /// A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the removal fails for a reason other
    /// than the key being absent.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
