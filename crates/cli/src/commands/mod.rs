//! CLI command implementations.

pub mod cart;
pub mod contact;
pub mod products;
pub mod wishlist;

use stumarcot_storefront::{
    FileStore, KeyValueStore, MemoryStore, StorefrontConfig, StorefrontError,
};

/// Open the configured key-value store.
///
/// File-backed under the data directory by default; in-memory when the
/// configuration asks for an ephemeral run.
pub fn open_store(config: &StorefrontConfig) -> Result<Box<dyn KeyValueStore>, StorefrontError> {
    if config.ephemeral {
        Ok(Box::new(MemoryStore::new()))
    } else {
        Ok(Box::new(FileStore::open(&config.data_dir)?))
    }
}
