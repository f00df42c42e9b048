//! Wishlist store.

use serde::{Deserialize, Serialize};

use stumarcot_core::ProductId;

use crate::prompt::Notification;
use crate::storage::{KeyValueStore, keys};

/// One saved product, persisted as `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
}

/// The wishlist: per-product toggle entries synchronized to storage.
///
/// Loading and persistence follow the cart's rules: missing or malformed
/// snapshots start empty, write failures are logged and swallowed.
#[derive(Debug)]
pub struct WishlistStore<S> {
    entries: Vec<WishlistEntry>,
    storage: S,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Load the saved wishlist, or start empty.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get(keys::WISHLIST) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("discarding malformed wishlist snapshot: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read saved wishlist, starting empty: {e}");
                Vec::new()
            }
        };
        Self { entries, storage }
    }

    /// The current entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Whether `id` is on the wishlist.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    /// Toggle a product on or off the wishlist. Persists, and returns the
    /// acknowledgement to show the user.
    pub fn toggle(&mut self, id: ProductId, name: &str) -> Notification {
        let notification = if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            Notification::info(format!("{name} removed from wishlist"))
        } else {
            self.entries.push(WishlistEntry {
                id,
                name: name.to_owned(),
            });
            Notification::success(format!("{name} added to wishlist"))
        };
        self.persist();
        notification
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(keys::WISHLIST, &raw) {
                    tracing::warn!("failed to persist wishlist, keeping in-memory state: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to encode wishlist snapshot: {e}"),
        }
    }
}
