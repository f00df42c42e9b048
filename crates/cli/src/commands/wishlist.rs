//! Wishlist commands.

use stumarcot_core::ProductId;
use stumarcot_storefront::catalog;
use stumarcot_storefront::wishlist::WishlistStore;
use stumarcot_storefront::{StorefrontConfig, StorefrontError};

use super::open_store;
use crate::console;

/// Toggle a catalog product on or off the wishlist.
pub fn toggle(config: &StorefrontConfig, id: &str) -> Result<(), StorefrontError> {
    let id = ProductId::new(id);
    let product =
        catalog::find(&id).ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;

    let mut wishlist = WishlistStore::load(open_store(config)?);
    let ack = wishlist.toggle(id, product.name);
    console::show_notification(&ack);
    Ok(())
}

/// List wishlist entries.
pub fn list(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let wishlist = WishlistStore::load(open_store(config)?);

    if wishlist.entries().is_empty() {
        println!("Your wishlist is empty");
        return Ok(());
    }

    for entry in wishlist.entries() {
        println!("{:<24} {}", entry.id, entry.name);
    }
    Ok(())
}
