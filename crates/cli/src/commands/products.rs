//! Catalog browsing commands.

use stumarcot_core::ProductId;
use stumarcot_storefront::catalog::{self, Category};
use stumarcot_storefront::filters::{PriceRange, ProductFilter, SortOrder};
use stumarcot_storefront::view;
use stumarcot_storefront::wishlist::WishlistStore;
use stumarcot_storefront::{StorefrontConfig, StorefrontError};

use super::open_store;

/// List catalog products, optionally filtered and sorted.
pub fn list(
    category: Option<Category>,
    price: Option<&str>,
    sort: SortOrder,
) -> Result<(), StorefrontError> {
    let price_range = price.map(PriceRange::parse).transpose()?;
    let filter = ProductFilter {
        category,
        price_range,
        sort,
    };

    let products = filter.apply(catalog::all());
    if products.is_empty() {
        println!("No products match the current filters");
        return Ok(());
    }

    for product in products {
        println!(
            "{:<24} {:<24} {:>8}  {}",
            product.id,
            product.name,
            product.unit_price.display(),
            product.category
        );
    }
    Ok(())
}

/// Show one product in detail.
pub fn show(config: &StorefrontConfig, id: &str) -> Result<(), StorefrontError> {
    let id = ProductId::new(id);
    let product =
        catalog::find(&id).ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;

    println!("{}", product.name);
    match catalog::detail(&id).and_then(|d| d.original_price) {
        Some(original) => println!(
            "{} (was {})",
            product.unit_price.display(),
            original.display()
        ),
        None => println!("{}", product.unit_price.display()),
    }
    println!("Category: {}", product.category);

    if let Some(detail) = catalog::detail(&id) {
        println!();
        println!("{}", detail.description);
        println!();
        for feature in detail.features {
            println!("  - {feature}");
        }
    }

    let wishlist = WishlistStore::load(open_store(config)?);
    let button = view::wishlist_button(&wishlist, &id);
    if button.active {
        println!();
        println!("On your wishlist");
    }
    Ok(())
}
