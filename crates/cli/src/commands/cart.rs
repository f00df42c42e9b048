//! Cart management commands.

use stumarcot_core::{ProductId, Quantity};
use stumarcot_storefront::cart::CartStore;
use stumarcot_storefront::catalog;
use stumarcot_storefront::shipping::ShippingMethod;
use stumarcot_storefront::view::CartView;
use stumarcot_storefront::{StorefrontConfig, StorefrontError, UserPrompt};

use super::open_store;
use crate::console::{self, AutoConfirm, ConsolePrompt};

/// Add a catalog product to the cart.
pub fn add(config: &StorefrontConfig, id: &str, quantity: u32) -> Result<(), StorefrontError> {
    let id = ProductId::new(id);
    let product =
        catalog::find(&id).ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;
    let quantity = Quantity::new(quantity).unwrap_or(Quantity::ONE);

    let mut cart = CartStore::load(open_store(config)?);
    let ack = cart.add_item(id, product.name, product.unit_price.amount, quantity);
    console::show_notification(&ack);
    Ok(())
}

/// Show cart contents and the order summary.
pub fn show(
    config: &StorefrontConfig,
    shipping: Option<ShippingMethod>,
) -> Result<(), StorefrontError> {
    let cart = CartStore::load(open_store(config)?);
    let view = CartView::render(&cart, shipping);

    if view.items.is_empty() {
        println!("Your cart is empty");
        println!("Add some construction materials to get started");
        return Ok(());
    }

    for row in &view.items {
        println!(
            "{:<24} {:>3} x {:<12} = {:>9}",
            row.name, row.quantity, row.unit_price, row.line_total
        );
    }
    println!();
    if let Some(method) = shipping {
        println!("Shipping method: {method}");
    }
    println!("Subtotal: {:>9}", view.summary.subtotal);
    println!("Shipping: {:>9}", view.summary.shipping);
    println!("Tax:      {:>9}", view.summary.tax);
    println!("Total:    {:>9}", view.summary.total);
    Ok(())
}

/// Set a line's quantity exactly; zero or below removes the line.
pub fn update(config: &StorefrontConfig, id: &str, quantity: i64) -> Result<(), StorefrontError> {
    let id = ProductId::new(id);
    let mut cart = CartStore::load(open_store(config)?);
    cart.set_quantity(&id, quantity);

    match cart.find(&id) {
        Some(item) => println!("{}: quantity now {}", item.name, item.quantity),
        None => println!("{id} is no longer in the cart"),
    }
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(config: &StorefrontConfig, id: &str) -> Result<(), StorefrontError> {
    let id = ProductId::new(id);
    let mut cart = CartStore::load(open_store(config)?);
    if cart.remove_item(&id) {
        println!("{id} removed from cart");
    } else {
        println!("{id} was not in the cart");
    }
    Ok(())
}

/// Empty the cart behind its confirmation gate.
pub fn clear(config: &StorefrontConfig, yes: bool) -> Result<(), StorefrontError> {
    let mut cart = CartStore::load(open_store(config)?);

    let cleared = if yes {
        cart.clear(&AutoConfirm)
    } else {
        cart.clear(&ConsolePrompt)
    };

    if cleared {
        println!("Cart cleared");
    } else {
        println!("Cart unchanged");
    }
    Ok(())
}

/// Apply a promo code.
pub fn promo(config: &StorefrontConfig, code: &str) -> Result<(), StorefrontError> {
    let cart = CartStore::load(open_store(config)?);

    match cart.apply_promo_code(code) {
        Ok(applied) => ConsolePrompt.alert(&format!(
            "Promo code applied! You saved {}%",
            applied.percent().normalize()
        )),
        Err(e) => ConsolePrompt.alert(&e.to_string()),
    }
    Ok(())
}

/// Proceed to checkout if the cart allows it.
pub fn checkout(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let cart = CartStore::load(open_store(config)?);
    if cart.proceed_to_checkout(&ConsolePrompt) {
        println!("Redirecting to checkout...");
    }
    Ok(())
}
