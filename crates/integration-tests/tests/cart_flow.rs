//! Full shopping flows through catalog, cart, and views.

#![allow(clippy::unwrap_used)]

use stumarcot_core::{ProductId, Quantity};
use stumarcot_integration_tests::ScriptedPrompt;
use stumarcot_storefront::cart::CartStore;
use stumarcot_storefront::catalog;
use stumarcot_storefront::shipping::ShippingMethod;
use stumarcot_storefront::storage::FileStore;
use stumarcot_storefront::view::CartView;

fn qty(n: u32) -> Quantity {
    Quantity::new(n).unwrap()
}

/// Add a catalog product to a cart the way the CLI does.
fn add_from_catalog(cart: &mut CartStore<FileStore>, id: &str, quantity: u32) {
    let id = ProductId::new(id);
    let product = catalog::find(&id).expect("product in catalog");
    cart.add_item(id, product.name, product.unit_price.amount, qty(quantity));
}

#[test]
fn test_shop_and_summarize() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());

    add_from_catalog(&mut cart, "ceramic-wall-tiles", 2); // $45.00 each
    add_from_catalog(&mut cart, "pelvin-blocks", 1); // $25.00

    assert_eq!(cart.item_count(), 3);

    let view = CartView::render(&cart, Some(ShippingMethod::Standard));
    assert_eq!(view.summary.subtotal, "$115.00");
    assert_eq!(view.summary.shipping, "$5.00");
    assert_eq!(view.summary.tax, "$9.20");
    assert_eq!(view.summary.total, "$129.20");
    assert!(view.checkout_enabled);
}

#[test]
fn test_quantity_controls_collapse_to_removal() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());

    add_from_catalog(&mut cart, "tool-set", 1);
    let view = CartView::render(&cart, None);
    let row = view.items.first().unwrap();

    // The decrement control on a single-unit row submits 0, which removes.
    cart.set_quantity(&ProductId::new("tool-set"), row.decrement_to);
    assert!(cart.is_empty());
}

#[test]
fn test_clear_flow_respects_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());
    add_from_catalog(&mut cart, "premium-paint", 4);

    let declined = ScriptedPrompt::answering(false);
    assert!(!cart.clear(&declined));
    assert_eq!(declined.confirms(), 1);
    assert_eq!(cart.item_count(), 4);

    let accepted = ScriptedPrompt::answering(true);
    assert!(cart.clear(&accepted));
    assert!(cart.is_empty());
}

#[test]
fn test_checkout_gate_alerts_on_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let cart: CartStore<FileStore> = CartStore::load(FileStore::open(dir.path()).unwrap());

    let prompt = ScriptedPrompt::answering(true);
    assert!(!cart.proceed_to_checkout(&prompt));
    assert_eq!(prompt.alerts(), ["Your cart is empty!"]);
}

#[test]
fn test_promo_acknowledges_but_keeps_totals() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());
    add_from_catalog(&mut cart, "subway-tiles", 1); // $40.00

    let before = cart.compute_summary(None);
    let applied = cart.apply_promo_code(" build20 ").unwrap();
    assert_eq!(applied.code.as_str(), "BUILD20");

    // Matching a code does not change the summary.
    assert_eq!(cart.compute_summary(None), before);
}
