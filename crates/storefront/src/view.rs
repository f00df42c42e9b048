//! Declarative view values derived from store state.
//!
//! Render functions here map the cart and wishlist to plain data the
//! hosting front-end displays - no markup, no event handlers. Quantity
//! controls are described by the target quantity each one submits, so the
//! surrounding UI attaches its own bindings.

use stumarcot_core::{Price, ProductId};

use crate::cart::{CartStore, LineItem, OrderSummary};
use crate::shipping::ShippingMethod;
use crate::storage::KeyValueStore;
use crate::wishlist::WishlistStore;

/// Cart row display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    /// Icon class for the row thumbnail.
    pub icon: &'static str,
    /// Formatted unit price, e.g. `$45.00 each`.
    pub unit_price: String,
    pub quantity: u32,
    /// Quantity the decrement control submits (0 removes the line).
    pub decrement_to: i64,
    /// Quantity the increment control submits.
    pub increment_to: i64,
    /// Formatted line total.
    pub line_total: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        let quantity = i64::from(item.quantity.get());
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            icon: item.icon.class(),
            unit_price: format!("{} each", Price::usd(item.unit_price)),
            quantity: item.quantity.get(),
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
            line_total: Price::usd(item.line_total()).display(),
        }
    }
}

/// Order summary display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub subtotal: String,
    /// `"Free"` when the shipping cost is zero.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<&OrderSummary> for SummaryView {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.display(),
            shipping: if summary.shipping.is_zero() {
                "Free".to_owned()
            } else {
                summary.shipping.display()
            },
            tax: summary.tax.display(),
            total: summary.total.display(),
        }
    }
}

/// Full cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Count for the navigation badge; the badge hides at zero.
    pub item_count: u32,
    pub summary: SummaryView,
    pub checkout_enabled: bool,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            summary: SummaryView {
                subtotal: "$0.00".to_owned(),
                shipping: "Free".to_owned(),
                tax: "$0.00".to_owned(),
                total: "$0.00".to_owned(),
            },
            checkout_enabled: false,
        }
    }

    /// Render the current cart state and shipping selection.
    #[must_use]
    pub fn render<S: KeyValueStore>(
        cart: &CartStore<S>,
        shipping: Option<ShippingMethod>,
    ) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            item_count: cart.item_count(),
            summary: SummaryView::from(&cart.compute_summary(shipping)),
            checkout_enabled: cart.can_checkout(),
        }
    }

    /// Whether the navigation badge should be shown.
    #[must_use]
    pub const fn badge_visible(&self) -> bool {
        self.item_count > 0
    }
}

/// Wishlist toggle-button display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistButtonView {
    pub product_id: String,
    /// Filled heart when the product is saved, outline otherwise.
    pub icon: &'static str,
    pub active: bool,
}

/// Render the wishlist button state for one product.
#[must_use]
pub fn wishlist_button<S: KeyValueStore>(
    wishlist: &WishlistStore<S>,
    id: &ProductId,
) -> WishlistButtonView {
    let active = wishlist.contains(id);
    WishlistButtonView {
        product_id: id.to_string(),
        icon: if active { "fas fa-heart" } else { "far fa-heart" },
        active,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use stumarcot_core::Quantity;

    use super::*;
    use crate::storage::MemoryStore;

    fn cart_with_tiles() -> CartStore<MemoryStore> {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(
            ProductId::new("ceramic-wall-tiles"),
            "Ceramic Wall Tiles",
            Decimal::new(4500, 2),
            Quantity::new(2).unwrap(),
        );
        cart
    }

    #[test]
    fn test_cart_row_rendering() {
        let cart = cart_with_tiles();
        let view = CartView::render(&cart, None);

        let row = view.items.first().unwrap();
        assert_eq!(row.name, "Ceramic Wall Tiles");
        assert_eq!(row.icon, "fas fa-th-large");
        assert_eq!(row.unit_price, "$45.00 each");
        assert_eq!(row.line_total, "$90.00");
        assert_eq!(row.decrement_to, 1);
        assert_eq!(row.increment_to, 3);
    }

    #[test]
    fn test_summary_shows_free_shipping() {
        let cart = cart_with_tiles();

        let view = CartView::render(&cart, Some(ShippingMethod::Pickup));
        assert_eq!(view.summary.shipping, "Free");

        let view = CartView::render(&cart, Some(ShippingMethod::Standard));
        assert_eq!(view.summary.shipping, "$5.00");
    }

    #[test]
    fn test_badge_visibility() {
        let empty = CartView::empty();
        assert!(!empty.badge_visible());
        assert!(!empty.checkout_enabled);

        let view = CartView::render(&cart_with_tiles(), None);
        assert!(view.badge_visible());
        assert!(view.checkout_enabled);
        assert_eq!(view.item_count, 2);
    }

    #[test]
    fn test_decrement_from_one_targets_removal() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(
            ProductId::new("a"),
            "A",
            Decimal::ONE,
            Quantity::ONE,
        );
        let view = CartView::render(&cart, None);
        assert_eq!(view.items.first().unwrap().decrement_to, 0);
    }

    #[test]
    fn test_wishlist_button_states() {
        let mut wishlist = WishlistStore::load(MemoryStore::new());
        let id = ProductId::new("tool-set");

        let button = wishlist_button(&wishlist, &id);
        assert!(!button.active);
        assert_eq!(button.icon, "far fa-heart");

        wishlist.toggle(id.clone(), "Tool Set");
        let button = wishlist_button(&wishlist, &id);
        assert!(button.active);
        assert_eq!(button.icon, "fas fa-heart");
    }
}
