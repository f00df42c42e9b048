//! Cart store.
//!
//! `CartStore` owns the ordered line-item sequence for the current
//! session. It is loaded from the key-value store at construction and
//! writes the full snapshot back on every mutation. Reads that fail or
//! produce malformed data degrade to an empty cart; writes that fail are
//! logged and the in-memory state carries on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stumarcot_core::{Icon, Price, ProductId, Quantity};

use crate::catalog;
use crate::promo::{self, AppliedPromo, PromoError};
use crate::prompt::{Notification, UserPrompt};
use crate::shipping::ShippingMethod;
use crate::storage::{KeyValueStore, keys};

/// Fixed sales tax rate (8%).
// `Decimal::new` is not a `const fn`; `from_parts` is. `Decimal::new(8, 2)`
// is the value 0.08 (mantissa 8, scale 2) — build it via the const
// constructor so behavior is unchanged.
const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// One product and its requested quantity in the cart.
///
/// Serializes to the persisted layout `{id, name, price, quantity, image}`
/// with `price` as a plain JSON number and `image` as the icon class
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique among the cart's lines.
    pub id: ProductId,
    /// Display name, duplicated so rows render without a catalog lookup.
    pub name: String,
    /// Price for a single unit.
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Requested quantity, always at least 1.
    pub quantity: Quantity,
    /// Icon resolved from the id once, when the line was created.
    #[serde(rename = "image", default)]
    pub icon: Icon,
}

impl LineItem {
    /// Price for the whole line (`unit_price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity.get())
    }
}

/// Derived order totals for the current cart and shipping selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of all line totals.
    pub subtotal: Price,
    /// Flat cost of the selected shipping method, zero when none.
    pub shipping: Price,
    /// Sales tax on the subtotal.
    pub tax: Price,
    /// `subtotal + shipping + tax`.
    pub total: Price,
}

/// The cart: an ordered sequence of line items synchronized to storage.
///
/// Invariants: at most one line per product id, and every quantity is at
/// least 1 - a quantity update to zero or below removes the line.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the saved cart, or start empty.
    ///
    /// A missing snapshot, a read failure, or malformed data all produce
    /// an empty cart; there is no retry.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(keys::CART) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("discarding malformed cart snapshot: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read saved cart, starting empty: {e}");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines; 0 for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity.get()))
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the same id has its quantity incremented (no
    /// upper bound); otherwise a new line is appended with its icon
    /// resolved from the static id-to-icon mapping. The snapshot is
    /// persisted either way. Returns the transient acknowledgement to
    /// show the user.
    pub fn add_item(
        &mut self,
        id: ProductId,
        name: &str,
        unit_price: Decimal,
        quantity: Quantity,
    ) -> Notification {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            let icon = catalog::icon_for(&id);
            self.items.push(LineItem {
                id,
                name: name.to_owned(),
                unit_price,
                quantity,
                icon,
            });
        }
        self.persist();
        Notification::success(format!("{quantity} x {name} added to cart"))
    }

    /// Set the quantity of the line for `id` exactly.
    ///
    /// A value of zero or below removes the line instead. Unknown ids are
    /// a no-op. Persists on any change.
    pub fn set_quantity(&mut self, id: &ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let clamped = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        let Some(quantity) = Quantity::new(clamped) else {
            return;
        };
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = quantity;
            self.persist();
        }
    }

    /// Remove the line for `id`, if present. Returns whether a line was
    /// removed. Persists either way.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() != before;
        self.persist();
        removed
    }

    /// Empty the cart behind a destructive-action confirmation.
    ///
    /// A cart that is already empty skips the prompt entirely. Returns
    /// whether the cart was cleared.
    pub fn clear(&mut self, prompt: &dyn UserPrompt) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if !prompt.confirm("Are you sure you want to clear your cart?") {
            return false;
        }
        self.items.clear();
        self.persist();
        true
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Derive the order summary for the current state and shipping
    /// selection.
    ///
    /// Pure: no side effects, and repeated calls with unchanged state and
    /// selection return identical values.
    #[must_use]
    pub fn compute_summary(&self, shipping: Option<ShippingMethod>) -> OrderSummary {
        let subtotal = self.subtotal();
        let shipping_cost = shipping.map_or(Decimal::ZERO, |method| method.flat_cost().amount);
        let tax = subtotal * TAX_RATE;

        OrderSummary {
            subtotal: Price::usd(subtotal),
            shipping: Price::usd(shipping_cost),
            tax: Price::usd(tax),
            total: Price::usd(subtotal + shipping_cost + tax),
        }
    }

    /// Match raw promo-code input against the code table.
    ///
    /// A match currently only produces an acknowledgement; the discount
    /// is not applied to [`Self::compute_summary`]. Flagged for product
    /// clarification rather than silently changed - the returned
    /// [`AppliedPromo`] carries the fraction should it get wired in.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError`] for empty input or unrecognized codes.
    pub fn apply_promo_code(&self, input: &str) -> Result<AppliedPromo, PromoError> {
        promo::apply(input)
    }

    /// Whether checkout may proceed (at least one unit in the cart).
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        self.item_count() > 0
    }

    /// Gate checkout on a non-empty cart, alerting when it is empty.
    /// Returns whether the gate passed.
    pub fn proceed_to_checkout(&self, prompt: &dyn UserPrompt) -> bool {
        if self.is_empty() {
            prompt.alert("Your cart is empty!");
            return false;
        }
        true
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(keys::CART, &raw) {
                    tracing::warn!("failed to persist cart, keeping in-memory state: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to encode cart snapshot: {e}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::storage::MemoryStore;

    /// Prompt fake with a preset confirmation answer.
    struct ScriptedPrompt {
        answer: bool,
        confirms: Cell<u32>,
        alerts: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                confirms: Cell::new(0),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_owned());
        }
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn dollars(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_item_count_sums_distinct_ids() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));
        cart.add_item(ProductId::new("b"), "B", dollars(200), qty(3));
        cart.add_item(ProductId::new("c"), "C", dollars(300), qty(1));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_adding_same_id_merges_quantities() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(5));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.find(&ProductId::new("a")).unwrap().quantity.get(), 7);
    }

    #[test]
    fn test_add_resolves_icon_from_mapping() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(
            ProductId::new("construction-hammer"),
            "Construction Hammer",
            dollars(3200),
            qty(1),
        );
        cart.add_item(ProductId::new("mystery-item"), "Mystery", dollars(100), qty(1));

        assert_eq!(
            cart.find(&ProductId::new("construction-hammer")).unwrap().icon,
            Icon::Hammer
        );
        assert_eq!(
            cart.find(&ProductId::new("mystery-item")).unwrap().icon,
            Icon::Box
        );
    }

    #[test]
    fn test_add_acknowledgement_message() {
        let mut cart = CartStore::load(MemoryStore::new());
        let ack = cart.add_item(ProductId::new("a"), "Tile", dollars(1000), qty(2));
        assert_eq!(ack.message, "2 x Tile added to cart");
    }

    #[test]
    fn test_set_quantity_exact() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));
        cart.set_quantity(&ProductId::new("a"), 9);
        assert_eq!(cart.find(&ProductId::new("a")).unwrap().quantity.get(), 9);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));
        cart.set_quantity(&ProductId::new("a"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));
        cart.set_quantity(&ProductId::new("a"), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));
        cart.set_quantity(&ProductId::new("b"), 5);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(1));
        assert!(cart.remove_item(&ProductId::new("a")));
        assert!(!cart.remove_item(&ProductId::new("a")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_without_confirmation_keeps_cart() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));

        let prompt = ScriptedPrompt::answering(false);
        assert!(!cart.clear(&prompt));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_clear_with_confirmation_empties_cart() {
        let store = MemoryStore::new();
        let mut cart = CartStore::load(store.clone());
        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(2));

        let prompt = ScriptedPrompt::answering(true);
        assert!(cart.clear(&prompt));
        assert!(cart.is_empty());
        assert_eq!(store.get(keys::CART).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_on_empty_cart_skips_prompt() {
        let mut cart = CartStore::load(MemoryStore::new());
        let prompt = ScriptedPrompt::answering(true);
        assert!(!cart.clear(&prompt));
        assert_eq!(prompt.confirms.get(), 0);
    }

    #[test]
    fn test_summary_scenario_two_tiles() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "Tile", dollars(1000), qty(2));

        assert_eq!(cart.item_count(), 2);
        let summary = cart.compute_summary(None);
        assert_eq!(summary.subtotal.display(), "$20.00");
        assert_eq!(summary.tax.display(), "$1.60");
        assert_eq!(summary.shipping.display(), "$0.00");
        assert_eq!(summary.total.display(), "$21.60");
    }

    #[test]
    fn test_summary_scenario_with_shipping() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(5000), qty(1));

        let summary = cart.compute_summary(Some(ShippingMethod::Standard));
        assert_eq!(summary.subtotal.display(), "$50.00");
        assert_eq!(summary.shipping.display(), "$5.00");
        assert_eq!(summary.tax.display(), "$4.00");
        assert_eq!(summary.total.display(), "$59.00");
    }

    #[test]
    fn test_summary_is_pure() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add_item(ProductId::new("a"), "A", dollars(1234), qty(3));

        let first = cart.compute_summary(Some(ShippingMethod::Express));
        let second = cart.compute_summary(Some(ShippingMethod::Express));
        assert_eq!(first, second);
    }

    #[test]
    fn test_checkout_gate() {
        let mut cart = CartStore::load(MemoryStore::new());
        let prompt = ScriptedPrompt::answering(true);

        assert!(!cart.can_checkout());
        assert!(!cart.proceed_to_checkout(&prompt));
        assert_eq!(prompt.alerts.borrow().as_slice(), ["Your cart is empty!"]);

        cart.add_item(ProductId::new("a"), "A", dollars(100), qty(1));
        assert!(cart.can_checkout());
        assert!(cart.proceed_to_checkout(&prompt));
    }

    #[test]
    fn test_persisted_layout() {
        let store = MemoryStore::new();
        let mut cart = CartStore::load(store.clone());
        cart.add_item(
            ProductId::new("ceramic-wall-tiles"),
            "Ceramic Wall Tiles",
            dollars(4500),
            qty(2),
        );

        let raw = store.get(keys::CART).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let line = &value[0];
        assert_eq!(line["id"], "ceramic-wall-tiles");
        assert_eq!(line["name"], "Ceramic Wall Tiles");
        assert!(line["price"].is_number());
        assert_eq!(line["quantity"], 2);
        assert_eq!(line["image"], "fas fa-th-large");
    }

    #[test]
    fn test_reload_roundtrip() {
        let store = MemoryStore::new();
        let mut cart = CartStore::load(store.clone());
        cart.add_item(ProductId::new("a"), "A", dollars(4500), qty(2));
        cart.add_item(ProductId::new("b"), "B", dollars(999), qty(1));

        let reloaded = CartStore::load(store);
        assert_eq!(reloaded.items(), cart.items());
    }

    #[test]
    fn test_malformed_snapshot_starts_empty() {
        let store = MemoryStore::new();
        store.set(keys::CART, "not json").unwrap();

        let cart = CartStore::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_quantity_snapshot_is_malformed() {
        let store = MemoryStore::new();
        store
            .set(
                keys::CART,
                r#"[{"id":"a","name":"A","price":1.0,"quantity":0,"image":"fas fa-box"}]"#,
            )
            .unwrap();

        let cart = CartStore::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_promo_codes() {
        let cart = CartStore::load(MemoryStore::new());
        assert!(cart.apply_promo_code(" save10 ").is_ok());
        assert!(cart.apply_promo_code("NOPE").is_err());
    }
}
