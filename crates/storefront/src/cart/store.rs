//! The cart store: authoritative in-session cart plus persisted mirror.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;
use vapemart_core::{Product, ProductId};

use super::slot::CartSlot;
use super::totals::CartTotals;

/// Fallback category label for products without a category.
pub const DEFAULT_CATEGORY_LABEL: &str = "Vape";

/// One cart entry: a product snapshot and the quantity selected.
///
/// `name`, `price`, `image`, and `category` are snapshotted at add time
/// and not live-linked to later product updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
}

impl CartLineItem {
    /// Build a line item by snapshotting the given product.
    #[must_use]
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().unwrap_or_default().to_owned(),
            category: product
                .category_name()
                .unwrap_or(DEFAULT_CATEGORY_LABEL)
                .to_owned(),
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The shopping cart: an insertion-ordered sequence of line items with a
/// mirror in a [`CartSlot`], rewritten in full after every mutation.
///
/// At most one line item exists per product id; repeated adds for the
/// same id increment its quantity. Quantity bounds are a caller
/// contract: the store merges and replaces quantities as instructed and
/// does not validate the [1, 10] range (the application context is the
/// enforcing boundary).
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    slot: S,
}

impl<S: CartSlot> CartStore<S> {
    /// Construct the store by rehydrating from the slot.
    ///
    /// A read or parse failure is logged and treated as an empty cart;
    /// it is never surfaced as an error.
    pub fn load(slot: S) -> Self {
        let items = match slot.load() {
            Ok(items) => items.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "failed to load cart from slot, starting empty");
                Vec::new()
            }
        };
        Self { items, slot }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Total units across all line items (the header badge count).
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derived totals, recomputed on every call.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.items)
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new snapshot line is appended. No upper
    /// clamp is applied here.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartLineItem::snapshot(product, quantity));
        }
        self.persist();
    }

    /// Remove the line item for `id`. No-op when absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
        self.persist();
    }

    /// Replace the quantity of the line item for `id`, storing the value
    /// as given. Silent no-op when the id is absent.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    // Full rewrite of the slot, last write wins. A failed write is
    // logged and the in-memory items stay authoritative.
    fn persist(&self) {
        if let Err(err) = self.slot.save(&self.items) {
            warn!(error = %err, "failed to persist cart to slot");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::cart::MemorySlot;

    use super::*;

    fn product(id: &str, name: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_owned(),
            description: String::new(),
            price,
            images: vec![format!("https://img.example/{id}.jpg")],
            category: None,
            created_at: Utc
                .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
            popularity: 0,
        }
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut store = CartStore::load(MemorySlot::new());
        let pod = product("p-1", "Pod System Y", dec!(29.99));

        store.add(&pod, 2);
        store.add(&pod, 3);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 5);
    }

    #[test]
    fn test_add_snapshots_product_fields() {
        let mut store = CartStore::load(MemorySlot::new());
        let mut pod = product("p-1", "Pod System Y", dec!(29.99));
        store.add(&pod, 1);

        // Later product edits must not leak into the existing line item.
        pod.name = "Renamed".to_owned();
        pod.price = dec!(99.99);

        let item = &store.items()[0];
        assert_eq!(item.name, "Pod System Y");
        assert_eq!(item.price, dec!(29.99));
        assert_eq!(item.image, "https://img.example/p-1.jpg");
        assert_eq!(item.category, DEFAULT_CATEGORY_LABEL);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = CartStore::load(MemorySlot::new());
        store.add(&product("p-1", "Pod System Y", dec!(29.99)), 1);

        let id = ProductId::from("p-1");
        store.remove(&id);
        store.remove(&id);

        assert!(store.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut store = CartStore::load(MemorySlot::new());
        store.add(&product("p-1", "Pod System Y", dec!(29.99)), 1);

        store.set_quantity(&ProductId::from("ghost"), 7);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 1);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut store = CartStore::load(MemorySlot::new());
        store.add(&product("p-1", "Pod System Y", dec!(29.99)), 1);
        store.add(&product("p-2", "Vape Device X", dec!(49.99)), 2);

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.quantity(), 0);
    }

    #[test]
    fn test_quantity_sums_all_lines() {
        let mut store = CartStore::load(MemorySlot::new());
        store.add(&product("p-1", "Pod System Y", dec!(29.99)), 2);
        store.add(&product("p-2", "Vape Device X", dec!(49.99)), 3);

        assert_eq!(store.quantity(), 5);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = CartStore::load(MemorySlot::new());
        store.add(&product("p-2", "Vape Device X", dec!(49.99)), 1);
        store.add(&product("p-1", "Pod System Y", dec!(29.99)), 1);
        store.add(&product("p-2", "Vape Device X", dec!(49.99)), 1);

        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p-2", "p-1"]);
    }
}
