//! Application context shared across views.
//!
//! The context is the single source of truth for session state: it owns
//! the configuration, the API client, and the cart store. Views never
//! mutate the cart directly - every mutation goes through the named
//! operations here, which is also where the per-line quantity bound is
//! enforced (the store itself does not validate, by caller contract).

use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use vapemart_core::{Product, ProductId};

use crate::api::{ApiClient, CheckoutRequest, CheckoutSession, ShippingContact};
use crate::cart::{CartLineItem, CartStore, CartTotals, JsonFileSlot};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};

/// Allowed per-line quantity range, enforced at this boundary.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=10;

/// Application context shared across all views.
///
/// Cheaply cloneable via `Arc`. Cart access is serialized through a
/// mutex; operations are short and synchronous, so contention is not a
/// concern.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<AppContextInner>,
}

struct AppContextInner {
    config: StorefrontConfig,
    api: ApiClient,
    cart: Mutex<CartStore<JsonFileSlot>>,
}

impl AppContext {
    /// Create the context, rehydrating the cart from the configured
    /// slot. A missing or unreadable slot starts an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = ApiClient::new(config.api_url.clone());
        let cart = Mutex::new(CartStore::load(JsonFileSlot::new(config.cart_path.clone())));

        Self {
            inner: Arc::new(AppContextInner { config, api, cart }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::QuantityOutOfRange` when `quantity` is outside
    /// [`QUANTITY_RANGE`].
    pub fn add_to_cart(&self, product: &Product, quantity: u32) -> Result<()> {
        check_quantity(quantity)?;
        self.cart().add(product, quantity);
        Ok(())
    }

    /// Replace the quantity of the line item for `id`. Absent ids are a
    /// silent no-op, matching the permissive store semantics.
    ///
    /// # Errors
    ///
    /// Returns `AppError::QuantityOutOfRange` when `quantity` is outside
    /// [`QUANTITY_RANGE`].
    pub fn change_quantity(&self, id: &ProductId, quantity: u32) -> Result<()> {
        check_quantity(quantity)?;
        self.cart().set_quantity(id, quantity);
        Ok(())
    }

    /// Remove the line item for `id`, if present.
    pub fn remove_from_cart(&self, id: &ProductId) {
        self.cart().remove(id);
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.cart().clear();
    }

    /// Current line items in insertion order.
    #[must_use]
    pub fn cart_items(&self) -> Vec<CartLineItem> {
        self.cart().items().to_vec()
    }

    /// Current derived totals.
    #[must_use]
    pub fn cart_totals(&self) -> CartTotals {
        self.cart().totals()
    }

    /// Total units in the cart (the header badge count).
    #[must_use]
    pub fn cart_quantity(&self) -> u32 {
        self.cart().quantity()
    }

    /// Create a checkout session from the current cart, handing the
    /// line items and contact to the backend verbatim.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyCart` when the cart has no items, or
    /// `AppError::Api` when session creation fails.
    pub async fn begin_checkout(&self, contact: ShippingContact) -> Result<CheckoutSession> {
        let items = {
            let cart = self.cart();
            if cart.is_empty() {
                return Err(AppError::EmptyCart);
            }
            cart.items().to_vec()
        };

        let request = CheckoutRequest {
            items,
            shipping: contact,
        };
        Ok(self.inner.api.create_checkout_session(&request).await?)
    }

    fn cart(&self) -> MutexGuard<'_, CartStore<JsonFileSlot>> {
        // A poisoned mutex only means another view panicked mid-mutation;
        // the cart data itself is still coherent.
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_quantity(quantity: u32) -> Result<()> {
    if QUANTITY_RANGE.contains(&quantity) {
        Ok(())
    } else {
        Err(AppError::QuantityOutOfRange(quantity))
    }
}
