//! Storefront session facade.
//!
//! Binds the persisted cart slot to the remote catalog and order services.
//! Cart mutations are each a single read-modify-write of the whole persisted
//! log; a host driving this from one thread needs no further coordination.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    cart::{CartLog, OrderTotals, Reconciliation, reconcile, totals},
    catalog::{CatalogService, HttpCatalogService, ProductId},
    config::ApiConfig,
    orders::{HttpOrdersService, NewOrder, Order, OrdersError, OrdersService},
    store::{CartStore, KeyValueStore},
};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart holds no units; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Order submission failed; the cart is left untouched.
    #[error(transparent)]
    Orders(#[from] OrdersError),
}

/// A reconciled cart together with its totals, ready to render.
#[derive(Debug, Clone)]
pub struct CartView {
    pub reconciliation: Reconciliation,
    pub totals: OrderTotals,
}

/// One user session against the storefront.
#[derive(Clone)]
pub struct Storefront {
    catalog: Arc<dyn CatalogService>,
    orders: Arc<dyn OrdersService>,
    cart: CartStore,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront").finish_non_exhaustive()
    }
}

impl Storefront {
    /// Assemble a session from explicit collaborators.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        orders: Arc<dyn OrdersService>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            catalog,
            orders,
            cart: CartStore::new(store),
        }
    }

    /// Assemble a session over the HTTP services.
    #[must_use]
    pub fn over_http(config: ApiConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(
            Arc::new(HttpCatalogService::new(config.clone())),
            Arc::new(HttpOrdersService::new(config)),
            store,
        )
    }

    /// Add one unit of the given product to the cart.
    pub fn add_to_cart(&self, id: ProductId) {
        let mut log = self.cart.load();
        log.add_unit(id);
        self.cart.save(&log);
    }

    /// Take back the most recently added unit of the given product.
    pub fn decrease_quantity(&self, id: ProductId) {
        let mut log = self.cart.load();
        log.remove_one_unit(id);
        self.cart.save(&log);
    }

    /// Remove every unit of the given product from the cart.
    pub fn remove_from_cart(&self, id: ProductId) {
        let mut log = self.cart.load();
        log.remove_all_units(id);
        self.cart.save(&log);
    }

    /// The persisted log as it currently stands.
    pub fn cart_log(&self) -> CartLog {
        self.cart.load()
    }

    /// Distinct-product count for the header badge.
    pub fn cart_badge_count(&self) -> usize {
        self.cart.load().distinct_count()
    }

    /// Reconcile the persisted cart against the catalog and price it.
    ///
    /// Unresolved references are reported, not removed; a superseded view is
    /// simply discarded by the caller in favor of the latest one.
    pub async fn view_cart(&self, delivery_cost: u64) -> CartView {
        let log = self.cart.load();

        let reconciliation = reconcile(self.catalog.as_ref(), &log).await;
        let totals = totals(&reconciliation.lines, delivery_cost);

        CartView {
            reconciliation,
            totals,
        }
    }

    /// Submit the cart as an order.
    ///
    /// The payload's goods list is replaced by the cart's distinct
    /// identifiers. The cart slot is cleared only after the server accepts
    /// the order; on failure the cart survives for another attempt.
    #[tracing::instrument(name = "storefront.checkout", skip(self, order), err)]
    pub async fn checkout(&self, order: NewOrder) -> Result<Order, CheckoutError> {
        let log = self.cart.load();

        if log.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = NewOrder {
            good_ids: log.distinct_ids(),
            ..order
        };

        let placed = self.orders.create_order(order).await?;

        self.cart.clear();

        info!(order_id = %placed.id, "order placed, cart cleared");

        Ok(placed)
    }
}
