//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::CheckoutEngine;
use crate::config::StorefrontConfig;
use crate::store::{CartStore, OrderStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the durable stores, and the checkout engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    cart: Arc<CartStore>,
    orders: Arc<OrderStore>,
    checkout: CheckoutEngine,
}

impl AppState {
    /// Create a new application state rooted at the configured data dir.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(Catalog::seed());
        let cart = Arc::new(CartStore::new(&config.data_dir, Arc::clone(&catalog)));
        let orders = Arc::new(OrderStore::new(&config.data_dir));
        let checkout = CheckoutEngine::new(Arc::clone(&cart), Arc::clone(&orders));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                orders,
                checkout,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the checkout engine.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutEngine {
        &self.inner.checkout
    }
}
