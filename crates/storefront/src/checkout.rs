//! Checkout engine: the cart -> order transition.
//!
//! Checkout is atomic in effect: it runs entirely inside the cart store's
//! critical section, and the order is durably persisted **before** the cart
//! is cleared. A failure between those two steps can leave a stale non-empty
//! cart next to an already-confirmed order - never a lost order.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use neon_merch_core::{Buyer, Order, OrderId};

use crate::store::{CartStore, OrderStore, StoreError};

/// Errors from the checkout transition.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no line items; nothing was created or mutated.
    #[error("cart is empty")]
    EmptyCart,

    /// Persisting the order failed; the cart is untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the cart -> order transition.
#[derive(Clone)]
pub struct CheckoutEngine {
    cart: Arc<CartStore>,
    orders: Arc<OrderStore>,
}

impl CheckoutEngine {
    /// Create an engine over the cart and order stores.
    #[must_use]
    pub const fn new(cart: Arc<CartStore>, orders: Arc<OrderStore>) -> Self {
        Self { cart, orders }
    }

    /// Convert the current cart into a persisted order and clear the cart.
    ///
    /// # Errors
    ///
    /// `CheckoutError::EmptyCart` when there is nothing to order;
    /// `CheckoutError::Store` when the order cannot be persisted (the cart
    /// is left as it was).
    pub async fn checkout(&self, buyer: Buyer) -> Result<Order, CheckoutError> {
        let txn = self.cart.begin().await;

        let cart = txn.load().await;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order::from_cart(OrderId::generate(), buyer, &cart, Utc::now());

        // The order must be durable before the cart is emptied.
        self.orders.save(&order).await?;

        if let Err(e) = txn.clear().await {
            // The order is already confirmed; a stale cart is the safe
            // failure direction, so report success and log the fault.
            tracing::error!(order_id = %order.id, error = %e, "order persisted but cart clear failed");
        }

        tracing::info!(order_id = %order.id, total = order.total, items = order.line_items.len(), "checkout complete");
        Ok(order)
    }
}
