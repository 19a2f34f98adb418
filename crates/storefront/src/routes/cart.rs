//! Cart route handlers.
//!
//! All mutations go through the cart store, which persists the full cart
//! before responding - the returned JSON is always the durable state.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use neon_merch_core::{Cart, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: Option<u32>,
    pub size: Option<String>,
}

/// Return the current cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<Cart> {
    Json(state.cart().load().await)
}

/// Add an item to the cart, merging with an existing line item when the
/// `(product_id, size)` pair matches.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<Cart>> {
    let cart = state
        .cart()
        .add_item(&req.product_id, req.quantity.unwrap_or(1), req.size)
        .await?;
    Ok(Json(cart))
}

/// Remove every line item for a product id. Idempotent: removing an absent
/// product returns the cart unchanged.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Cart>> {
    let cart = state
        .cart()
        .remove_item(&ProductId::from(product_id))
        .await?;
    Ok(Json(cart))
}

/// Clear the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<Cart>> {
    Ok(Json(state.cart().clear().await?))
}
