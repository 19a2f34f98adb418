//! Product catalog route handlers.
//!
//! The catalog is read-only; these handlers only project it onto the wire.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use neon_merch_core::{Product, ProductId};

use crate::catalog::ProductFilter;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List catalog products, optionally filtered.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    let products = state
        .catalog()
        .list(&filter)
        .into_iter()
        .cloned()
        .collect();
    Json(products)
}

/// Fetch a single product by id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = ProductId::from(id);
    state
        .catalog()
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ProductNotFound(id))
}
