//! Order route handlers.
//!
//! Orders are write-once; both handlers are pure reads.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use neon_merch_core::{Order, OrderId, OrderSummary};

use crate::error::{AppError, Result};
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Order history query parameters.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// List recent order summaries, newest first.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<OrderSummary>>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Ok(Json(state.orders().history(limit).await?))
}

/// Fetch a single order by id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    // A malformed id cannot name any stored order, so it gets the same
    // not-found response as an unknown one.
    let Ok(order_id) = id.parse::<OrderId>() else {
        return Err(AppError::OrderNotFound(id));
    };

    state
        .orders()
        .get(order_id)
        .await?
        .map(Json)
        .ok_or(AppError::OrderNotFound(id))
}
