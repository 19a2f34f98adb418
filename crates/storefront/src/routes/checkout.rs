//! Checkout route handler.

use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use neon_merch_core::{Buyer, CurrencyCode, OrderId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Optional checkout request body.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutRequest {
    pub buyer_name: Option<String>,
}

/// Checkout confirmation returned to the client.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub order_id: OrderId,
    pub total: i64,
    pub currency: CurrencyCode,
    pub message: String,
}

/// Convert the current cart into a persisted order.
///
/// The body is optional; clients may POST with no payload at all, so the
/// raw bytes are taken and parsed only when non-empty.
#[instrument(skip(state, body))]
pub async fn checkout(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckoutResponse>> {
    let req: CheckoutRequest = if body.is_empty() {
        CheckoutRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?
    };

    let buyer = req
        .buyer_name
        .map_or_else(Buyer::guest, |name| Buyer { name });

    let order = state.checkout().checkout(buyer).await?;

    Ok(Json(CheckoutResponse {
        success: true,
        order_id: order.id,
        total: order.total,
        currency: order.currency,
        message: "Order placed successfully!".to_string(),
    }))
}
