//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; the response body is always a JSON `{"error": ...}`
//! object so the UI client has one shape to handle.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use neon_merch_core::ProductId;

use crate::checkout::CheckoutError;
use crate::store::{CartError, StoreError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable storage operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Product id does not resolve in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Order id does not resolve in the order store. Holds the raw id so a
    /// malformed id gets the same response as an unknown one.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Checkout attempted with no items in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::UnknownProduct(id) => Self::ProductNotFound(id),
            CartError::Store(e) => Self::Store(e),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => Self::EmptyCart,
            CheckoutError::Store(e) => Self::Store(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ProductNotFound(_) | Self::OrderNotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyCart | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) => "Internal server error".to_string(),
            Self::ProductNotFound(_) => "Product not found".to_string(),
            Self::OrderNotFound(_) => "Order not found".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
