//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use super::id::ProductId;

/// A product in the read-only catalog.
///
/// Products are immutable for the lifetime of the process. `stock` is
/// informational only - nothing in the cart or checkout path decrements it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Integer amount in the currency's minor-unit-free form (e.g. 899 INR).
    pub price: i64,
    pub currency: CurrencyCode,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Available sizes for apparel; absent for one-size products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    pub stock: u32,
    /// Display glyph used by the UI client.
    pub image: String,
}
