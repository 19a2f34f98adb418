//! Immutable order snapshots created at checkout.
//!
//! An [`Order`] is a write-once copy of the cart's contents taken at
//! checkout time. The order store exclusively owns persisted orders; nothing
//! in the system updates or deletes one after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::Cart;
use super::currency::CurrencyCode;
use super::id::{OrderId, ProductId};

/// Order lifecycle status.
///
/// Orders are created confirmed and never transition; the variant exists so
/// the wire shape carries an explicit status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Confirmed,
}

/// Minimal placeholder buyer identity (no authentication is modeled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub name: String,
}

impl Buyer {
    /// The default buyer used when checkout supplies no name.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_string(),
        }
    }
}

/// One line of an order: a cart item snapshot with renamed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at checkout time.
    pub unit_amount: i64,
    pub currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub total: i64,
}

/// An immutable, durably stored snapshot created at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub buyer: Buyer,
    pub line_items: Vec<OrderLineItem>,
    pub total: i64,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build an order snapshot from a non-empty cart.
    ///
    /// The caller is responsible for rejecting empty carts before calling
    /// this; the snapshot copies every line item field-for-field with the
    /// order-side renaming (`name` -> `product_name`, `price` ->
    /// `unit_amount`, `item_total` -> `total`).
    #[must_use]
    pub fn from_cart(id: OrderId, buyer: Buyer, cart: &Cart, now: DateTime<Utc>) -> Self {
        Self {
            id,
            status: OrderStatus::Confirmed,
            buyer,
            line_items: cart
                .items
                .iter()
                .map(|item| OrderLineItem {
                    product_id: item.product_id.clone(),
                    product_name: item.name.clone(),
                    quantity: item.quantity,
                    unit_amount: item.price,
                    currency: item.currency,
                    size: item.size.clone(),
                    total: item.item_total,
                })
                .collect(),
            total: cart.total,
            currency: cart.currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// The history-index view of this order.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            total: self.total,
            currency: self.currency,
            created_at: self.created_at,
        }
    }
}

/// Compact entry kept in the order history index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub total: i64,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}
