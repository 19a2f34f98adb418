//! The shared cart and its line items.
//!
//! All cart arithmetic lives here as pure functions over the in-memory
//! value; durability and locking are the storefront cart store's job.
//!
//! # Invariants
//!
//! - A cart holds at most one line item per `(product_id, size)` pair;
//!   adding a matching pair increments the existing quantity in place.
//! - `total` always equals the sum of every line item's `item_total` and is
//!   recomputed after every mutation, never stored independently.
//! - Line items keep insertion order.

use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use super::id::ProductId;
use super::product::Product;

/// One `(product_id, size)` line item with a quantity and derived subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price captured from the catalog at add time.
    pub price: i64,
    pub currency: CurrencyCode,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Derived: `price * quantity`.
    pub item_total: i64,
}

impl CartItem {
    fn subtotal(price: i64, quantity: u32) -> i64 {
        price * i64::from(quantity)
    }
}

/// The single mutable collection of pending line items and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: i64,
    pub currency: CurrencyCode,
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cart {
    /// A fresh cart with no items.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            currency: CurrencyCode::INR,
        }
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of a product, merging into an existing line item
    /// when the `(product_id, size)` pair matches.
    ///
    /// Quantities below 1 are treated as 1. The cart total is recomputed
    /// before returning.
    pub fn add_line(&mut self, product: &Product, quantity: u32, size: Option<String>) {
        let quantity = quantity.max(1);

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id && item.size == size)
        {
            // Saturate rather than wrap: a wrapped quantity would corrupt
            // the derived item_total.
            item.quantity = item.quantity.saturating_add(quantity);
            item.item_total = CartItem::subtotal(item.price, item.quantity);
        } else {
            self.items.push(CartItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                currency: product.currency,
                quantity,
                size,
                item_total: CartItem::subtotal(product.price, quantity),
            });
        }

        self.recompute_total();
    }

    /// Remove every line item for a product id, across all size variants.
    ///
    /// Returns the number of line items removed; removing an absent product
    /// is a no-op, not an error. The cart total is recomputed.
    pub fn remove_product(&mut self, product_id: &ProductId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != *product_id);
        self.recompute_total();
        before - self.items.len()
    }

    /// Re-derive `total` from the current line items.
    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(|item| item.item_total).sum();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            id: ProductId::new("mug-001"),
            name: "Cyberpunk Coffee Mug".to_string(),
            description: "Neon-lit ceramic mug with LED base".to_string(),
            price: 899,
            currency: CurrencyCode::INR,
            category: "mug".to_string(),
            color: Some("black".to_string()),
            sizes: None,
            stock: 15,
            image: "\u{2615}".to_string(),
        }
    }

    fn tshirt() -> Product {
        Product {
            id: ProductId::new("tshirt-001"),
            name: "Neural Network T-Shirt".to_string(),
            description: "100% cotton with circuit board design".to_string(),
            price: 799,
            currency: CurrencyCode::INR,
            category: "tshirt".to_string(),
            color: Some("black".to_string()),
            sizes: Some(vec!["S".into(), "M".into(), "L".into(), "XL".into()]),
            stock: 25,
            image: "\u{1f455}".to_string(),
        }
    }

    #[test]
    fn adding_same_product_and_size_merges_quantities() {
        let mut cart = Cart::empty();
        cart.add_line(&mug(), 1, None);
        assert_eq!(cart.total, 899);

        cart.add_line(&mug(), 2, None);
        assert_eq!(cart.items.len(), 1);
        let item = cart.items.first().unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.item_total, 2697);
        assert_eq!(cart.total, 2697);
    }

    #[test]
    fn different_sizes_are_distinct_line_items() {
        let mut cart = Cart::empty();
        cart.add_line(&tshirt(), 1, Some("M".to_string()));
        cart.add_line(&tshirt(), 1, Some("L".to_string()));

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, 799 * 2);
    }

    #[test]
    fn absent_size_and_explicit_size_are_distinct() {
        let mut cart = Cart::empty();
        cart.add_line(&tshirt(), 1, None);
        cart.add_line(&tshirt(), 1, Some("M".to_string()));
        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn total_always_equals_sum_of_item_totals() {
        let mut cart = Cart::empty();
        cart.add_line(&mug(), 2, None);
        cart.add_line(&tshirt(), 1, Some("M".to_string()));
        cart.add_line(&tshirt(), 3, Some("L".to_string()));
        cart.remove_product(&ProductId::new("mug-001"));
        cart.add_line(&mug(), 1, None);

        let derived: i64 = cart.items.iter().map(|i| i.item_total).sum();
        assert_eq!(cart.total, derived);
    }

    #[test]
    fn remove_strips_every_size_variant() {
        let mut cart = Cart::empty();
        cart.add_line(&tshirt(), 1, Some("M".to_string()));
        cart.add_line(&tshirt(), 1, Some("L".to_string()));
        cart.add_line(&mug(), 1, None);

        let removed = cart.remove_product(&ProductId::new("tshirt-001"));
        assert_eq!(removed, 2);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, 899);
    }

    #[test]
    fn remove_of_absent_product_is_a_noop() {
        let mut cart = Cart::empty();
        cart.add_line(&mug(), 1, None);
        let snapshot = cart.clone();

        let removed = cart.remove_product(&ProductId::new("xyz"));
        assert_eq!(removed, 0);
        assert_eq!(cart, snapshot);
    }

    #[test]
    fn merging_saturates_instead_of_overflowing() {
        let mut cart = Cart::empty();
        cart.add_line(&mug(), u32::MAX, None);
        cart.add_line(&mug(), 1, None);

        let item = cart.items.first().unwrap();
        assert_eq!(item.quantity, u32::MAX);
        assert_eq!(item.item_total, 899 * i64::from(u32::MAX));
        assert_eq!(cart.total, item.item_total);
    }

    #[test]
    fn zero_quantity_is_clamped_to_one() {
        let mut cart = Cart::empty();
        cart.add_line(&mug(), 0, None);
        assert_eq!(cart.items.first().unwrap().quantity, 1);
        assert_eq!(cart.total, 899);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::empty();
        cart.add_line(&tshirt(), 1, Some("M".to_string()));
        cart.add_line(&mug(), 1, None);
        cart.add_line(&tshirt(), 1, Some("M".to_string()));

        let ids: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["tshirt-001", "mug-001"]);
    }

    #[test]
    fn wire_format_uses_snake_case_fields() {
        let mut cart = Cart::empty();
        cart.add_line(&mug(), 2, None);

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["items"][0]["product_id"], "mug-001");
        assert_eq!(json["items"][0]["item_total"], 1798);
        assert_eq!(json["total"], 1798);
        assert_eq!(json["currency"], "INR");
    }
}
