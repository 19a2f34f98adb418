//! Core types for Neon Merch.
//!
//! This module provides the domain model: catalog products, the shared cart
//! and its line items, and immutable order snapshots.

pub mod cart;
pub mod currency;
pub mod id;
pub mod order;
pub mod product;

pub use cart::{Cart, CartItem};
pub use currency::CurrencyCode;
pub use id::{OrderId, ProductId};
pub use order::{Buyer, Order, OrderLineItem, OrderStatus, OrderSummary};
pub use product::Product;
