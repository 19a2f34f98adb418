//! Neon Merch Core - Shared domain types.
//!
//! This crate provides the domain model used across all Neon Merch
//! components:
//! - `storefront` - The public JSON API serving catalog, cart, and checkout
//! - `integration-tests` - End-to-end tests against a running storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure cart/order arithmetic - no
//! I/O, no storage access, no HTTP. Everything durable or networked lives in
//! the storefront crate; this keeps the invariants (line-item merging, total
//! recomputation, order snapshotting) testable in isolation.
//!
//! # Modules
//!
//! - [`types`] - Products, cart line items, orders, and their id newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
