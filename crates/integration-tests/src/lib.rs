//! Integration tests for Neon Merch.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront against a scratch data directory
//! STOREFRONT_DATA_DIR=$(mktemp -d) cargo run -p neon-merch-storefront
//!
//! # Run the end-to-end tests
//! cargo test -p neon-merch-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - Catalog, cart, and checkout flow over HTTP
//!
//! The tests talk to a live server (`STOREFRONT_BASE_URL`, default
//! `http://localhost:4000`) and share its single global cart, so they are
//! `#[ignore]`d by default and must not run in parallel against a server
//! holding state you care about.

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}
