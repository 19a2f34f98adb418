//! Durable JSON storage for the cart and orders.
//!
//! # Layout
//!
//! Everything lives under the configured data directory:
//!
//! ```text
//! <data_dir>/cart.json                       - the single shared cart,
//!                                              overwritten in place
//! <data_dir>/orders/order_<id>.json          - one write-once file per order
//! <data_dir>/orders/order_history.json       - append-only summary index
//! ```
//!
//! Writes go through [`write_json_atomic`]: serialize, write a sibling temp
//! file, rename over the target. Readers therefore see either the previous
//! complete state or the new one, never a half-applied mutation.

pub mod cart;
pub mod orders;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub use cart::{CartError, CartStore};
pub use orders::OrderStore;

/// Durable-storage failure (the `PersistenceError` of the error taxonomy).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem read/write failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Atomically write a value as pretty-printed JSON.
///
/// Creates parent directories as needed, writes to a `.tmp` sibling, then
/// renames over the target so a crash mid-write never leaves a torn file.
pub(crate) async fn write_json_atomic<T: Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
