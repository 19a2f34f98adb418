//! Durable append-only store for order records.
//!
//! Each order lands in its own write-once file keyed by its id; a compact
//! history index (`order_history.json`) is appended alongside for the recent
//! orders listing. Orders are never updated or deleted. Unlike the cart,
//! storage failures here always surface - a checkout must not be reported
//! successful if its order did not land.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use neon_merch_core::{Order, OrderId, OrderSummary};

use super::{StoreError, write_json_atomic};

/// File-backed store for immutable orders.
pub struct OrderStore {
    orders_dir: PathBuf,
    /// Serializes read-modify-write of the history index.
    history_lock: Mutex<()>,
}

impl OrderStore {
    /// Create a store rooted at `<data_dir>/orders/`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            orders_dir: data_dir.join("orders"),
            history_lock: Mutex::new(()),
        }
    }

    fn order_path(&self, id: OrderId) -> PathBuf {
        self.orders_dir.join(format!("order_{id}.json"))
    }

    fn history_path(&self) -> PathBuf {
        self.orders_dir.join("order_history.json")
    }

    /// Durably persist one order and append it to the history index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on any storage failure; callers must treat a
    /// failed save as a failed checkout.
    pub async fn save(&self, order: &Order) -> Result<(), StoreError> {
        write_json_atomic(&self.order_path(order.id), order).await?;
        self.append_history(order.summary()).await?;

        tracing::info!(order_id = %order.id, total = order.total, "order persisted");
        Ok(())
    }

    /// Fetch an order by id, `None` if no such order was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record exists but cannot be read or
    /// decoded.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        match tokio::fs::read(&self.order_path(id)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The most recent `limit` order summaries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the history index cannot be read or decoded.
    pub async fn history(&self, limit: usize) -> Result<Vec<OrderSummary>, StoreError> {
        let mut history = self.read_history().await?;
        let skip = history.len().saturating_sub(limit);
        history.drain(..skip);
        history.reverse();
        Ok(history)
    }

    async fn append_history(&self, summary: OrderSummary) -> Result<(), StoreError> {
        let _guard = self.history_lock.lock().await;
        let mut history = self.read_history().await?;
        history.push(summary);
        write_json_atomic(&self.history_path(), &history).await
    }

    async fn read_history(&self) -> Result<Vec<OrderSummary>, StoreError> {
        match tokio::fs::read(self.history_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
