//! Durable store for the single shared cart.
//!
//! The whole system models one global cart (no per-user partitioning), so
//! the store serializes every load-modify-persist cycle behind one async
//! mutex. Concurrent `add_item` / `remove_item` / checkout calls can race on
//! the HTTP side, but their read-modify-write halves never interleave.
//!
//! Reads are deliberately fail-open: a missing, unreadable, or corrupt cart
//! file loads as a fresh empty cart so a UI client always gets something
//! usable. Write failures, by contrast, surface as [`StoreError`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use neon_merch_core::{Cart, ProductId};

use super::{StoreError, write_json_atomic};
use crate::catalog::Catalog;

/// Errors from cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id does not resolve in the catalog.
    #[error("product not found: {0}")]
    UnknownProduct(ProductId),

    /// Persisting the updated cart failed; the previous state is intact.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// File-backed store for the shared cart.
pub struct CartStore {
    path: PathBuf,
    catalog: Arc<Catalog>,
    lock: Mutex<()>,
}

impl CartStore {
    /// Create a store rooted at `<data_dir>/cart.json`.
    #[must_use]
    pub fn new(data_dir: &Path, catalog: Arc<Catalog>) -> Self {
        Self {
            path: data_dir.join("cart.json"),
            catalog,
            lock: Mutex::new(()),
        }
    }

    /// Enter the cart critical section.
    ///
    /// The returned transaction holds the cart mutex until dropped; the
    /// checkout engine uses this to keep its load -> persist-order -> clear
    /// sequence free of interleaved cart mutations.
    pub async fn begin(&self) -> CartTxn<'_> {
        CartTxn {
            store: self,
            _guard: self.lock.lock().await,
        }
    }

    /// Load the persisted cart, or an empty cart when none exists.
    ///
    /// Pure read; consistent without the lock because writes land via
    /// atomic rename.
    pub async fn load(&self) -> Cart {
        self.read_current().await
    }

    /// Add `quantity` units of a product to the cart, merging into an
    /// existing `(product_id, size)` line item when present.
    ///
    /// # Errors
    ///
    /// `CartError::UnknownProduct` if the id is not in the catalog (the cart
    /// is untouched); `CartError::Store` if persisting fails.
    pub async fn add_item(
        &self,
        product_id: &ProductId,
        quantity: u32,
        size: Option<String>,
    ) -> Result<Cart, CartError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.clone()))?
            .clone();

        let txn = self.begin().await;
        let mut cart = txn.load().await;
        cart.add_line(&product, quantity, size);
        txn.persist(&cart).await?;

        tracing::debug!(product_id = %product_id, quantity, total = cart.total, "cart item added");
        Ok(cart)
    }

    /// Remove every line item for a product id (all size variants).
    ///
    /// Removing an absent product persists and returns the unchanged cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, StoreError> {
        let txn = self.begin().await;
        let mut cart = txn.load().await;
        let removed = cart.remove_product(product_id);
        txn.persist(&cart).await?;

        tracing::debug!(product_id = %product_id, removed, total = cart.total, "cart items removed");
        Ok(cart)
    }

    /// Reset the cart to empty and persist it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub async fn clear(&self) -> Result<Cart, StoreError> {
        self.begin().await.clear().await
    }

    /// Fail-open read of the current cart file.
    async fn read_current(&self) -> Cart {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "cart state is corrupt, substituting an empty cart");
                    Cart::empty()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Cart::empty(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read cart state, substituting an empty cart");
                Cart::empty()
            }
        }
    }
}

/// An exclusive hold on the cart resource.
///
/// All mutating cart operations run inside one of these, as does checkout.
pub struct CartTxn<'a> {
    store: &'a CartStore,
    _guard: MutexGuard<'a, ()>,
}

impl CartTxn<'_> {
    /// Load the cart while holding the critical section.
    pub async fn load(&self) -> Cart {
        self.store.read_current().await
    }

    /// Persist the full cart state atomically.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the filesystem write fails.
    pub async fn persist(&self, cart: &Cart) -> Result<(), StoreError> {
        write_json_atomic(&self.store.path, cart).await
    }

    /// Persist an empty cart, returning it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub async fn clear(&self) -> Result<Cart, StoreError> {
        let cart = Cart::empty();
        self.persist(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> CartStore {
        CartStore::new(dir.path(), Arc::new(Catalog::seed()))
    }

    #[tokio::test]
    async fn load_without_state_returns_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let cart = store(&dir).load().await;
        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);
    }

    #[tokio::test]
    async fn add_item_persists_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let cart = store(&dir)
            .add_item(&ProductId::new("mug-001"), 1, None)
            .await
            .unwrap();
        assert_eq!(cart.total, 899);

        // A fresh store over the same directory sees the persisted state.
        let reloaded = store(&dir).load().await;
        assert_eq!(reloaded, cart);
    }

    #[tokio::test]
    async fn add_item_merges_matching_product_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let cart_store = store(&dir);
        let id = ProductId::new("mug-001");

        cart_store.add_item(&id, 1, None).await.unwrap();
        let cart = cart_store.add_item(&id, 2, None).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().unwrap().quantity, 3);
        assert_eq!(cart.total, 2697);
    }

    #[tokio::test]
    async fn add_unknown_product_fails_and_leaves_cart_alone() {
        let dir = tempfile::tempdir().unwrap();
        let cart_store = store(&dir);
        cart_store
            .add_item(&ProductId::new("mug-001"), 1, None)
            .await
            .unwrap();

        let err = cart_store
            .add_item(&ProductId::new("xyz"), 1, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::UnknownProduct(_)));

        let cart = cart_store.load().await;
        assert_eq!(cart.total, 899);
    }

    #[tokio::test]
    async fn remove_item_drops_all_size_variants() {
        let dir = tempfile::tempdir().unwrap();
        let cart_store = store(&dir);
        let shirt = ProductId::new("tshirt-001");

        cart_store
            .add_item(&shirt, 1, Some("M".to_string()))
            .await
            .unwrap();
        cart_store
            .add_item(&shirt, 1, Some("L".to_string()))
            .await
            .unwrap();
        cart_store
            .add_item(&ProductId::new("cap-001"), 1, None)
            .await
            .unwrap();

        let cart = cart_store.remove_item(&shirt).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, 499);
    }

    #[tokio::test]
    async fn remove_of_absent_product_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let cart = store(&dir)
            .remove_item(&ProductId::new("mug-001"))
            .await
            .unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn corrupt_cart_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("cart.json"), b"{not json")
            .await
            .unwrap();

        let cart = store(&dir).load().await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn clear_resets_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let cart_store = store(&dir);
        cart_store
            .add_item(&ProductId::new("bag-001"), 2, None)
            .await
            .unwrap();

        let cart = cart_store.clear().await.unwrap();
        assert!(cart.is_empty());
        assert!(store(&dir).load().await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_adds_do_not_lose_updates() {
        let dir = tempfile::tempdir().unwrap();
        let cart_store = Arc::new(store(&dir));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let cart_store = Arc::clone(&cart_store);
            handles.push(tokio::spawn(async move {
                cart_store
                    .add_item(&ProductId::new("mug-001"), 1, None)
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let cart = cart_store.load().await;
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().unwrap().quantity, 16);
        assert_eq!(cart.total, 899 * 16);
    }
}
