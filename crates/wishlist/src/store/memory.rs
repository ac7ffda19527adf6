//! In-memory wishlist store.
//!
//! Keeps records in a `BTreeMap` behind a `tokio` lock and counts every write
//! call, so tests can assert how the service touched storage. Can be flipped
//! into an unavailable state to exercise failure paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use wishlist_core::{CustomerId, WishlistId};

use super::{StoreError, WishlistStore};
use crate::models::Wishlist;

/// Wishlist store backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryWishlistStore {
    records: RwLock<BTreeMap<WishlistId, Wishlist>>,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    delete_all_calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryWishlistStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `save` calls issued so far.
    #[must_use]
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Number of `delete` calls issued so far.
    #[must_use]
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Number of `delete_all` calls issued so far.
    #[must_use]
    pub fn delete_all_calls(&self) -> usize {
        self.delete_all_calls.load(Ordering::SeqCst)
    }

    /// Total number of write calls of any kind.
    #[must_use]
    pub fn write_calls(&self) -> usize {
        self.save_calls() + self.delete_calls() + self.delete_all_calls()
    }

    /// Number of stored wishlists.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no wishlists.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Look up a wishlist by ID.
    pub async fn get(&self, id: WishlistId) -> Option<Wishlist> {
        self.records.read().await.get(&id).cloned()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("in-memory store marked unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl WishlistStore for InMemoryWishlistStore {
    async fn save(&self, wishlist: &Wishlist) -> Result<(), StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        self.records
            .write()
            .await
            .insert(wishlist.id, wishlist.clone());
        Ok(())
    }

    async fn find_by_owner(&self, owner: CustomerId) -> Result<Vec<Wishlist>, StoreError> {
        self.check_available()?;

        let mut owned: Vec<Wishlist> = self
            .records
            .read()
            .await
            .values()
            .filter(|w| w.owner == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn delete(&self, wishlist: &Wishlist) -> Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        self.records.write().await.remove(&wishlist.id);
        Ok(())
    }

    async fn delete_all(&self, wishlists: &[Wishlist]) -> Result<(), StoreError> {
        self.delete_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        // One lock for the whole batch, so readers never see a partial cascade
        let mut records = self.records.write().await;
        for wishlist in wishlists {
            records.remove(&wishlist.id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wishlist_core::WishlistTitle;

    use super::*;

    fn wishlist(owner: i64, title: &str) -> Wishlist {
        Wishlist::new(
            CustomerId::new(owner),
            WishlistTitle::parse(title).unwrap(),
            false,
        )
    }

    #[tokio::test]
    async fn test_save_is_idempotent_on_id() {
        let store = InMemoryWishlistStore::new();
        let mut w = wishlist(1, "Gifts");
        store.save(&w).await.unwrap();
        w.public = true;
        store.save(&w).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.get(w.id).await.unwrap().public);
        assert_eq!(store.save_calls(), 2);
    }

    #[tokio::test]
    async fn test_find_by_owner_filters_and_orders() {
        let store = InMemoryWishlistStore::new();
        let first = wishlist(1, "First");
        let other = wishlist(2, "Other");
        let mut second = wishlist(1, "Second");
        second.created_at = first.created_at + chrono::Duration::seconds(1);
        for w in [&first, &other, &second] {
            store.save(w).await.unwrap();
        }

        let owned = store.find_by_owner(CustomerId::new(1)).await.unwrap();
        let titles: Vec<&str> = owned.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
        assert!(
            store
                .find_by_owner(CustomerId::new(3))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let store = InMemoryWishlistStore::new();
        store.delete(&wishlist(1, "Ghost")).await.unwrap();
        assert_eq!(store.delete_calls(), 1);
    }

    #[tokio::test]
    async fn test_delete_all_removes_batch() {
        let store = InMemoryWishlistStore::new();
        let a = wishlist(1, "A");
        let b = wishlist(1, "B");
        let keep = wishlist(2, "Keep");
        for w in [&a, &b, &keep] {
            store.save(w).await.unwrap();
        }

        store.delete_all(&[a, b]).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert!(store.get(keep.id).await.is_some());
        assert_eq!(store.delete_all_calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_without_changes() {
        let store = InMemoryWishlistStore::new();
        let w = wishlist(1, "A");
        store.save(&w).await.unwrap();
        store.set_unavailable(true);

        assert!(matches!(
            store.delete_all(std::slice::from_ref(&w)).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.ping().await.is_err());

        store.set_unavailable(false);
        assert_eq!(store.len().await, 1);
    }
}
