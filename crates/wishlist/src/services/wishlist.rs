//! Wishlist service.
//!
//! Holds the rules tying wishlists to customers:
//!
//! - `create_default_wishlist` builds and saves one new wishlist. It is not
//!   idempotent; callers invoke it once per customer.
//! - `delete_all_wishlists_for_customer` removes everything a customer owns
//!   in a single batch, and skips the store entirely when there is nothing
//!   to remove.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use wishlist_core::{CustomerId, WishlistTitle};

use super::observer::{ObserverError, WishlistObserver};
use crate::error::WishlistError;
use crate::models::Wishlist;
use crate::store::WishlistStore;

/// Wishlist business operations over an injected store.
#[derive(Clone)]
pub struct WishlistService {
    store: Arc<dyn WishlistStore>,
    observers: Vec<Arc<dyn WishlistObserver>>,
}

impl std::fmt::Debug for WishlistService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistService")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl WishlistService {
    /// Create a service with no observers.
    #[must_use]
    pub fn new(store: Arc<dyn WishlistStore>) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// Register an observer, builder style.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn WishlistObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Register an observer.
    pub fn register_observer(&mut self, observer: Arc<dyn WishlistObserver>) {
        self.observers.push(observer);
    }

    /// Get a reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn WishlistStore> {
        &self.store
    }

    /// Create and persist a new wishlist for a customer.
    ///
    /// Observers run before and after the save. Calling this twice for the
    /// same customer creates two wishlists.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Rejected` if an observer refuses the wishlist
    /// (nothing is saved), or `WishlistError::Store` if the save fails.
    #[instrument(skip_all, fields(customer_id = %customer_id, public = public))]
    pub async fn create_default_wishlist(
        &self,
        customer_id: CustomerId,
        title: &WishlistTitle,
        public: bool,
    ) -> Result<Wishlist, WishlistError> {
        let mut wishlist = Wishlist::new(customer_id, title.clone(), public);

        for observer in &self.observers {
            observer.before_create(&mut wishlist).inspect_err(|e| {
                warn!(reason = %e, "Observer rejected wishlist");
            })?;
        }

        if wishlist.owner != customer_id {
            return Err(ObserverError::new("observer changed the wishlist owner").into());
        }

        self.store.save(&wishlist).await?;

        for observer in &self.observers {
            observer.after_create(&wishlist);
        }

        info!(wishlist_id = %wishlist.id, public = wishlist.public, "Created wishlist");
        Ok(wishlist)
    }

    /// Delete every wishlist a customer owns.
    ///
    /// Returns the number of wishlists deleted. When the customer owns none,
    /// no write reaches the store.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Store` if the lookup or the batch delete fails.
    #[instrument(skip_all, fields(customer_id = %customer_id))]
    pub async fn delete_all_wishlists_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<usize, WishlistError> {
        let wishlists = self.store.find_by_owner(customer_id).await?;

        if wishlists.is_empty() {
            debug!("Customer owns no wishlists, nothing to delete");
            return Ok(0);
        }

        self.store.delete_all(&wishlists).await?;

        info!(count = wishlists.len(), "Deleted customer wishlists");
        Ok(wishlists.len())
    }

    /// All wishlists owned by a customer, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `WishlistError::Store` if the lookup fails.
    pub async fn wishlists_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Wishlist>, WishlistError> {
        Ok(self.store.find_by_owner(customer_id).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use mockall::predicate::eq;

    use super::*;
    use crate::store::{InMemoryWishlistStore, MockWishlistStore, StoreError};

    fn title(s: &str) -> WishlistTitle {
        WishlistTitle::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_default_wishlist() {
        let store = Arc::new(InMemoryWishlistStore::new());
        let service = WishlistService::new(store.clone());

        let created = service
            .create_default_wishlist(CustomerId::new(1), &title("My Wishlist"), false)
            .await
            .unwrap();

        let owned = store.find_by_owner(CustomerId::new(1)).await.unwrap();
        assert_eq!(owned, vec![created]);
        assert_eq!(owned[0].title.as_str(), "My Wishlist");
        assert!(!owned[0].public);
        assert!(owned[0].products().is_empty());
    }

    #[tokio::test]
    async fn test_create_twice_creates_two() {
        let store = Arc::new(InMemoryWishlistStore::new());
        let service = WishlistService::new(store.clone());

        for _ in 0..2 {
            service
                .create_default_wishlist(CustomerId::new(1), &title("My Wishlist"), true)
                .await
                .unwrap();
        }

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_without_wishlists_never_writes() {
        let mut store = MockWishlistStore::new();
        store
            .expect_find_by_owner()
            .with(eq(CustomerId::new(4)))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        store.expect_delete_all().times(0);
        store.expect_delete().times(0);
        store.expect_save().times(0);

        let service = WishlistService::new(Arc::new(store));
        let deleted = service
            .delete_all_wishlists_for_customer(CustomerId::new(4))
            .await
            .unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn test_delete_issues_one_batch() {
        let owner = CustomerId::new(2);
        let owned = vec![
            Wishlist::new(owner, title("w1"), false),
            Wishlist::new(owner, title("w2"), true),
        ];
        let expected_ids: Vec<_> = owned.iter().map(|w| w.id).collect();

        let mut store = MockWishlistStore::new();
        store
            .expect_find_by_owner()
            .returning(move |_| Ok(owned.clone()));
        store
            .expect_delete_all()
            .withf(move |batch: &[Wishlist]| {
                batch.iter().map(|w| w.id).collect::<Vec<_>>() == expected_ids
            })
            .times(1)
            .returning(|_| Ok(()));
        store.expect_delete().times(0);

        let service = WishlistService::new(Arc::new(store));
        let deleted = service
            .delete_all_wishlists_for_customer(owner)
            .await
            .unwrap();
        assert_eq!(deleted, 2);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockWishlistStore::new();
        store
            .expect_find_by_owner()
            .returning(|_| Err(StoreError::unavailable("connection reset")));
        store.expect_delete_all().times(0);

        let service = WishlistService::new(Arc::new(store));
        let err = service
            .delete_all_wishlists_for_customer(CustomerId::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, WishlistError::Store(StoreError::Unavailable(_))));
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl WishlistObserver for Recorder {
        fn before_create(&self, wishlist: &mut Wishlist) -> Result<(), ObserverError> {
            self.events
                .lock()
                .unwrap()
                .push(format!("before:{}", wishlist.title));
            Ok(())
        }

        fn after_create(&self, wishlist: &Wishlist) {
            self.events
                .lock()
                .unwrap()
                .push(format!("after:{}", wishlist.title));
        }
    }

    struct MakePublic;

    impl WishlistObserver for MakePublic {
        fn before_create(&self, wishlist: &mut Wishlist) -> Result<(), ObserverError> {
            wishlist.public = true;
            Ok(())
        }
    }

    struct Veto;

    impl WishlistObserver for Veto {
        fn before_create(&self, _wishlist: &mut Wishlist) -> Result<(), ObserverError> {
            Err(ObserverError::new("customer is blocked"))
        }
    }

    struct Hijack;

    impl WishlistObserver for Hijack {
        fn before_create(&self, wishlist: &mut Wishlist) -> Result<(), ObserverError> {
            wishlist.owner = CustomerId::new(999);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_observers_run_around_save() {
        let store = Arc::new(InMemoryWishlistStore::new());
        let recorder = Arc::new(Recorder::default());
        let service = WishlistService::new(store.clone())
            .with_observer(recorder.clone())
            .with_observer(Arc::new(MakePublic));

        let created = service
            .create_default_wishlist(CustomerId::new(1), &title("Gifts"), false)
            .await
            .unwrap();

        assert!(created.public);
        assert!(store.get(created.id).await.unwrap().public);
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec!["before:Gifts".to_owned(), "after:Gifts".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_observer_veto_skips_save() {
        let store = Arc::new(InMemoryWishlistStore::new());
        let recorder = Arc::new(Recorder::default());
        let mut service = WishlistService::new(store.clone());
        service.register_observer(Arc::new(Veto));
        service.register_observer(recorder.clone());

        let err = service
            .create_default_wishlist(CustomerId::new(1), &title("Gifts"), false)
            .await
            .unwrap_err();

        assert!(matches!(err, WishlistError::Rejected(_)));
        assert_eq!(store.save_calls(), 0);
        assert!(recorder.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_observer_cannot_change_owner() {
        let store = Arc::new(InMemoryWishlistStore::new());
        let service = WishlistService::new(store.clone()).with_observer(Arc::new(Hijack));

        let err = service
            .create_default_wishlist(CustomerId::new(1), &title("Gifts"), false)
            .await
            .unwrap_err();

        assert!(matches!(err, WishlistError::Rejected(_)));
        assert!(store.is_empty().await);
    }
}
