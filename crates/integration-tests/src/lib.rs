//! Integration tests for the wishlist service.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wishlist-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `lifecycle` - Customer create/delete flows through the adapter
//! - `webhooks` - Signed webhook deliveries through the HTTP router
//!
//! Both run against the in-memory store; no database or server is needed.
//! The helpers below wire the same components the server binary wires.

use std::sync::Arc;

use secrecy::SecretString;
use wishlist::{CustomerLifecycleAdapter, DefaultWishlist, InMemoryWishlistStore, WishlistService};
use wishlist_core::WishlistTitle;
use wishlist_server::AppState;

/// Webhook secret shared by the test router and the request signer.
pub const TEST_WEBHOOK_SECRET: &str = "kT9#vQ2!mX7@pL4$wZ8^rN1&";

/// Default wishlist settings used across tests.
///
/// # Panics
///
/// Never: the title is a valid literal.
#[must_use]
pub fn defaults(public: bool) -> DefaultWishlist {
    DefaultWishlist {
        title: WishlistTitle::parse("My Wishlist").expect("valid title"),
        public,
    }
}

/// An adapter over a fresh in-memory store, plus a handle to that store.
#[must_use]
pub fn adapter(public: bool) -> (CustomerLifecycleAdapter, Arc<InMemoryWishlistStore>) {
    let store = Arc::new(InMemoryWishlistStore::new());
    let service = WishlistService::new(store.clone());
    (CustomerLifecycleAdapter::new(service, defaults(public)), store)
}

/// Server state over a fresh in-memory store.
#[must_use]
pub fn app_state() -> (AppState, Arc<InMemoryWishlistStore>) {
    let (adapter, store) = adapter(false);
    let state = AppState::new(adapter, SecretString::from(TEST_WEBHOOK_SECRET));
    (state, store)
}
