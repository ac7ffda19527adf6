//! Wishlist storage.
//!
//! [`WishlistStore`] is the seam between the service and persistence.
//! Implementations:
//!
//! - [`crate::db::PgWishlistStore`] - `PostgreSQL`, used in production
//! - [`InMemoryWishlistStore`] - process memory, used by tests and local runs

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use wishlist_core::CustomerId;

use crate::models::Wishlist;

pub use memory::InMemoryWishlistStore;

/// Boxed error source for backend failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or failed mid-operation.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] BoxError),

    /// Stored data could not be turned into a domain value.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl StoreError {
    /// Build an [`StoreError::Unavailable`] from a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into().into())
    }
}

/// Persistence for wishlists, keyed by owner.
///
/// No implementation retries; errors go straight back to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// Insert or update a wishlist. Saving the same ID twice leaves one record.
    async fn save(&self, wishlist: &Wishlist) -> Result<(), StoreError>;

    /// All wishlists owned by a customer, oldest first. Empty if none.
    async fn find_by_owner(&self, owner: CustomerId) -> Result<Vec<Wishlist>, StoreError>;

    /// Remove one wishlist. Removing a missing wishlist is not an error.
    async fn delete(&self, wishlist: &Wishlist) -> Result<(), StoreError>;

    /// Remove several wishlists at once. Either all are removed or an error
    /// is returned and none are.
    async fn delete_all(&self, wishlists: &[Wishlist]) -> Result<(), StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
