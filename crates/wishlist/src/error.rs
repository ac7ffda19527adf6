//! Errors returned by the wishlist service and lifecycle adapter.

use thiserror::Error;

use crate::services::ObserverError;
use crate::store::StoreError;

/// Errors from wishlist operations.
///
/// Store errors pass through unchanged; retrying is up to the caller.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A creation observer refused the new wishlist. Nothing was persisted.
    #[error("wishlist creation rejected: {0}")]
    Rejected(#[from] ObserverError),
}

impl WishlistError {
    /// Whether retrying the same operation later may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Store(StoreError::Unavailable(_)))
    }
}
