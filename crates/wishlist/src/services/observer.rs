//! Creation observers.
//!
//! Observers are registered on [`super::WishlistService`] and run
//! synchronously, in registration order, around persistence of a new
//! wishlist:
//!
//! 1. `before_create` for every observer (may adjust the wishlist or refuse it)
//! 2. The wishlist is saved
//! 3. `after_create` for every observer

use thiserror::Error;

use crate::models::Wishlist;

/// Reason an observer refused a new wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ObserverError {
    reason: String,
}

impl ObserverError {
    /// Create an error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason given by the observer.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Hook invoked around wishlist creation.
///
/// Both methods default to doing nothing, so implementors only override the
/// side they care about.
pub trait WishlistObserver: Send + Sync {
    /// Called before the wishlist is saved.
    ///
    /// # Errors
    ///
    /// Returning an error aborts creation; nothing is persisted.
    fn before_create(&self, wishlist: &mut Wishlist) -> Result<(), ObserverError> {
        let _ = wishlist;
        Ok(())
    }

    /// Called after the wishlist was saved.
    fn after_create(&self, wishlist: &Wishlist) {
        let _ = wishlist;
    }
}
