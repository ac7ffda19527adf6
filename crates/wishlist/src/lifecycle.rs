//! Customer lifecycle adapter.
//!
//! Translates notifications from the customer-management side into
//! [`WishlistService`] calls:
//!
//! ```text
//! CustomerEvent::Created { customer_id } -> create_default_wishlist(defaults)
//! CustomerEvent::Deleted { customer_id } -> delete_all_wishlists_for_customer
//! ```
//!
//! Errors are returned as-is. Whether a failure is retried, logged and
//! dropped, or fails the surrounding request is up to the host.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use wishlist_core::CustomerId;

use crate::config::DefaultWishlist;
use crate::error::WishlistError;
use crate::models::Wishlist;
use crate::services::WishlistService;

/// A change in a customer account's existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomerEvent {
    /// A customer account was created.
    Created { customer_id: CustomerId },
    /// A customer account was deleted.
    Deleted { customer_id: CustomerId },
}

impl CustomerEvent {
    /// The customer the event is about.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        match self {
            Self::Created { customer_id } | Self::Deleted { customer_id } => *customer_id,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "customer_created",
            Self::Deleted { .. } => "customer_deleted",
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// The default wishlist that was created.
    Created(Wishlist),
    /// Number of wishlists removed (zero if the customer owned none).
    Deleted { count: usize },
}

/// Feeds customer lifecycle events to the wishlist service.
#[derive(Debug, Clone)]
pub struct CustomerLifecycleAdapter {
    service: WishlistService,
    defaults: DefaultWishlist,
}

impl CustomerLifecycleAdapter {
    /// Create an adapter that creates default wishlists with `defaults`.
    #[must_use]
    pub const fn new(service: WishlistService, defaults: DefaultWishlist) -> Self {
        Self { service, defaults }
    }

    /// Get a reference to the wrapped service.
    #[must_use]
    pub const fn service(&self) -> &WishlistService {
        &self.service
    }

    /// Get a reference to the default wishlist settings.
    #[must_use]
    pub const fn defaults(&self) -> &DefaultWishlist {
        &self.defaults
    }

    /// Handle one lifecycle event.
    ///
    /// # Errors
    ///
    /// Returns whatever the service returned.
    #[instrument(skip_all, fields(event = event.kind(), customer_id = %event.customer_id()))]
    pub async fn handle(&self, event: &CustomerEvent) -> Result<LifecycleOutcome, WishlistError> {
        match *event {
            CustomerEvent::Created { customer_id } => self
                .on_customer_created(customer_id)
                .await
                .map(LifecycleOutcome::Created),
            CustomerEvent::Deleted { customer_id } => self
                .on_customer_deleted(customer_id)
                .await
                .map(|count| LifecycleOutcome::Deleted { count }),
        }
    }

    /// Create the default wishlist for a new customer.
    ///
    /// # Errors
    ///
    /// Returns whatever the service returned.
    pub async fn on_customer_created(
        &self,
        customer_id: CustomerId,
    ) -> Result<Wishlist, WishlistError> {
        let wishlist = self
            .service
            .create_default_wishlist(customer_id, &self.defaults.title, self.defaults.public)
            .await?;
        info!(wishlist_id = %wishlist.id, "Default wishlist ready");
        Ok(wishlist)
    }

    /// Remove every wishlist of a deleted customer.
    ///
    /// # Errors
    ///
    /// Returns whatever the service returned.
    pub async fn on_customer_deleted(&self, customer_id: CustomerId) -> Result<usize, WishlistError> {
        self.service
            .delete_all_wishlists_for_customer(customer_id)
            .await
    }
}
