//! Customer lifecycle commands.
//!
//! Replays the same handling the webhook server performs, for events the
//! server missed or for manual cleanup.

use std::sync::Arc;

use wishlist::{
    CustomerEvent, CustomerLifecycleAdapter, DefaultWishlist, LifecycleOutcome, PgWishlistStore,
    WishlistService,
};
use wishlist_core::CustomerId;

use super::{CliError, connect};

async fn adapter() -> Result<CustomerLifecycleAdapter, CliError> {
    let pool = connect().await?;
    let defaults = DefaultWishlist::from_env()?;
    let service = WishlistService::new(Arc::new(PgWishlistStore::new(pool)));
    Ok(CustomerLifecycleAdapter::new(service, defaults))
}

async fn replay(event: CustomerEvent) -> Result<(), CliError> {
    let adapter = adapter().await?;
    match adapter.handle(&event).await? {
        LifecycleOutcome::Created(wishlist) => {
            tracing::info!(
                "Created wishlist {} ({}) for customer {}",
                wishlist.id,
                wishlist.title,
                wishlist.owner
            );
        }
        LifecycleOutcome::Deleted { count } => {
            tracing::info!(
                "Deleted {} wishlist(s) for customer {}",
                count,
                event.customer_id()
            );
        }
    }
    Ok(())
}

/// Handle a customer creation by hand.
pub async fn created(customer_id: CustomerId) -> Result<(), CliError> {
    replay(CustomerEvent::Created { customer_id }).await
}

/// Handle a customer deletion by hand.
pub async fn deleted(customer_id: CustomerId) -> Result<(), CliError> {
    replay(CustomerEvent::Deleted { customer_id }).await
}

/// Print a customer's wishlists as pretty JSON on stdout.
pub async fn list(customer_id: CustomerId) -> Result<(), CliError> {
    let pool = connect().await?;
    let service = WishlistService::new(Arc::new(PgWishlistStore::new(pool)));

    let wishlists = service.wishlists_for_customer(customer_id).await?;
    let json = serde_json::to_string_pretty(&wishlists)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
