//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::SecretString;

use wishlist::CustomerLifecycleAdapter;

/// How long a processed delivery ID is remembered.
const DELIVERY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Upper bound on remembered delivery IDs.
const MAX_DELIVERIES: u64 = 100_000;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the lifecycle adapter, the webhook secret and the delivery cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    adapter: CustomerLifecycleAdapter,
    webhook_secret: SecretString,
    deliveries: Cache<String, ()>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `adapter` - Lifecycle adapter wired to the wishlist store
    /// * `webhook_secret` - Shared secret used to verify webhook signatures
    #[must_use]
    pub fn new(adapter: CustomerLifecycleAdapter, webhook_secret: SecretString) -> Self {
        let deliveries = Cache::builder()
            .max_capacity(MAX_DELIVERIES)
            .time_to_live(DELIVERY_TTL)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                adapter,
                webhook_secret,
                deliveries,
            }),
        }
    }

    /// Get a reference to the lifecycle adapter.
    #[must_use]
    pub fn adapter(&self) -> &CustomerLifecycleAdapter {
        &self.inner.adapter
    }

    /// Get a reference to the webhook signing secret.
    #[must_use]
    pub fn webhook_secret(&self) -> &SecretString {
        &self.inner.webhook_secret
    }

    /// Whether a delivery with this ID was already processed.
    #[must_use]
    pub fn is_processed(&self, delivery_id: &str) -> bool {
        self.inner.deliveries.contains_key(delivery_id)
    }

    /// Remember a successfully processed delivery.
    pub async fn mark_processed(&self, delivery_id: &str) {
        self.inner
            .deliveries
            .insert(delivery_id.to_owned(), ())
            .await;
    }
}
