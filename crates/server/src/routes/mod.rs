//! HTTP route handlers for the wishlist server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (store reachable)
//!
//! # Customer lifecycle webhooks (signed)
//! POST /webhooks/customers/create   - Create the default wishlist
//! POST /webhooks/customers/delete   - Delete all of the customer's wishlists
//! ```

pub mod health;
pub mod webhooks;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the webhook routes router.
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/customers/create", post(webhooks::customer_created))
        .route("/customers/delete", post(webhooks::customer_deleted))
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/webhooks", webhook_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
