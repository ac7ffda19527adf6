//! Database operations for wishlist `PostgreSQL`.
//!
//! # Schema: `wishlist`
//!
//! ## Tables
//!
//! - `wishlist.wishlist` - One row per wishlist, indexed by `customer_id`
//! - `wishlist.wishlist_product` - Ordered product references
//!   (`ON DELETE CASCADE` from `wishlist`)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/wishlist/migrations/` and run via:
//! ```bash
//! cargo run -p wishlist-cli -- migrate
//! ```

pub mod wishlists;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::store::StoreError;

pub use wishlists::PgWishlistStore;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Run the embedded migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the history is inconsistent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Decode(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_) => Self::DataCorruption(err.to_string()),
            other => Self::Unavailable(Box::new(other)),
        }
    }
}
