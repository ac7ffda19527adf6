//! Command implementations.

pub mod customer;
pub mod migrate;

use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] wishlist::ConfigError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Wishlist(#[from] wishlist::WishlistError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Connect to the wishlist database named by `WISHLIST_DATABASE_URL`.
async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = wishlist::config::database_url("WISHLIST_DATABASE_URL")?;

    tracing::info!("Connecting to wishlist database...");
    Ok(wishlist::db::create_pool(&database_url).await?)
}
