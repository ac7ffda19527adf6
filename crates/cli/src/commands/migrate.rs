//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! wl-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `WISHLIST_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/wishlist/migrations/`.

use super::{CliError, connect};

/// Run wishlist database migrations.
pub async fn run() -> Result<(), CliError> {
    let pool = connect().await?;

    tracing::info!("Running wishlist migrations...");
    wishlist::db::run_migrations(&pool).await?;

    tracing::info!("Wishlist migrations complete!");
    Ok(())
}
