//! Wishlist settings loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WISHLIST_DEFAULT_PUBLIC` - Visibility of auto-created wishlists (default: false)
//! - `WISHLIST_LOCALE` - Locale for the default title (default: en)
//! - `WISHLIST_DEFAULT_TITLE` - Overrides the localized default title
//! - `WISHLIST_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

use secrecy::SecretString;
use thiserror::Error;

use wishlist_core::{TitleError, WishlistTitle};

use crate::translations;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid wishlist title in {0}: {1}")]
    InvalidTitle(String, TitleError),
}

/// Title and visibility given to the wishlist created for a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultWishlist {
    /// Title of the default wishlist.
    pub title: WishlistTitle,
    /// Whether the default wishlist is public.
    pub public: bool,
}

impl DefaultWishlist {
    /// Load defaults from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let public = match lookup("WISHLIST_DEFAULT_PUBLIC") {
            Some(value) => parse_bool("WISHLIST_DEFAULT_PUBLIC", &value)?,
            None => false,
        };

        let title = match lookup("WISHLIST_DEFAULT_TITLE") {
            Some(value) => WishlistTitle::parse(&value)
                .map_err(|e| ConfigError::InvalidTitle("WISHLIST_DEFAULT_TITLE".to_string(), e))?,
            None => {
                let locale = lookup("WISHLIST_LOCALE")
                    .unwrap_or_else(|| translations::FALLBACK_LOCALE.to_string());
                if !translations::is_supported(&locale) {
                    tracing::warn!(%locale, "No default title for locale, using fallback");
                }
                WishlistTitle::parse(translations::default_title(&locale))
                    .map_err(|e| ConfigError::InvalidTitle("WISHLIST_LOCALE".to_string(), e))?
            }
        };

        Ok(Self { title, public })
    }
}

/// Get database URL with fallback to generic `DATABASE_URL`.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if neither variable is set.
pub fn database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Parse a boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything else.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
