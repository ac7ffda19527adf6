//! Wishlist library.
//!
//! Customers own named collections of products. This crate holds the rules
//! tying those collections to the customer lifecycle:
//!
//! - A default wishlist is created when a customer account is created
//! - Every wishlist a customer owns is deleted when the account is deleted
//!
//! # Modules
//!
//! - [`models`] - The `Wishlist` domain type
//! - [`store`] - Storage trait and the in-memory implementation
//! - [`db`] - `PostgreSQL` implementation of the store
//! - [`services`] - Wishlist service and creation observers
//! - [`lifecycle`] - Adapter from customer lifecycle events to the service
//! - [`config`] - Defaults for auto-created wishlists, loaded from the environment
//! - [`translations`] - Localized default titles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod services;
pub mod store;
pub mod translations;

pub use config::{ConfigError, DefaultWishlist};
pub use db::PgWishlistStore;
pub use error::WishlistError;
pub use lifecycle::{CustomerEvent, CustomerLifecycleAdapter, LifecycleOutcome};
pub use models::Wishlist;
pub use services::{ObserverError, WishlistObserver, WishlistService};
pub use store::{InMemoryWishlistStore, StoreError, WishlistStore};
