//! Wishlist Core - Shared types library.
//!
//! This crate provides common types used across all wishlist components:
//! - `wishlist` - Wishlist model, store and lifecycle rules
//! - `server` - Webhook receiver for customer lifecycle notifications
//! - `cli` - Command-line tools for migrations and event replay
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and wishlist titles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
