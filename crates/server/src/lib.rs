//! Wishlist server library.
//!
//! Receives customer lifecycle webhooks from the commerce platform and keeps
//! wishlists in step: a default wishlist for every new customer, none left
//! behind for a deleted one. Exposed as a library so the router can be
//! tested without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod webhook;

pub use routes::app;
pub use state::AppState;
