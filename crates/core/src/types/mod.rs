//! Core types for the wishlist service.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod title;

pub use id::*;
pub use title::{TitleError, WishlistTitle};
