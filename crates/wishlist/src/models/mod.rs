//! Domain models for the wishlist service.

pub mod wishlist;

pub use wishlist::Wishlist;
