//! Business services for wishlists.

pub mod observer;
pub mod wishlist;

pub use observer::{ObserverError, WishlistObserver};
pub use wishlist::WishlistService;
