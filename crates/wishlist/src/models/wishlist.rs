//! Wishlist domain type.
//!
//! Separate from database row types; rows are converted in [`crate::db`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wishlist_core::{CustomerId, ProductId, WishlistId, WishlistTitle};

/// A named collection of products owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    /// Unique wishlist ID.
    pub id: WishlistId,
    /// Display title.
    pub title: WishlistTitle,
    /// Customer who owns this wishlist.
    pub owner: CustomerId,
    /// Whether other shoppers may view this wishlist.
    pub public: bool,
    /// Products in insertion order, without duplicates.
    products: Vec<ProductId>,
    /// When the wishlist was created.
    pub created_at: DateTime<Utc>,
}

impl Wishlist {
    /// Create a new, empty wishlist with a fresh ID.
    #[must_use]
    pub fn new(owner: CustomerId, title: WishlistTitle, public: bool) -> Self {
        Self {
            id: WishlistId::generate(),
            title,
            owner,
            public,
            products: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a wishlist from stored values.
    ///
    /// Duplicate product references are dropped, keeping the first occurrence.
    #[must_use]
    pub fn restore(
        id: WishlistId,
        owner: CustomerId,
        title: WishlistTitle,
        public: bool,
        products: impl IntoIterator<Item = ProductId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut wishlist = Self {
            id,
            title,
            owner,
            public,
            products: Vec::new(),
            created_at,
        };
        for product in products {
            wishlist.add_product(product);
        }
        wishlist
    }

    /// Products in the order they were added.
    #[must_use]
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Whether the product is in this wishlist.
    #[must_use]
    pub fn contains(&self, product: ProductId) -> bool {
        self.products.contains(&product)
    }

    /// Append a product. Returns `false` if it was already present.
    pub fn add_product(&mut self, product: ProductId) -> bool {
        if self.contains(product) {
            return false;
        }
        self.products.push(product);
        true
    }

    /// Remove a product. Returns `false` if it was not present.
    pub fn remove_product(&mut self, product: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| *p != product);
        self.products.len() != before
    }
}
