//! Wishlist repository backed by `PostgreSQL`.
//!
//! Queries are checked at runtime (`sqlx::query_as`) so the crate builds
//! without a live database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use wishlist_core::{CustomerId, ProductId, WishlistId, WishlistTitle};

use crate::models::Wishlist;
use crate::store::{StoreError, WishlistStore};

/// Row shape returned by wishlist queries.
#[derive(Debug, sqlx::FromRow)]
struct WishlistRow {
    id: Uuid,
    customer_id: i64,
    title: String,
    is_public: bool,
    created_at: DateTime<Utc>,
    product_ids: Vec<i64>,
}

impl TryFrom<WishlistRow> for Wishlist {
    type Error = StoreError;

    fn try_from(row: WishlistRow) -> Result<Self, Self::Error> {
        let title = WishlistTitle::parse(&row.title).map_err(|e| {
            StoreError::DataCorruption(format!("invalid title for wishlist {}: {e}", row.id))
        })?;

        Ok(Self::restore(
            WishlistId::from_uuid(row.id),
            CustomerId::new(row.customer_id),
            title,
            row.is_public,
            row.product_ids.into_iter().map(ProductId::new),
            row.created_at,
        ))
    }
}

/// Wishlist store over a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgWishlistStore {
    pool: PgPool,
}

impl PgWishlistStore {
    /// Create a new store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl WishlistStore for PgWishlistStore {
    async fn save(&self, wishlist: &Wishlist) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r"
            INSERT INTO wishlist.wishlist (id, customer_id, title, is_public, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET customer_id = EXCLUDED.customer_id,
                title = EXCLUDED.title,
                is_public = EXCLUDED.is_public,
                updated_at = NOW()
            ",
        )
        .bind(wishlist.id)
        .bind(wishlist.owner)
        .bind(&wishlist.title)
        .bind(wishlist.public)
        .bind(wishlist.created_at)
        .execute(&mut *tx)
        .await?;

        // Product references are replaced as a whole
        sqlx::query("DELETE FROM wishlist.wishlist_product WHERE wishlist_id = $1")
            .bind(wishlist.id)
            .execute(&mut *tx)
            .await?;

        if !wishlist.products().is_empty() {
            let product_ids: Vec<i64> = wishlist.products().iter().map(ProductId::as_i64).collect();

            sqlx::query(
                r"
                INSERT INTO wishlist.wishlist_product (wishlist_id, product_id, position)
                SELECT $1, t.product_id, (t.ordinality - 1)::INTEGER
                FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(product_id, ordinality)
                ",
            )
            .bind(wishlist.id)
            .bind(&product_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_owner(&self, owner: CustomerId) -> Result<Vec<Wishlist>, StoreError> {
        let rows = sqlx::query_as::<_, WishlistRow>(
            r"
            SELECT w.id, w.customer_id, w.title, w.is_public, w.created_at,
                   COALESCE(
                       ARRAY_AGG(p.product_id ORDER BY p.position)
                           FILTER (WHERE p.product_id IS NOT NULL),
                       '{}'
                   ) AS product_ids
            FROM wishlist.wishlist w
            LEFT JOIN wishlist.wishlist_product p ON p.wishlist_id = w.id
            WHERE w.customer_id = $1
            GROUP BY w.id
            ORDER BY w.created_at ASC, w.id ASC
            ",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Wishlist::try_from).collect()
    }

    async fn delete(&self, wishlist: &Wishlist) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM wishlist.wishlist WHERE id = $1")
            .bind(wishlist.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self, wishlists: &[Wishlist]) -> Result<(), StoreError> {
        let ids: Vec<Uuid> = wishlists.iter().map(|w| w.id.as_uuid()).collect();

        // Single statement; product rows follow through ON DELETE CASCADE
        sqlx::query("DELETE FROM wishlist.wishlist WHERE id = ANY($1)")
            .bind(&ids)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(title: &str, product_ids: Vec<i64>) -> WishlistRow {
        WishlistRow {
            id: Uuid::new_v4(),
            customer_id: 9,
            title: title.to_owned(),
            is_public: true,
            created_at: Utc::now(),
            product_ids,
        }
    }

    #[test]
    fn test_row_conversion() {
        let r = row("Holiday", vec![4, 2]);
        let id = r.id;
        let wishlist = Wishlist::try_from(r).unwrap();
        assert_eq!(wishlist.id.as_uuid(), id);
        assert_eq!(wishlist.owner, CustomerId::new(9));
        assert_eq!(wishlist.title.as_str(), "Holiday");
        assert!(wishlist.public);
        assert_eq!(wishlist.products(), &[ProductId::new(4), ProductId::new(2)]);
    }

    #[test]
    fn test_row_with_blank_title_is_corruption() {
        let result = Wishlist::try_from(row("  ", vec![]));
        assert!(matches!(result, Err(StoreError::DataCorruption(_))));
    }

    // =========================================================================
    // Database round trips (need DATABASE_URL; run with --ignored)
    // =========================================================================

    fn new_wishlist(owner: i64, title: &str) -> Wishlist {
        Wishlist::new(
            CustomerId::new(owner),
            WishlistTitle::parse(title).unwrap(),
            false,
        )
    }

    async fn product_rows(pool: &PgPool) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wishlist.wishlist_product")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_save_keeps_product_order_and_upserts(pool: PgPool) {
        let store = PgWishlistStore::new(pool);
        let mut wishlist = new_wishlist(1, "Holiday");
        wishlist.add_product(ProductId::new(30));
        wishlist.add_product(ProductId::new(10));
        wishlist.add_product(ProductId::new(20));
        store.save(&wishlist).await.unwrap();

        wishlist.remove_product(ProductId::new(10));
        wishlist.title = WishlistTitle::parse("Birthday").unwrap();
        store.save(&wishlist).await.unwrap();

        let found = store.find_by_owner(CustomerId::new(1)).await.unwrap();
        assert_eq!(found.len(), 1);
        let stored = found.first().unwrap();
        assert_eq!(stored.id, wishlist.id);
        assert_eq!(stored.title.as_str(), "Birthday");
        assert_eq!(stored.products(), &[ProductId::new(30), ProductId::new(20)]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_find_by_owner_filters_and_orders(pool: PgPool) {
        let store = PgWishlistStore::new(pool);
        let first = new_wishlist(1, "First");
        let mut second = new_wishlist(1, "Second");
        second.created_at = first.created_at + chrono::Duration::seconds(1);
        store.save(&second).await.unwrap();
        store.save(&first).await.unwrap();
        store.save(&new_wishlist(2, "Other")).await.unwrap();

        let found = store.find_by_owner(CustomerId::new(1)).await.unwrap();
        let ids: Vec<_> = found.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(found.iter().all(|w| w.products().is_empty()));
        assert!(store.find_by_owner(CustomerId::new(3)).await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "Requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_delete_all_cascades_products(pool: PgPool) {
        let store = PgWishlistStore::new(pool.clone());
        let mut wishlists = Vec::new();
        for title in ["One", "Two"] {
            let mut wishlist = new_wishlist(1, title);
            wishlist.add_product(ProductId::new(5));
            store.save(&wishlist).await.unwrap();
            wishlists.push(wishlist);
        }
        let kept = new_wishlist(2, "Kept");
        store.save(&kept).await.unwrap();
        assert_eq!(product_rows(&pool).await, 2);

        store.delete_all(&wishlists).await.unwrap();

        assert!(store.find_by_owner(CustomerId::new(1)).await.unwrap().is_empty());
        let remaining = store.find_by_owner(CustomerId::new(2)).await.unwrap();
        assert_eq!(remaining.iter().map(|w| w.id).collect::<Vec<_>>(), vec![kept.id]);
        assert_eq!(product_rows(&pool).await, 0);
        store.ping().await.unwrap();
    }
}
