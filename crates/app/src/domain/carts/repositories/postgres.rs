//! PostgreSQL Cart Store

use async_trait::async_trait;

use crate::{
    database::Db,
    domain::{
        carts::{
            models::{Cart, CartItem, CartStatus, CartUuid, NewCart, NewCartItem},
            repositories::{PgCartItemsRepository, PgCartsRepository},
            store::CartStore,
        },
        enrichment::models::UserUuid,
    },
};

/// Cart store backed by the `carts` and `cart_items` tables.
#[derive(Debug, Clone)]
pub struct PgCartStore {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartStore {
    /// Create a store over `db`.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let created = self.carts_repository.create_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_active_cart(&self, owner: UserUuid) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .get_active_cart(&mut tx, owner)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn update_status(
        &self,
        cart: CartUuid,
        status: CartStatus,
    ) -> Result<Cart, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .carts_repository
            .update_status(&mut tx, cart, status)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn create_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let created = self
            .items_repository
            .create_cart_item(&mut tx, cart, item)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_items(&self, cart: CartUuid) -> Result<Vec<CartItem>, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let items = self.items_repository.get_cart_items(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(items)
    }
}
