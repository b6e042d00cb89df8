//! In-memory Cart Store

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::domain::{
    carts::{
        models::{Cart, CartItem, CartStatus, CartUuid, NewCart, NewCartItem},
        store::CartStore,
    },
    enrichment::models::UserUuid,
};

/// Process-local cart store. Carts and items are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    carts: Vec<Cart>,
    items: Vec<CartItem>,
}

impl InMemoryCartStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, sqlx::Error> {
        let mut tables = self.tables.write().await;

        if tables.carts.iter().any(|existing| existing.uuid == cart.uuid) {
            return Err(sqlx::Error::Protocol(format!(
                "duplicate cart uuid {}",
                cart.uuid
            )));
        }

        let created = Cart {
            uuid: cart.uuid,
            owner_uuid: cart.owner_uuid,
            status: CartStatus::Active,
            items: Vec::new(),
            created_at: Timestamp::now(),
        };

        tables.carts.push(created.clone());

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, sqlx::Error> {
        self.tables
            .read()
            .await
            .carts
            .iter()
            .find(|existing| existing.uuid == cart)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn get_active_cart(&self, owner: UserUuid) -> Result<Cart, sqlx::Error> {
        self.tables
            .read()
            .await
            .carts
            .iter()
            .find(|existing| existing.owner_uuid == owner && existing.is_active())
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update_status(
        &self,
        cart: CartUuid,
        status: CartStatus,
    ) -> Result<Cart, sqlx::Error> {
        let mut tables = self.tables.write().await;

        let existing = tables
            .carts
            .iter_mut()
            .find(|existing| existing.uuid == cart)
            .ok_or(sqlx::Error::RowNotFound)?;

        existing.status = status;

        Ok(existing.clone())
    }

    async fn create_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, sqlx::Error> {
        let mut tables = self.tables.write().await;

        if !tables.carts.iter().any(|existing| existing.uuid == cart) {
            return Err(sqlx::Error::RowNotFound);
        }

        let created = CartItem {
            uuid: item.uuid,
            cart_uuid: cart,
            product_uuid: item.product_uuid,
            quantity: item.quantity,
            unit_price: item.unit_price,
            created_at: Timestamp::now(),
        };

        tables.items.push(created.clone());

        Ok(created)
    }

    async fn get_items(&self, cart: CartUuid) -> Result<Vec<CartItem>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .items
            .iter()
            .filter(|item| item.cart_uuid == cart)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::{carts::models::CartItemUuid, enrichment::models::ProductUuid};

    use super::*;

    #[tokio::test]
    async fn item_for_unknown_cart_is_row_not_found() {
        let result = InMemoryCartStore::new()
            .create_item(
                CartUuid::new(),
                NewCartItem {
                    uuid: CartItemUuid::new(),
                    product_uuid: ProductUuid::new(),
                    quantity: 1,
                    unit_price: Decimal::ONE,
                },
            )
            .await;

        assert!(
            matches!(result, Err(sqlx::Error::RowNotFound)),
            "expected RowNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn duplicate_cart_uuid_is_rejected() -> TestResult {
        let store = InMemoryCartStore::new();
        let cart = NewCart {
            uuid: CartUuid::new(),
            owner_uuid: UserUuid::new(),
        };

        store.create_cart(cart.clone()).await?;

        assert!(
            store.create_cart(cart).await.is_err(),
            "second insert with the same uuid should fail"
        );

        Ok(())
    }

    #[tokio::test]
    async fn items_are_scoped_to_their_cart() -> TestResult {
        let store = InMemoryCartStore::new();
        let owner_uuid = UserUuid::new();

        let a = store
            .create_cart(NewCart {
                uuid: CartUuid::new(),
                owner_uuid,
            })
            .await?;

        let b = store
            .create_cart(NewCart {
                uuid: CartUuid::new(),
                owner_uuid,
            })
            .await?;

        store
            .create_item(
                a.uuid,
                NewCartItem {
                    uuid: CartItemUuid::new(),
                    product_uuid: ProductUuid::new(),
                    quantity: 1,
                    unit_price: Decimal::ONE,
                },
            )
            .await?;

        assert_eq!(store.get_items(a.uuid).await?.len(), 1);
        assert!(store.get_items(b.uuid).await?.is_empty(), "other cart should be empty");

        Ok(())
    }
}
