//! Cart store seam.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::models::{Cart, CartItem, CartStatus, CartUuid, NewCart, NewCartItem},
    enrichment::models::UserUuid,
};

/// Errors raised by a [`CartStore`].
pub type StoreError = sqlx::Error;

/// Persistence for carts and their items.
///
/// Each call is atomic on its own. Nothing spans calls, so a lookup followed
/// by a write can interleave with other requests. Missing rows surface as
/// [`StoreError::RowNotFound`].
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Insert a new ACTIVE cart with no items.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, StoreError>;

    /// Fetch a cart header. `items` is always empty.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, StoreError>;

    /// Fetch the earliest created ACTIVE cart for an owner. `items` is always empty.
    async fn get_active_cart(&self, owner: UserUuid) -> Result<Cart, StoreError>;

    /// Overwrite a cart's status and return the updated header.
    async fn update_status(&self, cart: CartUuid, status: CartStatus)
    -> Result<Cart, StoreError>;

    /// Insert an item belonging to `cart`.
    async fn create_item(&self, cart: CartUuid, item: NewCartItem)
    -> Result<CartItem, StoreError>;

    /// All items of `cart` in insertion order. Unknown carts yield an empty list.
    async fn get_items(&self, cart: CartUuid) -> Result<Vec<CartItem>, StoreError>;
}
