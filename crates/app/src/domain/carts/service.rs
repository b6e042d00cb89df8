//! Carts Service

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, CartItem, CartStatus, CartUuid, NewCart, NewCartItem},
        store::CartStore,
        validation::{validate_cart_total, validate_new_item},
    },
    enrichment::models::UserUuid,
};

/// Cart lifecycle rules on top of any [`CartStore`].
#[derive(Clone)]
pub struct DefaultCartsService {
    store: Arc<dyn CartStore>,
}

impl std::fmt::Debug for DefaultCartsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultCartsService").finish_non_exhaustive()
    }
}

impl DefaultCartsService {
    /// Build the service on top of `store`.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }

    async fn with_items(&self, mut cart: Cart) -> Result<Cart, CartsServiceError> {
        let items = self.store.get_items(cart.uuid).await?;

        cart.items.extend(items);

        Ok(cart)
    }
}

#[async_trait]
impl CartsService for DefaultCartsService {
    #[tracing::instrument(
        name = "carts.service.create_cart",
        skip(self, cart),
        fields(cart_uuid = %cart.uuid, owner_uuid = %cart.owner_uuid),
        err
    )]
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        let created = self.store.create_cart(cart).await?;

        info!(cart_uuid = %created.uuid, "created cart");

        Ok(created)
    }

    #[tracing::instrument(name = "carts.service.get_cart", skip(self), fields(cart_uuid = %cart), err)]
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let cart = self.store.get_cart(cart).await?;

        self.with_items(cart).await
    }

    #[tracing::instrument(
        name = "carts.service.get_active_cart",
        skip(self),
        fields(owner_uuid = %owner),
        err
    )]
    async fn get_active_cart(&self, owner: UserUuid) -> Result<Cart, CartsServiceError> {
        let cart = self.store.get_active_cart(owner).await?;

        self.with_items(cart).await
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(cart_uuid = %cart, product_uuid = %item.product_uuid),
        err
    )]
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItem, CartsServiceError> {
        let existing = self.store.get_cart(cart).await?;

        if !existing.is_active() {
            return Err(CartsServiceError::InvalidState(existing.status));
        }

        validate_new_item(&item)?;

        let existing = self.with_items(existing).await?;

        validate_cart_total(&existing, &item)?;

        let created = self.store.create_item(cart, item).await?;

        info!(item_uuid = %created.uuid, "added item to cart");

        Ok(created)
    }

    #[tracing::instrument(name = "carts.service.list_items", skip(self), fields(cart_uuid = %cart), err)]
    async fn list_items(&self, cart: CartUuid) -> Result<Vec<CartItem>, CartsServiceError> {
        Ok(self.store.get_items(cart).await?)
    }

    #[tracing::instrument(
        name = "carts.service.complete_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn complete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let existing = self.store.get_cart(cart).await?;

        // A completed cart is written again as COMPLETED rather than rejected.
        self.store
            .update_status(existing.uuid, CartStatus::Completed)
            .await?;

        info!("completed cart");

        Ok(())
    }
}

/// Cart lifecycle operations.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Open a new ACTIVE cart with no items.
    ///
    /// Other ACTIVE carts of the same owner are left untouched, so an owner
    /// may hold more than one.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Retrieve a cart together with its items.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Retrieve the owner's ACTIVE cart with its items.
    ///
    /// When several are ACTIVE the earliest created one is returned.
    async fn get_active_cart(&self, owner: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Add an item to an ACTIVE cart.
    ///
    /// The cart is checked before the item, so a completed cart reports
    /// [`CartsServiceError::InvalidState`] even for an out-of-range item.
    async fn add_item(&self, cart: CartUuid, item: NewCartItem)
    -> Result<CartItem, CartsServiceError>;

    /// Items of a cart in insertion order. Unknown carts have no items.
    async fn list_items(&self, cart: CartUuid) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Mark a cart COMPLETED. Completing it again succeeds.
    async fn complete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;
}
