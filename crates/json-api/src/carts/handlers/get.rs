//! Get Cart Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use storefront_app::domain::carts::models::{Cart, CartItem};

use crate::{carts::errors::into_status_error, extensions::*};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The user owning the cart
    pub owner_uuid: Uuid,

    /// `ACTIVE`, `COMPLETED` or `CANCELLED`
    pub status: String,

    /// The items in the cart, oldest first
    pub items: Vec<CartItemResponse>,

    /// Sum of item subtotals as a decimal string
    pub total: String,

    /// The date and time the cart was created
    pub created_at: String,
}

/// A stored amount whose subtotal or total does not fit a decimal.
#[derive(Debug, Error)]
#[error("amount out of range for {0}")]
pub(crate) struct AmountOutOfRange(Uuid);

impl TryFrom<Cart> for CartResponse {
    type Error = AmountOutOfRange;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        let total = cart
            .total()
            .ok_or(AmountOutOfRange(cart.uuid.into_uuid()))?
            .to_string();

        Ok(CartResponse {
            uuid: cart.uuid.into_uuid(),
            owner_uuid: cart.owner_uuid.into_uuid(),
            status: cart.status.to_string(),
            items: cart
                .items
                .into_iter()
                .map(CartItemResponse::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            created_at: cart.created_at.to_string(),
        })
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// The cart the item belongs to
    pub cart_uuid: Uuid,

    /// The product in the cart item
    pub product_uuid: Uuid,

    /// Units of the product
    pub quantity: i32,

    /// Price per unit captured when the item was added
    pub unit_price: String,

    /// `quantity` times `unit_price`
    pub subtotal: String,

    /// The date and time the item was added
    pub created_at: String,
}

impl TryFrom<CartItem> for CartItemResponse {
    type Error = AmountOutOfRange;

    fn try_from(item: CartItem) -> Result<Self, Self::Error> {
        let subtotal = item
            .subtotal()
            .ok_or(AmountOutOfRange(item.uuid.into_uuid()))?;

        Ok(Self {
            uuid: item.uuid.into_uuid(),
            cart_uuid: item.cart_uuid.into_uuid(),
            product_uuid: item.product_uuid.into_uuid(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            subtotal: subtotal.to_string(),
            created_at: item.created_at.to_string(),
        })
    }
}

/// Get Cart Handler
///
/// Returns a cart with its items and total.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.get",
    skip(cart, depot),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.app_state()?;
    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    let cart = state
        .app
        .carts
        .get_cart(cart.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::try_from(cart).or_500("failed to render cart")?))
}
