//! Create Cart Item Handler

use rust_decimal::Decimal;
use salvo::{oapi::extract::PathParam, prelude::*};
use serde::Deserialize;
use uuid::Uuid;

use storefront_app::domain::carts::models::{CartItemUuid, NewCartItem};

use crate::{
    carts::{errors::into_status_error, get::CartItemResponse},
    extensions::*,
};

/// Add Item query string: `?productId=&quantity=&unitPrice=`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddItemQuery {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: String,
}

impl AddItemQuery {
    fn into_new_item(self) -> Result<NewCartItem, StatusError> {
        let unit_price = self
            .unit_price
            .trim()
            .parse::<Decimal>()
            .or_400("unitPrice must be a decimal number")?;

        Ok(NewCartItem {
            uuid: CartItemUuid::new(),
            product_uuid: self.product_id.into(),
            quantity: self.quantity,
            unit_price,
        })
    }
}

/// Create Cart Item Handler
///
/// Quantity and unit price are range checked by the cart service, after the
/// cart itself has been found ACTIVE.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item created"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::CONFLICT, description = "Cart is not active"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(cart, req, depot, res),
    fields(
        cart_uuid = tracing::field::Empty,
        item_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.app_state()?;
    let cart = cart.into_inner();

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));

    let item = req
        .parse_queries::<AddItemQuery>()
        .or_400("productId, quantity and unitPrice are required")?
        .into_new_item()?;

    span.record("item_uuid", tracing::field::display(item.uuid));

    let item = state
        .app
        .carts
        .add_item(cart.into(), item)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(CartItemResponse::try_from(item).or_500("failed to render cart item")?))
}
