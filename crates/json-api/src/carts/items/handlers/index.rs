//! Cart Items Index Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartItemResponse},
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemsResponse {
    /// Items in insertion order
    pub items: Vec<CartItemResponse>,
}

/// Cart Items Index Handler
///
/// Lists a cart's items in insertion order. An unknown cart lists nothing.
#[endpoint(
    tags("carts"),
    summary = "List Cart Items",
    responses(
        (status_code = StatusCode::OK, description = "Cart items"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartItemsResponse>, StatusError> {
    let state = depot.app_state()?;

    let items = state
        .app
        .carts
        .list_items(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartItemsResponse {
        items: items
            .into_iter()
            .map(CartItemResponse::try_from)
            .collect::<Result<Vec<_>, _>>()
            .or_500("failed to render cart items")?,
    }))
}
