//! Create Cart Handler

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::carts::models::{CartUuid, NewCart};

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
};

/// Create Cart Handler
///
/// Opens a new ACTIVE cart for the owner. Existing ACTIVE carts of the same
/// owner are not checked.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(owner, depot, res),
    fields(
        owner_uuid = tracing::field::Empty,
        cart_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    owner: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.app_state()?;
    let owner = owner.into_inner();
    let uuid = CartUuid::new();

    let span = tracing::Span::current();

    span.record("owner_uuid", tracing::field::display(owner));
    span.record("cart_uuid", tracing::field::display(uuid));

    let cart = state
        .app
        .carts
        .create_cart(NewCart {
            uuid,
            owner_uuid: owner.into(),
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartResponse::try_from(cart).or_500("failed to render cart")?))
}
