//! Active Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
};

/// Active Cart Handler
///
/// Returns the owner's ACTIVE cart. When the owner has several, the earliest
/// created one is returned.
#[endpoint(
    tags("carts"),
    summary = "Get Active Cart",
    responses(
        (status_code = StatusCode::OK, description = "Active cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Owner has no active cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.active",
    skip(owner, depot),
    fields(owner_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    owner: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.app_state()?;
    let owner = owner.into_inner();

    tracing::Span::current().record("owner_uuid", tracing::field::display(owner));

    let cart = state
        .app
        .carts
        .get_active_cart(owner.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::try_from(cart).or_500("failed to render cart")?))
}
