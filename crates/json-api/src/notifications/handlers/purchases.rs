//! Single Purchase Confirmation Handler

use salvo::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::{extensions::*, notifications::errors::into_status_error};

/// Purchase query string: `?userId=&productId=`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseQuery {
    pub user_id: Uuid,
    pub product_id: Uuid,
}

/// Single Purchase Confirmation Handler
#[endpoint(
    tags("notifications"),
    summary = "Confirm Single Purchase",
    responses(
        (status_code = StatusCode::OK, description = "Confirmation sent"),
        (status_code = StatusCode::NOT_FOUND, description = "User or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Collaborator or mail relay failed"),
    ),
)]
#[tracing::instrument(name = "notifications.purchases", skip(req, depot), err)]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.app_state()?;

    let query = req
        .parse_queries::<PurchaseQuery>()
        .or_400("userId and productId are required")?;

    state
        .app
        .notifications
        .notify_single_purchase(query.user_id.into(), query.product_id.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
