//! Send Email To User Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, notifications::errors::into_status_error};

/// Message addressed to a user of the directory
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserMessageRequest {
    #[serde(default)]
    pub subject: String,

    /// Sent after a greeting naming the user
    #[serde(default)]
    pub body: String,
}

/// Send Email To User Handler
///
/// Looks the user up and writes to their contact address.
#[endpoint(
    tags("notifications"),
    summary = "Send Email To User",
    responses(
        (status_code = StatusCode::OK, description = "Email sent"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "User directory or mail relay failed"),
    ),
)]
#[tracing::instrument(
    name = "notifications.users",
    skip(user, json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<UserMessageRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.app_state()?;
    let user = user.into_inner();
    let message = json.into_inner();

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    state
        .app
        .notifications
        .send_to_user(user.into(), message.subject, message.body)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
