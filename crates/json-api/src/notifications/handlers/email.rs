//! Send Email Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::notifications::models::EmailRequest;

use crate::{extensions::*, notifications::errors::into_status_error};

/// Send Email Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SendEmailRequest {
    /// Recipient address
    #[serde(default)]
    pub to: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub body: String,
}

impl From<SendEmailRequest> for EmailRequest {
    fn from(request: SendEmailRequest) -> Self {
        EmailRequest {
            to: request.to,
            subject: request.subject,
            body: request.body,
        }
    }
}

/// Send Email Handler
#[endpoint(
    tags("notifications"),
    summary = "Send Email",
    responses(
        (status_code = StatusCode::OK, description = "Email sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Mail relay failed"),
    ),
)]
#[tracing::instrument(name = "notifications.email", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<SendEmailRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.app_state()?;

    state
        .app
        .notifications
        .send_email(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
