//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::notifications::NotificationError;

pub(crate) fn into_status_error(error: NotificationError) -> StatusError {
    match error {
        NotificationError::NotFound(source) => StatusError::not_found().brief(source.to_string()),
        NotificationError::InvalidArgument(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        NotificationError::LookupUnavailable(source) => {
            error!("enrichment lookup failed: {source}");

            StatusError::bad_gateway()
        }
        NotificationError::SendUnavailable(source) => {
            error!("mail delivery failed: {source}");

            StatusError::bad_gateway()
        }
    }
}
