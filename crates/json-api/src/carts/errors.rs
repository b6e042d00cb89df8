//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::InvalidState(status) => {
            StatusError::conflict().brief(format!("Cart is {status}"))
        }
        CartsServiceError::InvalidArgument(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        CartsServiceError::Unavailable(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
