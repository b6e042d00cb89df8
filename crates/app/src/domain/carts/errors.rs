//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::carts::{models::CartStatus, validation::CartItemValidationError};

/// Failures of the cart lifecycle operations.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The cart does not exist.
    #[error("cart not found")]
    NotFound,

    /// The cart is not ACTIVE.
    #[error("cart is {0}, only ACTIVE carts accept items")]
    InvalidState(CartStatus),

    /// The item was refused before anything was stored.
    #[error("invalid cart item")]
    InvalidArgument(#[from] CartItemValidationError),

    /// Storage failed.
    #[error("storage unavailable")]
    Unavailable(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::CheckViolation) => {
                Self::InvalidArgument(CartItemValidationError::ConstraintViolation)
            }
            Some(_) | None => Self::Unavailable(error),
        }
    }
}
