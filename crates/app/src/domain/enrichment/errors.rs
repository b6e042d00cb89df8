//! Enrichment errors.

use thiserror::Error;

use crate::domain::enrichment::models::{ProductUuid, UserUuid};

/// Lookup failures against the user directory or product catalog.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// The directory has no such user.
    #[error("user {0} not found")]
    UserNotFound(UserUuid),

    /// The catalog has no such product.
    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    /// The collaborator could not be reached or answered with an error.
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        /// Which collaborator failed
        collaborator: &'static str,
        /// Transport or status detail
        reason: String,
    },
}

impl EnrichmentError {
    pub(crate) fn unavailable(collaborator: &'static str, reason: impl ToString) -> Self {
        Self::Unavailable {
            collaborator,
            reason: reason.to_string(),
        }
    }

    /// Whether the collaborator answered but had no matching record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ProductNotFound(_))
    }
}
