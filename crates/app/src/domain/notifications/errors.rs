//! Notifications service errors.

use thiserror::Error;

use crate::domain::{
    enrichment::EnrichmentError,
    notifications::{sender::MailSenderError, validation::NotificationValidationError},
};

/// Failures of the notification operations.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The user or product does not exist.
    #[error(transparent)]
    NotFound(EnrichmentError),

    /// The request was refused before anything was sent.
    #[error("invalid notification")]
    InvalidArgument(#[from] NotificationValidationError),

    /// The user directory or product catalog failed.
    #[error("lookup failed")]
    LookupUnavailable(#[source] EnrichmentError),

    /// The mail relay failed.
    #[error("message could not be sent")]
    SendUnavailable(#[from] MailSenderError),
}

impl NotificationError {
    /// Whether a collaborator, not the caller, caused the failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::LookupUnavailable(_) | Self::SendUnavailable(_))
    }
}

impl From<EnrichmentError> for NotificationError {
    fn from(error: EnrichmentError) -> Self {
        if error.is_not_found() {
            Self::NotFound(error)
        } else {
            Self::LookupUnavailable(error)
        }
    }
}
