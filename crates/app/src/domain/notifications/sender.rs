//! Mail senders.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::notifications::models::EmailMessage;

/// Delivery failures.
#[derive(Debug, Error)]
pub enum MailSenderError {
    /// The relay could not be reached.
    #[error("mail relay unreachable")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("mail relay rejected message with status {status}: {body}")]
    Rejected {
        /// Status returned by the relay
        status: StatusCode,

        /// Response body, empty when unreadable
        body: String,
    },
}

/// Outbound delivery of a composed message. One attempt per call.
#[automock]
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Hand `message` over for delivery.
    async fn send(&self, message: EmailMessage) -> Result<(), MailSenderError>;
}

/// Posts each message as JSON to a mail relay.
#[derive(Debug, Clone)]
pub struct HttpMailSender {
    relay_url: Url,
    http: Client,
}

impl HttpMailSender {
    /// Post to `relay_url`.
    #[must_use]
    pub fn new(relay_url: Url) -> Self {
        Self {
            relay_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl MailSender for HttpMailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), MailSenderError> {
        let response = self
            .http
            .post(self.relay_url.clone())
            .json(&message)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            warn!(%status, "mail relay rejected message");

            return Err(MailSenderError::Rejected { status, body });
        }

        info!(to = %message.to, subject = %message.subject, "relayed message");

        Ok(())
    }
}

/// Writes messages to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), MailSenderError> {
        info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "mail relay not configured, logging message"
        );

        Ok(())
    }
}
