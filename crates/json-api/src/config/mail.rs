//! Mail Config

use clap::Args;

use storefront_app::context::Url;

/// Outgoing mail settings.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// Relay endpoint receiving messages as JSON. Messages are logged when unset.
    #[arg(long, env = "MAIL_RELAY_URL")]
    pub mail_relay_url: Option<Url>,

    /// Sender address on every outgoing message
    #[arg(long, env = "MAIL_FROM", default_value = "storefront@example.com")]
    pub mail_from: String,
}
