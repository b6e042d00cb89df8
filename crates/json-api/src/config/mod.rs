//! Server configuration module

use clap::Parser;

use storefront_app::context::AppSettings;

use crate::config::{
    collaborators::CollaboratorsConfig, db::DatabaseConfig, logging::LoggingConfig,
    mail::MailConfig, server::ServerRuntimeConfig,
};

pub(crate) mod collaborators;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod mail;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Cart storage settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// User directory and product catalog endpoints.
    #[command(flatten)]
    pub collaborators: CollaboratorsConfig,

    /// Outgoing mail settings.
    #[command(flatten)]
    pub mail: MailConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings used to wire the application services.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            database_url: self.database.database_url.clone(),
            users_url: self.collaborators.users_service_url.clone(),
            products_url: self.collaborators.products_service_url.clone(),
            mail_relay_url: self.mail.mail_relay_url.clone(),
            mail_from: self.mail.mail_from.clone(),
        }
    }
}
