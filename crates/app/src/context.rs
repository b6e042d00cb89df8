//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{
            CartsService, DefaultCartsService, InMemoryCartStore, PgCartStore, store::CartStore,
        },
        enrichment::{EnrichmentGateway, HttpEnrichmentGateway, HttpEnrichmentGatewayConfig},
        notifications::{
            DefaultNotificationsService, HttpMailSender, LogMailSender, MailSender,
            NotificationsService,
        },
    },
};

pub use reqwest::Url;

/// Start-up failures.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database could not be reached.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// A migration failed to apply.
    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Everything needed to wire the services together.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// `PostgreSQL` URL. Carts are kept in memory when absent.
    pub database_url: Option<String>,

    /// User directory collection, e.g. `http://localhost:8081/api/users`.
    pub users_url: Url,

    /// Product catalog collection.
    pub products_url: Url,

    /// Mail relay endpoint. Messages are only logged when absent.
    pub mail_relay_url: Option<Url>,

    /// Sender address stamped on every outgoing message.
    pub mail_from: String,
}

/// Wired services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Cart lifecycle
    pub carts: Arc<dyn CartsService>,
    /// Purchase confirmations and plain emails
    pub notifications: Arc<dyn NotificationsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from settings, running migrations when a
    /// database is configured.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let store: Arc<dyn CartStore> = match &settings.database_url {
            Some(url) => {
                let pool = database::connect(url)
                    .await
                    .map_err(AppInitError::Database)?;

                database::migrate(&pool)
                    .await
                    .map_err(AppInitError::Migrations)?;

                Arc::new(PgCartStore::new(Db::new(pool)))
            }
            None => {
                info!("no database configured, carts are kept in memory");

                Arc::new(InMemoryCartStore::new())
            }
        };

        let enrichment: Arc<dyn EnrichmentGateway> =
            Arc::new(HttpEnrichmentGateway::new(HttpEnrichmentGatewayConfig {
                users_url: settings.users_url,
                products_url: settings.products_url,
            }));

        let sender: Arc<dyn MailSender> = match settings.mail_relay_url {
            Some(url) => Arc::new(HttpMailSender::new(url)),
            None => Arc::new(LogMailSender),
        };

        Ok(Self {
            carts: Arc::new(DefaultCartsService::new(store)),
            notifications: Arc::new(DefaultNotificationsService::new(
                enrichment,
                sender,
                settings.mail_from,
            )),
        })
    }
}
