//! HTTP client for the user directory and product catalog.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::enrichment::{
    errors::EnrichmentError,
    models::{EnrichedProduct, EnrichedUser, ProductUuid, UserUuid},
    service::EnrichmentGateway,
};

const USERS: &str = "user directory";
const PRODUCTS: &str = "product catalog";

/// Base URLs of the collaborators consulted for enrichment.
#[derive(Debug, Clone)]
pub struct HttpEnrichmentGatewayConfig {
    /// Users collection, e.g. `"http://localhost:8081/api/users"`.
    pub users_url: Url,

    /// Products collection, e.g. `"http://localhost:8082/api/products"`.
    pub products_url: Url,
}

/// Enrichment gateway issuing one blocking-style `GET {collection}/{uuid}` per lookup.
#[derive(Debug, Clone)]
pub struct HttpEnrichmentGateway {
    config: HttpEnrichmentGatewayConfig,
    http: Client,
}

impl HttpEnrichmentGateway {
    /// Create a new gateway from the given configuration.
    #[must_use]
    pub fn new(config: HttpEnrichmentGatewayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn fetch<T>(
        &self,
        collaborator: &'static str,
        base: &Url,
        uuid: uuid::Uuid,
    ) -> Result<Option<T>, EnrichmentError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = record_url(base, uuid);

        debug!(%url, collaborator, "resolving record");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| EnrichmentError::unavailable(collaborator, error))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            warn!(%status, collaborator, "lookup failed");

            return Err(EnrichmentError::unavailable(
                collaborator,
                format!("lookup failed with status {status}: {text}"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| EnrichmentError::unavailable(collaborator, error))?;

        parse_record(collaborator, &body)
    }
}

#[async_trait]
impl EnrichmentGateway for HttpEnrichmentGateway {
    async fn resolve_user(&self, user: UserUuid) -> Result<EnrichedUser, EnrichmentError> {
        self.fetch::<UserRecord>(USERS, &self.config.users_url, user.into_uuid())
            .await?
            .map(|record| record.into_user(user))
            .ok_or(EnrichmentError::UserNotFound(user))
    }

    async fn resolve_product(
        &self,
        product: ProductUuid,
    ) -> Result<EnrichedProduct, EnrichmentError> {
        self.fetch::<ProductRecord>(PRODUCTS, &self.config.products_url, product.into_uuid())
            .await?
            .map(|record| record.into_product(product))
            .ok_or(EnrichmentError::ProductNotFound(product))
    }
}

/// Join a record identifier onto a collection URL, tolerating a trailing slash.
fn record_url(base: &Url, uuid: uuid::Uuid) -> Url {
    let mut url = base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&uuid.to_string());
    }

    url
}

/// An empty body is how some collaborators say "no such record" with a 200.
fn parse_record<T>(collaborator: &'static str, body: &[u8]) -> Result<Option<T>, EnrichmentError>
where
    T: for<'de> Deserialize<'de>,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<T>>(body)
        .map_err(|error| EnrichmentError::unavailable(collaborator, error))
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(alias = "nombre")]
    name: String,

    #[serde(alias = "contactAddress", alias = "contact_address")]
    email: String,
}

impl UserRecord {
    fn into_user(self, uuid: UserUuid) -> EnrichedUser {
        EnrichedUser {
            uuid,
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(alias = "nombre")]
    name: String,

    #[serde(alias = "unitPrice", alias = "precio", alias = "price")]
    unit_price: Decimal,

    #[serde(default)]
    stock: i64,
}

impl ProductRecord {
    fn into_product(self, uuid: ProductUuid) -> EnrichedProduct {
        EnrichedProduct {
            uuid,
            name: self.name,
            unit_price: self.unit_price,
            stock: self.stock,
        }
    }
}
