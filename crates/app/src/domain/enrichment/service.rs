//! Enrichment gateway.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::enrichment::{
    errors::EnrichmentError,
    models::{EnrichedProduct, EnrichedUser, ProductUuid, UserUuid},
};

/// Read-through lookups. One collaborator call per resolution, never cached.
#[automock]
#[async_trait]
pub trait EnrichmentGateway: Send + Sync {
    /// Resolve a user identifier into its display name and contact address.
    async fn resolve_user(&self, user: UserUuid) -> Result<EnrichedUser, EnrichmentError>;

    /// Resolve a product identifier into its name, unit price and stock.
    async fn resolve_product(
        &self,
        product: ProductUuid,
    ) -> Result<EnrichedProduct, EnrichmentError>;
}
