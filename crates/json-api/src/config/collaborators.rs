//! Collaborators Config

use clap::Args;

use storefront_app::context::Url;

/// Where users and products are looked up.
#[derive(Debug, Args)]
pub struct CollaboratorsConfig {
    /// User directory collection URL; `/{uuid}` is appended per lookup
    #[arg(
        long,
        env = "USERS_SERVICE_URL",
        default_value = "http://localhost:8081/api/users"
    )]
    pub users_service_url: Url,

    /// Product catalog collection URL; `/{uuid}` is appended per lookup
    #[arg(
        long,
        env = "PRODUCTS_SERVICE_URL",
        default_value = "http://localhost:8082/api/products"
    )]
    pub products_service_url: Url,
}
