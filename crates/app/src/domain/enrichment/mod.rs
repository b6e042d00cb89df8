//! Enrichment
//!
//! Read-through lookups against the user directory and product catalog. Every
//! call reaches the collaborator once: no caching, no batching, no retries.

pub mod errors;
pub mod http;
pub mod models;
pub mod service;

pub use errors::EnrichmentError;
pub use http::{HttpEnrichmentGateway, HttpEnrichmentGatewayConfig};
pub use service::*;
