//! Storefront Domain Concerns

pub mod carts;
pub mod enrichment;
pub mod notifications;
