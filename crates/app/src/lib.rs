//! Storefront application domain, persistence and outbound adapters.

pub mod context;
pub mod database;
pub mod domain;


mod uuids;

pub use uuids::TypedUuid;
