//! Carts

pub mod errors;
pub mod models;
mod repositories;
pub mod service;
pub mod store;
pub mod validation;

pub use errors::CartsServiceError;
pub use repositories::{InMemoryCartStore, PgCartStore};
pub use service::*;
