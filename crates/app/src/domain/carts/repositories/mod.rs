//! Cart Repositories

mod carts;
mod in_memory;
mod items;
mod postgres;

pub(crate) use carts::PgCartsRepository;
pub use in_memory::InMemoryCartStore;
pub(crate) use items::PgCartItemsRepository;
pub use postgres::PgCartStore;
