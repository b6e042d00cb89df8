//! Enrichment Projections

use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// User UUID, owned by the user directory.
pub type UserUuid = TypedUuid<EnrichedUser>;

/// Product UUID, owned by the product catalog.
pub type ProductUuid = TypedUuid<EnrichedProduct>;

/// Read-only view of a user record held by the user directory.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedUser {
    /// Directory identifier
    pub uuid: UserUuid,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
}

/// Read-only view of a product record held by the product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedProduct {
    /// Catalog identifier
    pub uuid: ProductUuid,

    /// Product name
    pub name: String,
    /// Current catalog price
    pub unit_price: Decimal,
    /// Units in stock
    pub stock: i64,
}

impl EnrichedProduct {
    /// Whether the catalog reports any units in stock.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}
