//! Cart Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    domain::enrichment::models::{ProductUuid, UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Cart lifecycle status.
///
/// `Active` moves to `Completed` exactly once. `Cancelled` is a recognised
/// stored value but no operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartStatus {
    /// Open for new items.
    Active,

    /// Checked out; no further changes.
    Completed,

    /// Reserved.
    Cancelled,
}

impl CartStatus {
    /// Storage and wire spelling, e.g. `"ACTIVE"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl Display for CartStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Text that does not name a [`CartStatus`].
#[derive(Debug, Error)]
#[error("unknown cart status {0:?}")]
pub struct UnknownCartStatus(String);

impl FromStr for CartStatus {
    type Err = UnknownCartStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(UnknownCartStatus(other.to_string())),
        }
    }
}

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    /// Cart identifier
    pub uuid: CartUuid,

    /// Owning user
    pub owner_uuid: UserUuid,

    /// Lifecycle status
    pub status: CartStatus,

    /// Items in insertion order
    pub items: Vec<CartItem>,

    /// Creation time
    pub created_at: Timestamp,
}

impl Cart {
    /// Sum of every line subtotal; zero for an empty cart.
    ///
    /// `None` when the sum is not representable.
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.subtotal()?))
    }

    /// Whether the cart still accepts items.
    pub fn is_active(&self) -> bool {
        self.status == CartStatus::Active
    }

    /// Whether the cart has been checked out.
    pub fn is_completed(&self) -> bool {
        self.status == CartStatus::Completed
    }
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    /// Identifier to store the cart under
    pub uuid: CartUuid,

    /// Owning user
    pub owner_uuid: UserUuid,
}

/// CartItem Model
///
/// `unit_price` is the price captured when the item was added and is never
/// refreshed from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Item identifier
    pub uuid: CartItemUuid,

    /// Cart the item belongs to
    pub cart_uuid: CartUuid,

    /// Catalog product
    pub product_uuid: ProductUuid,

    /// Units of the product
    pub quantity: i32,

    /// Price per unit
    pub unit_price: Decimal,

    /// When the item was added
    pub created_at: Timestamp,
}

impl CartItem {
    /// `quantity` times `unit_price`, or `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// New CartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    /// Identifier to store the item under
    pub uuid: CartItemUuid,

    /// Catalog product
    pub product_uuid: ProductUuid,

    /// Must be positive.
    pub quantity: i32,

    /// Must be positive and below
    /// [`UNIT_PRICE_LIMIT`](super::validation::UNIT_PRICE_LIMIT).
    pub unit_price: Decimal,
}
