//! Cart item validation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::carts::models::{Cart, NewCartItem};

/// Largest accepted unit price, exclusive.
///
/// Any quantity that fits an `i32` times a price below this bound fits a
/// [`Decimal`].
pub const UNIT_PRICE_LIMIT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x3_8D7E, 0, false, 0);

/// Why a new cart item was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartItemValidationError {
    /// Quantity was zero or negative.
    #[error("quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(i32),

    /// Unit price was zero or negative.
    #[error("unit price must be greater than zero, got {0}")]
    NonPositiveUnitPrice(Decimal),

    /// Unit price reached [`UNIT_PRICE_LIMIT`].
    #[error("unit price must be below 1000000000000000, got {0}")]
    UnitPriceTooLarge(Decimal),

    /// The cart total would no longer fit a decimal.
    #[error("cart total would exceed the largest representable amount")]
    TotalOutOfRange,

    /// Rejected by a database check constraint.

    /// Rejected by a database check constraint.
    #[error("item rejected by a storage constraint")]
    ConstraintViolation,
}

/// Check a new line before anything is persisted.
///
/// # Errors
///
/// Returns the first field that is out of range.
pub fn validate_new_item(item: &NewCartItem) -> Result<(), CartItemValidationError> {
    if item.quantity <= 0 {
        return Err(CartItemValidationError::NonPositiveQuantity(item.quantity));
    }

    if item.unit_price <= Decimal::ZERO {
        return Err(CartItemValidationError::NonPositiveUnitPrice(
            item.unit_price,
        ));
    }

    if item.unit_price >= UNIT_PRICE_LIMIT {
        return Err(CartItemValidationError::UnitPriceTooLarge(item.unit_price));
    }

    Ok(())
}

/// Check that `item` can join `cart` without its total overflowing.
///
/// `cart` must carry its current items.
///
/// # Errors
///
/// Returns [`CartItemValidationError::TotalOutOfRange`] when the line subtotal
/// or the new cart total is not representable.
pub fn validate_cart_total(cart: &Cart, item: &NewCartItem) -> Result<(), CartItemValidationError> {
    cart.total()
        .zip(item.unit_price.checked_mul(Decimal::from(item.quantity)))
        .and_then(|(total, subtotal)| total.checked_add(subtotal))
        .map(|_| ())
        .ok_or(CartItemValidationError::TotalOutOfRange)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{
        carts::models::{CartItem, CartItemUuid, CartStatus, CartUuid},
        enrichment::models::{ProductUuid, UserUuid},
    };

    use super::*;

    fn new_item(quantity: i32, unit_price: Decimal) -> NewCartItem {
        NewCartItem {
            uuid: CartItemUuid::new(),
            product_uuid: ProductUuid::new(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn accepts_positive_quantity_and_price() {
        assert_eq!(validate_new_item(&new_item(1, Decimal::new(1, 2))), Ok(()));
    }

    #[test]
    fn rejects_zero_and_negative_quantity() {
        for quantity in [0, -1, i32::MIN] {
            assert_eq!(
                validate_new_item(&new_item(quantity, Decimal::TEN)),
                Err(CartItemValidationError::NonPositiveQuantity(quantity))
            );
        }
    }

    #[test]
    fn rejects_zero_and_negative_price() {
        for price in [Decimal::ZERO, Decimal::NEGATIVE_ONE] {
            assert_eq!(
                validate_new_item(&new_item(2, price)),
                Err(CartItemValidationError::NonPositiveUnitPrice(price))
            );
        }
    }

    #[test]
    fn rejects_price_at_or_above_limit() {
        for price in [UNIT_PRICE_LIMIT, Decimal::MAX] {
            assert_eq!(
                validate_new_item(&new_item(2, price)),
                Err(CartItemValidationError::UnitPriceTooLarge(price))
            );
        }
    }

    #[test]
    fn accepts_price_just_below_limit_with_largest_quantity() {
        let price = UNIT_PRICE_LIMIT - Decimal::new(1, 4);
        let item = new_item(i32::MAX, price);

        assert_eq!(validate_new_item(&item), Ok(()));
        assert!(
            item.unit_price.checked_mul(Decimal::from(item.quantity)).is_some(),
            "largest accepted line should be representable"
        );
    }

    #[test]
    fn limit_is_ten_to_the_fifteenth() {
        assert_eq!(UNIT_PRICE_LIMIT, Decimal::new(1_000_000_000_000_000, 0));
    }

    #[test]
    fn cart_total_accepts_ordinary_item() {
        let cart = cart_with(vec![(2, Decimal::new(100, 1))]);

        assert_eq!(
            validate_cart_total(&cart, &new_item(3, Decimal::new(50, 1))),
            Ok(())
        );
    }

    #[test]
    fn cart_total_rejects_overflowing_item() {
        let cart = cart_with(vec![(1, Decimal::MAX)]);

        assert_eq!(
            validate_cart_total(&cart, &new_item(1, Decimal::ONE)),
            Err(CartItemValidationError::TotalOutOfRange)
        );
    }

    fn cart_with(lines: Vec<(i32, Decimal)>) -> Cart {
        let uuid = CartUuid::new();

        Cart {
            uuid,
            owner_uuid: UserUuid::new(),
            status: CartStatus::Active,
            items: lines
                .into_iter()
                .map(|(quantity, unit_price)| CartItem {
                    uuid: CartItemUuid::new(),
                    cart_uuid: uuid,
                    product_uuid: ProductUuid::new(),
                    quantity,
                    unit_price,
                    created_at: Timestamp::UNIX_EPOCH,
                })
                .collect(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn quantity_is_checked_before_price() {
        assert_eq!(
            validate_new_item(&new_item(0, Decimal::ZERO)),
            Err(CartItemValidationError::NonPositiveQuantity(0))
        );
    }
}
