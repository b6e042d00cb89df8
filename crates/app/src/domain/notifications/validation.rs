//! Notification input validation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::notifications::models::{ConfirmedOrder, EmailRequest, OrderConfirmation};

/// Why a notification request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationValidationError {
    /// A required text field was blank.
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    /// An address failed [`is_valid_email`].
    #[error("{0:?} is not a valid email address")]
    InvalidEmailAddress(String),

    /// The order names no recipient.
    #[error("order has no recipient")]
    MissingRecipient,

    /// The order lists no products.
    #[error("order has no products")]
    NoProducts,

    /// The order has no purchase date.
    #[error("order has no purchase date")]
    MissingPurchaseDate,

    /// The order total is missing, zero or negative.
    #[error("order total must be greater than zero")]
    NonPositiveTotal,
}

/// Loose address check shared by every entry point that accepts an address.
///
/// After trimming, the address must contain `@` and `.`, and the first `@`
/// must come before the last `.`. Nothing else is checked.
pub fn is_valid_email(address: &str) -> bool {
    let address = address.trim();

    match (address.find('@'), address.rfind('.')) {
        (Some(at), Some(dot)) => at < dot,
        _ => false,
    }
}

fn require(field: &'static str, value: &str) -> Result<(), NotificationValidationError> {
    if value.trim().is_empty() {
        return Err(NotificationValidationError::BlankField(field));
    }

    Ok(())
}

fn require_email(address: &str) -> Result<(), NotificationValidationError> {
    if !is_valid_email(address) {
        return Err(NotificationValidationError::InvalidEmailAddress(
            address.to_string(),
        ));
    }

    Ok(())
}

/// Check a plain email before it is sent.
///
/// # Errors
///
/// Returns the first blank field, or an invalid recipient address.
pub fn validate_email_request(request: &EmailRequest) -> Result<(), NotificationValidationError> {
    require("to", &request.to)?;
    require("subject", &request.subject)?;
    require("body", &request.body)?;
    require_email(&request.to)
}

/// Check a subject and body addressed to a known user.
///
/// # Errors
///
/// Returns the first blank field.
pub fn validate_user_message(subject: &str, body: &str) -> Result<(), NotificationValidationError> {
    require("subject", subject)?;
    require("body", body)
}

/// Turn a received order payload into a [`ConfirmedOrder`].
///
/// # Errors
///
/// Returns the first missing or out-of-range part of the order.
pub fn validate_order(order: OrderConfirmation) -> Result<ConfirmedOrder, NotificationValidationError> {
    let recipient = order
        .recipient
        .ok_or(NotificationValidationError::MissingRecipient)?;

    require_email(&recipient.email)?;

    if order.products.is_empty() {
        return Err(NotificationValidationError::NoProducts);
    }

    let order_number = order.order_number.unwrap_or_default();

    require("order number", &order_number)?;

    let purchased_at = order
        .purchased_at
        .ok_or(NotificationValidationError::MissingPurchaseDate)?;

    let total = order
        .total
        .filter(|total| *total > Decimal::ZERO)
        .ok_or(NotificationValidationError::NonPositiveTotal)?;

    Ok(ConfirmedOrder {
        recipient,
        products: order.products,
        order_number,
        purchased_at,
        total,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::domain::notifications::models::{OrderLine, OrderRecipient};

    use super::*;

    fn order() -> OrderConfirmation {
        OrderConfirmation {
            recipient: Some(OrderRecipient {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }),
            products: vec![OrderLine {
                name: "Laptop".to_string(),
                price: Decimal::new(129_999, 2),
            }],
            order_number: Some("ORD-1".to_string()),
            purchased_at: Some(date(2026, 3, 1).at(10, 15, 0, 0)),
            total: Some(Decimal::new(129_999, 2)),
        }
    }

    #[test]
    fn accepts_ordinary_address() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("  user@example.com  "));
    }

    #[test]
    fn rejects_address_without_at() {
        assert!(!is_valid_email("userexample.com"));
    }

    #[test]
    fn rejects_address_without_dot() {
        assert!(!is_valid_email("user@examplecom"));
    }

    #[test]
    fn rejects_address_whose_last_dot_precedes_at() {
        assert!(!is_valid_email("user.name@com"));
        assert!(!is_valid_email("a.b@c"));
    }

    #[test]
    fn accepts_dot_before_at_when_another_follows() {
        assert!(is_valid_email("user.name@example.com"));
    }

    #[test]
    fn rejects_blank_address() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
    }

    #[test]
    fn email_request_requires_every_field() {
        let request = EmailRequest {
            to: "ada@example.com".to_string(),
            subject: " ".to_string(),
            body: "Hi".to_string(),
        };

        assert_eq!(
            validate_email_request(&request),
            Err(NotificationValidationError::BlankField("subject"))
        );
    }

    #[test]
    fn email_request_rejects_bad_address() {
        let request = EmailRequest {
            to: "ada-at-example".to_string(),
            subject: "Hi".to_string(),
            body: "Hello".to_string(),
        };

        assert_eq!(
            validate_email_request(&request),
            Err(NotificationValidationError::InvalidEmailAddress(
                "ada-at-example".to_string()
            ))
        );
    }

    #[test]
    fn complete_order_is_confirmed() {
        let confirmed = validate_order(order());

        assert_eq!(
            confirmed.map(|order| order.order_number),
            Ok("ORD-1".to_string())
        );
    }

    #[test]
    fn order_without_recipient_is_rejected() {
        let order = OrderConfirmation {
            recipient: None,
            ..order()
        };

        assert_eq!(
            validate_order(order),
            Err(NotificationValidationError::MissingRecipient)
        );
    }

    #[test]
    fn order_with_invalid_recipient_address_is_rejected() {
        let order = OrderConfirmation {
            recipient: Some(OrderRecipient {
                name: "Ada".to_string(),
                email: "ada@example".to_string(),
            }),
            ..order()
        };

        assert!(
            matches!(
                validate_order(order),
                Err(NotificationValidationError::InvalidEmailAddress(_))
            ),
            "expected InvalidEmailAddress"
        );
    }

    #[test]
    fn order_without_products_is_rejected() {
        let order = OrderConfirmation {
            products: Vec::new(),
            ..order()
        };

        assert_eq!(
            validate_order(order),
            Err(NotificationValidationError::NoProducts)
        );
    }

    #[test]
    fn order_with_blank_number_is_rejected() {
        for order_number in [None, Some("  ".to_string())] {
            let order = OrderConfirmation {
                order_number,
                ..order()
            };

            assert_eq!(
                validate_order(order),
                Err(NotificationValidationError::BlankField("order number"))
            );
        }
    }

    #[test]
    fn order_without_purchase_date_is_rejected() {
        let order = OrderConfirmation {
            purchased_at: None,
            ..order()
        };

        assert_eq!(
            validate_order(order),
            Err(NotificationValidationError::MissingPurchaseDate)
        );
    }

    #[test]
    fn order_total_must_be_positive() {
        for total in [None, Some(Decimal::ZERO), Some(Decimal::NEGATIVE_ONE)] {
            let order = OrderConfirmation {
                total,
                ..order()
            };

            assert_eq!(
                validate_order(order),
                Err(NotificationValidationError::NonPositiveTotal)
            );
        }
    }
}
