//! Notification Models

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// A fully addressed message ready to be handed to a mail sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    /// Sender address
    pub from: String,

    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain text body
    pub body: String,
}

/// Plain email as requested by a caller; the sender address is added later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain text body
    pub body: String,
}

/// Person an order confirmation is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecipient {
    /// Name used in the greeting
    pub name: String,

    /// Contact address
    pub email: String,
}

/// One purchased product as listed in a confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Product name
    pub name: String,

    /// Price paid
    pub price: Decimal,
}

/// Pre-assembled order payload, exactly as received.
///
/// Any field may be missing; see [`validate_order`](super::validation::validate_order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Who the confirmation goes to
    pub recipient: Option<OrderRecipient>,

    /// Purchased products
    pub products: Vec<OrderLine>,

    /// Shop order number
    pub order_number: Option<String>,

    /// Local purchase date and time
    pub purchased_at: Option<DateTime>,

    /// Amount charged
    pub total: Option<Decimal>,
}

/// An order confirmation that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedOrder {
    /// Who the confirmation goes to
    pub recipient: OrderRecipient,

    /// Purchased products, never empty
    pub products: Vec<OrderLine>,

    /// Shop order number
    pub order_number: String,

    /// Local purchase date and time
    pub purchased_at: DateTime,

    /// Amount charged
    pub total: Decimal,
}
