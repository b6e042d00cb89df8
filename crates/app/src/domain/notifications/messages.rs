//! Message composition.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    enrichment::models::{EnrichedProduct, EnrichedUser},
    notifications::models::ConfirmedOrder,
};

/// Subject of single purchase confirmations.
pub const SINGLE_PURCHASE_SUBJECT: &str = "Purchase completed successfully!";

/// Render an amount with exactly two decimals, rounding half away from zero.
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.2}")
}

/// Prefix a caller supplied body with a greeting naming the recipient.
pub fn greeting(name: &str, body: &str) -> String {
    format!("Hello {name}\n{body}")
}

/// Subject and body confirming the purchase of a single product.
pub fn single_purchase(user: &EnrichedUser, product: &EnrichedProduct) -> (String, String) {
    let body = format!(
        "Hello {}\n\nYour purchase was successful.\n\nProduct: {}\nPrice: ${}\n\nThank you for your purchase.",
        user.name,
        product.name,
        money(product.unit_price),
    );

    (SINGLE_PURCHASE_SUBJECT.to_string(), body)
}

/// Subject and body confirming a multi-product order.
pub fn order_confirmation(order: &ConfirmedOrder) -> (String, String) {
    let subject = format!("Order confirmation - Order #{}", order.order_number);

    let mut body = format!(
        "Hello {},\n\nThank you for your purchase. Your order has been confirmed.\n\n",
        order.recipient.name
    );

    body.push_str("Order details:\n");
    body.push_str(&format!("Order number: {}\n", order.order_number));
    body.push_str(&format!("Date: {}\n\n", order.purchased_at));

    body.push_str("Products purchased:\n");

    for product in &order.products {
        body.push_str(&format!("- {} - ${}\n", product.name, money(product.price)));
    }

    body.push_str(&format!("\nOrder total: ${}", money(order.total)));
    body.push_str("\n\nWe will keep you informed about the status of your order.");

    (subject, body)
}
