//! Order Confirmation Handler

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::notifications::models::{OrderConfirmation, OrderLine, OrderRecipient};

use crate::{extensions::*, notifications::errors::into_status_error};

/// Order Recipient
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderRecipientRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

/// Order Line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineRequest {
    #[serde(default)]
    pub name: String,

    #[salvo(schema(value_type = String, example = "19.99"))]
    pub price: Decimal,
}

/// Order Confirmation Request
///
/// Every field is optional on the wire so that incomplete orders are reported
/// by validation rather than by the JSON parser.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderConfirmationRequest {
    pub recipient: Option<OrderRecipientRequest>,

    #[serde(default)]
    pub products: Vec<OrderLineRequest>,

    pub order_number: Option<String>,

    /// Local date and time of purchase, e.g. `2025-03-01T10:30:00`
    #[salvo(schema(value_type = Option<String>))]
    pub purchased_at: Option<DateTime>,

    #[salvo(schema(value_type = Option<String>))]
    pub total: Option<Decimal>,
}

impl From<OrderConfirmationRequest> for OrderConfirmation {
    fn from(request: OrderConfirmationRequest) -> Self {
        OrderConfirmation {
            recipient: request.recipient.map(|recipient| OrderRecipient {
                name: recipient.name,
                email: recipient.email,
            }),
            products: request
                .products
                .into_iter()
                .map(|line| OrderLine {
                    name: line.name,
                    price: line.price,
                })
                .collect(),
            order_number: request.order_number,
            purchased_at: request.purchased_at,
            total: request.total,
        }
    }
}

/// Order Confirmation Handler
#[endpoint(
    tags("notifications"),
    summary = "Send Order Confirmation",
    responses(
        (status_code = StatusCode::OK, description = "Confirmation sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Mail relay failed"),
    ),
)]
#[tracing::instrument(
    name = "notifications.orders",
    skip(json, depot),
    fields(order_number = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<OrderConfirmationRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.app_state()?;
    let order = OrderConfirmation::from(json.into_inner());

    if let Some(number) = &order.order_number {
        tracing::Span::current().record("order_number", number.as_str());
    }

    state
        .app
        .notifications
        .notify_order_confirmation(order)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
