//! Notifications Service

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    enrichment::{
        EnrichmentGateway,
        models::{ProductUuid, UserUuid},
    },
    notifications::{
        errors::NotificationError,
        messages,
        models::{EmailMessage, EmailRequest, OrderConfirmation},
        sender::MailSender,
        validation::{validate_email_request, validate_order, validate_user_message},
    },
};

/// Checkout notifier built on the enrichment gateway and a mail sender.
#[derive(Clone)]
pub struct DefaultNotificationsService {
    enrichment: Arc<dyn EnrichmentGateway>,
    sender: Arc<dyn MailSender>,
    from: String,
}

impl std::fmt::Debug for DefaultNotificationsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultNotificationsService")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl DefaultNotificationsService {
    /// Notifier sending from `from` through `sender`.
    #[must_use]
    pub fn new(
        enrichment: Arc<dyn EnrichmentGateway>,
        sender: Arc<dyn MailSender>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            enrichment,
            sender,
            from: from.into(),
        }
    }

    async fn deliver(
        &self,
        to: String,
        subject: String,
        body: String,
    ) -> Result<(), NotificationError> {
        self.sender
            .send(EmailMessage {
                from: self.from.clone(),
                to,
                subject,
                body,
            })
            .await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for DefaultNotificationsService {
    #[tracing::instrument(name = "notifications.service.send_email", skip_all, err)]
    async fn send_email(&self, request: EmailRequest) -> Result<(), NotificationError> {
        validate_email_request(&request)?;

        self.deliver(request.to, request.subject, request.body)
            .await?;

        info!("sent email");

        Ok(())
    }

    #[tracing::instrument(
        name = "notifications.service.send_to_user",
        skip(self, subject, body),
        fields(user_uuid = %user),
        err
    )]
    async fn send_to_user(
        &self,
        user: UserUuid,
        subject: String,
        body: String,
    ) -> Result<(), NotificationError> {
        validate_user_message(&subject, &body)?;

        let user = self.enrichment.resolve_user(user).await?;

        let body = messages::greeting(&user.name, &body);

        self.deliver(user.email, subject, body).await?;

        info!("sent email to user");

        Ok(())
    }

    #[tracing::instrument(
        name = "notifications.service.notify_order_confirmation",
        skip_all,
        fields(order_number = tracing::field::Empty),
        err
    )]
    async fn notify_order_confirmation(
        &self,
        order: OrderConfirmation,
    ) -> Result<(), NotificationError> {
        let order = validate_order(order)?;

        tracing::Span::current().record("order_number", order.order_number.as_str());

        let (subject, body) = messages::order_confirmation(&order);

        self.deliver(order.recipient.email, subject, body).await?;

        info!(products = order.products.len(), "sent order confirmation");

        Ok(())
    }

    #[tracing::instrument(
        name = "notifications.service.notify_single_purchase",
        skip(self),
        fields(user_uuid = %user, product_uuid = %product),
        err
    )]
    async fn notify_single_purchase(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), NotificationError> {
        let user = self.enrichment.resolve_user(user).await?;
        let product = self.enrichment.resolve_product(product).await?;

        let (subject, body) = messages::single_purchase(&user, &product);

        self.deliver(user.email, subject, body).await?;

        info!("sent purchase confirmation");

        Ok(())
    }
}

/// Notification operations.
#[automock]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    /// Send a plain email to an explicit address.
    async fn send_email(&self, request: EmailRequest) -> Result<(), NotificationError>;

    /// Send an email to a user of the directory, greeting them by name.
    async fn send_to_user(
        &self,
        user: UserUuid,
        subject: String,
        body: String,
    ) -> Result<(), NotificationError>;

    /// Confirm a pre-assembled order to its recipient.
    async fn notify_order_confirmation(
        &self,
        order: OrderConfirmation,
    ) -> Result<(), NotificationError>;

    /// Confirm the purchase of one product, resolving both user and product.
    ///
    /// The product is not looked up when the user cannot be resolved.
    async fn notify_single_purchase(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), NotificationError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::{
        enrichment::{
            EnrichmentError, MockEnrichmentGateway,
            models::{EnrichedProduct, EnrichedUser},
        },
        notifications::{
            messages::SINGLE_PURCHASE_SUBJECT,
            models::{OrderLine, OrderRecipient},
            sender::{MailSenderError, MockMailSender},
            validation::NotificationValidationError,
        },
    };

    use super::*;

    const FROM: &str = "shop@example.com";

    fn user(uuid: UserUuid) -> EnrichedUser {
        EnrichedUser {
            uuid,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn product(uuid: ProductUuid) -> EnrichedProduct {
        EnrichedProduct {
            uuid,
            name: "Laptop Gaming".to_string(),
            unit_price: Decimal::new(129_999, 2),
            stock: 10,
        }
    }

    fn service(
        enrichment: MockEnrichmentGateway,
        sender: MockMailSender,
    ) -> DefaultNotificationsService {
        DefaultNotificationsService::new(Arc::new(enrichment), Arc::new(sender), FROM)
    }

    fn order() -> OrderConfirmation {
        OrderConfirmation {
            recipient: Some(OrderRecipient {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }),
            products: vec![OrderLine {
                name: "Perfume".to_string(),
                price: Decimal::new(2999, 2),
            }],
            order_number: Some("ORD-7".to_string()),
            purchased_at: Some(date(2026, 3, 1).at(9, 0, 0, 0)),
            total: Some(Decimal::new(2999, 2)),
        }
    }

    #[tokio::test]
    async fn send_email_hands_message_to_sender() -> TestResult {
        let mut sender = MockMailSender::new();

        sender
            .expect_send()
            .with(eq(EmailMessage {
                from: FROM.to_string(),
                to: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                body: "Hello".to_string(),
            }))
            .once()
            .returning(|_| Ok(()));

        service(MockEnrichmentGateway::new(), sender)
            .send_email(EmailRequest {
                to: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                body: "Hello".to_string(),
            })
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn send_email_with_invalid_address_sends_nothing() {
        let mut sender = MockMailSender::new();

        sender.expect_send().never();

        let result = service(MockEnrichmentGateway::new(), sender)
            .send_email(EmailRequest {
                to: "user.name@com".to_string(),
                subject: "Hi".to_string(),
                body: "Hello".to_string(),
            })
            .await;

        assert!(
            matches!(
                result,
                Err(NotificationError::InvalidArgument(
                    NotificationValidationError::InvalidEmailAddress(_)
                ))
            ),
            "expected InvalidArgument, got {result:?}"
        );
    }

    #[tokio::test]
    async fn sender_failure_is_unavailable() {
        let mut sender = MockMailSender::new();

        sender.expect_send().once().returning(|_| {
            Err(MailSenderError::Rejected {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: String::new(),
            })
        });

        let result = service(MockEnrichmentGateway::new(), sender)
            .send_email(EmailRequest {
                to: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                body: "Hello".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(NotificationError::SendUnavailable(_))),
            "expected SendUnavailable, got {result:?}"
        );
    }

    #[tokio::test]
    async fn send_to_user_greets_user_at_contact_address() -> TestResult {
        let uuid = UserUuid::new();
        let mut enrichment = MockEnrichmentGateway::new();
        let mut sender = MockMailSender::new();

        enrichment
            .expect_resolve_user()
            .with(eq(uuid))
            .once()
            .returning(|uuid| Ok(user(uuid)));

        sender
            .expect_send()
            .withf(|message| {
                message.to == "ada@example.com"
                    && message.subject == "Shipping"
                    && message.body == "Hello Ada\nYour order shipped."
            })
            .once()
            .returning(|_| Ok(()));

        service(enrichment, sender)
            .send_to_user(uuid, "Shipping".to_string(), "Your order shipped.".to_string())
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn send_to_unknown_user_is_not_found() {
        let mut enrichment = MockEnrichmentGateway::new();
        let mut sender = MockMailSender::new();

        enrichment
            .expect_resolve_user()
            .returning(|uuid| Err(EnrichmentError::UserNotFound(uuid)));

        sender.expect_send().never();

        let result = service(enrichment, sender)
            .send_to_user(UserUuid::new(), "Hi".to_string(), "Hello".to_string())
            .await;

        assert!(
            matches!(result, Err(NotificationError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn order_confirmation_is_sent_to_recipient() -> TestResult {
        let mut sender = MockMailSender::new();

        sender
            .expect_send()
            .withf(|message| {
                message.from == FROM
                    && message.to == "ada@example.com"
                    && message.subject == "Order confirmation - Order #ORD-7"
                    && message.body.contains("- Perfume - $29.99")
            })
            .once()
            .returning(|_| Ok(()));

        service(MockEnrichmentGateway::new(), sender)
            .notify_order_confirmation(order())
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn invalid_order_sends_nothing() {
        let mut sender = MockMailSender::new();

        sender.expect_send().never();

        let result = service(MockEnrichmentGateway::new(), sender)
            .notify_order_confirmation(OrderConfirmation {
                products: Vec::new(),
                ..order()
            })
            .await;

        assert!(
            matches!(
                result,
                Err(NotificationError::InvalidArgument(
                    NotificationValidationError::NoProducts
                ))
            ),
            "expected InvalidArgument, got {result:?}"
        );
    }

    #[tokio::test]
    async fn single_purchase_resolves_user_and_product() -> TestResult {
        let user_uuid = UserUuid::new();
        let product_uuid = ProductUuid::new();
        let mut enrichment = MockEnrichmentGateway::new();
        let mut sender = MockMailSender::new();

        enrichment
            .expect_resolve_user()
            .with(eq(user_uuid))
            .once()
            .returning(|uuid| Ok(user(uuid)));

        enrichment
            .expect_resolve_product()
            .with(eq(product_uuid))
            .once()
            .returning(|uuid| Ok(product(uuid)));

        sender
            .expect_send()
            .withf(|message| {
                message.to == "ada@example.com"
                    && message.subject == SINGLE_PURCHASE_SUBJECT
                    && message.body.contains("Price: $1299.99")
            })
            .once()
            .returning(|_| Ok(()));

        service(enrichment, sender)
            .notify_single_purchase(user_uuid, product_uuid)
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn single_purchase_for_unknown_user_skips_product_lookup() {
        let mut enrichment = MockEnrichmentGateway::new();
        let mut sender = MockMailSender::new();

        enrichment
            .expect_resolve_user()
            .returning(|uuid| Err(EnrichmentError::UserNotFound(uuid)));

        enrichment.expect_resolve_product().never();
        sender.expect_send().never();

        let result = service(enrichment, sender)
            .notify_single_purchase(UserUuid::new(), ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(NotificationError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn single_purchase_for_unknown_product_sends_nothing() {
        let mut enrichment = MockEnrichmentGateway::new();
        let mut sender = MockMailSender::new();

        enrichment
            .expect_resolve_user()
            .returning(|uuid| Ok(user(uuid)));

        enrichment
            .expect_resolve_product()
            .returning(|uuid| Err(EnrichmentError::ProductNotFound(uuid)));

        sender.expect_send().never();

        let result = service(enrichment, sender)
            .notify_single_purchase(UserUuid::new(), ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(NotificationError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_catalog_is_unavailable() {
        let mut enrichment = MockEnrichmentGateway::new();
        let mut sender = MockMailSender::new();

        enrichment
            .expect_resolve_user()
            .returning(|uuid| Ok(user(uuid)));

        enrichment.expect_resolve_product().returning(|_| {
            Err(EnrichmentError::Unavailable {
                collaborator: "product catalog",
                reason: "connection refused".to_string(),
            })
        });

        sender.expect_send().never();

        let result = service(enrichment, sender)
            .notify_single_purchase(UserUuid::new(), ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(NotificationError::LookupUnavailable(_))),
            "expected LookupUnavailable, got {result:?}"
        );
    }
}
