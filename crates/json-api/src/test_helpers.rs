//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{carts::MockCartsService, notifications::MockNotificationsService},
};

use crate::state::State;

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_get_active_cart().never();
    carts.expect_add_item().never();
    carts.expect_list_items().never();
    carts.expect_complete_cart().never();

    carts
}

fn strict_notifications_mock() -> MockNotificationsService {
    let mut notifications = MockNotificationsService::new();

    notifications.expect_send_email().never();
    notifications.expect_send_to_user().never();
    notifications.expect_notify_order_confirmation().never();
    notifications.expect_notify_single_purchase().never();

    notifications
}

fn state(carts: MockCartsService, notifications: MockNotificationsService) -> Arc<State> {
    State::from_app_context(AppContext {
        carts: Arc::new(carts),
        notifications: Arc::new(notifications),
    })
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(carts, strict_notifications_mock())))
            .push(route),
    )
}

pub(crate) fn notifications_service(
    notifications: MockNotificationsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_carts_mock(), notifications)))
            .push(route),
    )
}
