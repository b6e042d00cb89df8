//! App Router

use salvo::Router;

use crate::{carts, notifications};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("carts")
                .push(
                    Router::with_path("{owner}")
                        .post(carts::create::handler)
                        .push(Router::with_path("active").get(carts::active::handler)),
                )
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .push(
                            Router::with_path("items")
                                .get(carts::items::index::handler)
                                .post(carts::items::create::handler),
                        )
                        .push(Router::with_path("complete").post(carts::complete::handler)),
                ),
        )
        .push(
            Router::with_path("notifications")
                .push(Router::with_path("email").post(notifications::email::handler))
                .push(Router::with_path("orders").post(notifications::orders::handler))
                .push(Router::with_path("purchases").post(notifications::purchases::handler))
                .push(Router::with_path("users/{user}").post(notifications::users::handler)),
        )
}
