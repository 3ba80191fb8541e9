//! Router configuration for the HTTP API.

use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router with every route and the tracing layer.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route("/users", get(api::users::list_users))
        .route("/user", post(api::users::create_user))
        .route(
            "/user/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
