/// HTTP routing
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
///
/// Other methods on a known path get `405 Method Not Allowed`, unknown
/// paths get `404 Not Found`.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}
