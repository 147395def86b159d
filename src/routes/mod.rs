mod account;
mod docs;
mod health;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Assembles every route on top of the shared state.
pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_checker_handler))
        .route("/api-docs/openapi.json", get(docs::openapi_handler))
        .merge(account::account_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
