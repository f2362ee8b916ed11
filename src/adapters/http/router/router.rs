use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::adapters::http::handlers;
use crate::adapters::http::state::AppState;

/// Build the complete HTTP router: the five orchestrator-facing routes plus
/// a liveness probe, with request tracing installed over the whole tree.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout/session", post(handlers::logout_session))
        .route("/logout/principal", post(handlers::logout_principal))
        .route("/grant-access", post(handlers::grant_access))
        .route("/validate", post(handlers::validate))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
