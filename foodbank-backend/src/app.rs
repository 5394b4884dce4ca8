use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use foodbank_config::HttpConfig;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the primary axum router.
///
/// Every route lives under `/api`. The body limit applies to all of them; an
/// oversized login body is reported by the handler like any other read failure.
pub fn build_router(http: &HttpConfig) -> Router {
    let api = Router::new()
        .route("/auth", post(handlers::auth::login))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(http.body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> impl IntoResponse {
    // Liveness: always return 200 OK when process is alive.
    (StatusCode::OK, "OK")
}

async fn ready_handler() -> impl IntoResponse {
    // No backing services to wait on, so ready as soon as the router serves.
    (StatusCode::OK, "OK")
}
