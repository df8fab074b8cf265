pub mod merkle;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all API routes, CORS, and tracing middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let merkle_routes = Router::new()
        .route("/root", axum::routing::get(merkle::get_root))
        .route("/proof/:user_id", axum::routing::get(merkle::get_proof))
        .route("/users", axum::routing::get(merkle::list_users));

    Router::new()
        .nest("/api/merkle", merkle_routes)
        .route("/health", axum::routing::get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Simple health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
