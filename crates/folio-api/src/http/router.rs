//! Axum router configuration with middleware.
//!
//! JSON routes are under `/api/v1/`. The page shell is served at `/`, and
//! files from `static_dir` (résumé, images) under `/assets` when that
//! directory exists. Middleware: CORS, compression, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/portfolio", get(handlers::portfolio::get_portfolio))
        .route("/context", get(handlers::portfolio::get_context))
        .route(
            "/conversations",
            post(handlers::conversation::create_conversation),
        )
        .route(
            "/conversations/{id}",
            get(handlers::conversation::get_conversation),
        )
        .route(
            "/conversations/{id}/messages",
            post(handlers::conversation::submit_message),
        );

    let static_dir = state.config.static_dir.clone();

    let mut router = Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes);

    if static_dir.is_dir() {
        tracing::info!(path = %static_dir.display(), "static asset serving enabled");
        router = router.nest_service("/assets", ServeDir::new(&static_dir));
    } else {
        tracing::debug!(path = %static_dir.display(), "static dir not found, /assets disabled");
    }

    router
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
