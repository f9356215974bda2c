//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

pub const INDEX_FILE: &str = "index.html";
pub const FAVICON_FILE: &str = "favicon.ico";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Cross-origin requests are accepted from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new().route("/analyze-area", post(handlers::analyze_area));

    Router::new()
        .route_service("/", ServeFile::new(state.static_dir.join(INDEX_FILE)))
        .route_service("/favicon.ico", ServeFile::new(state.static_dir.join(FAVICON_FILE)))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
