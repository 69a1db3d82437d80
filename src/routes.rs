//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - List every mapping
//! - `POST /`             - Create (or fetch) the short URL for a long URL
//! - `GET  /health`       - Store health check
//! - `GET  /{short_url}`  - Redirect to the long URL
//!
//! Generated codes are 7 characters long, so they never shadow `/health`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_handler, health_handler, list_handler, redirect_handler};
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/health", get(health_handler))
        .route("/{short_url}", get(redirect_handler))
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = routes().with_state(state).layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
