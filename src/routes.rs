//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short link
//! - `GET  /shorturls/{shortcode}` - Link statistics
//! - `GET  /health`                - Health check
//! - `GET  /{shortcode}`           - Short link redirect
//!
//! Fixed routes take precedence over the `/{shortcode}` capture, which is
//! why `shorturls` and `health` are not accepted as shortcodes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::shorturl_routes())
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
