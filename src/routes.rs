//! Top-level router combining the CRUD surface with the redirect catch-all.
//!
//! # Route Structure
//!
//! - `/links`, `/links/{id}` - Link management API
//! - `GET /health`           - Liveness probe
//! - `GET /{name}`           - Short-name redirect (catch-all)
//!
//! # Routing order
//!
//! The `/{name}` capture must never shadow the `/links` subtree. axum
//! resolves literal path segments ahead of captures regardless of
//! registration order, so `GET /links` always hits the list handler and
//! only unmatched single-segment paths fall through to the redirect.
//!
//! # Middleware
//!
//! Structured request/response logging via [`crate::api::middleware::tracing`].

use axum::{Router, routing::get};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .route("/{name}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
