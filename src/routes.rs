//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (public)
//! - `/api/*`            - JSON API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (configurable for proxy deployments)
//! - **Authentication** - Bearer token on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// When `config.behind_proxy` is set, rate limiting reads the client IP from
/// forwarding headers instead of the peer socket address.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = if config.behind_proxy {
        protected.layer(rate_limit::proxied_layer(config.rate_limit()))
    } else {
        protected.layer(rate_limit::layer(config.rate_limit()))
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
