//! Top-level router configuration combining pages, editor actions and ops endpoints.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page (public)
//! - `GET  /{slug}`       - Public profile (public)
//! - `GET  /health`       - Health check: profile API, editor sessions (public)
//! - `GET  /dashboard`    - Editor; opens the editor session
//! - `POST /dashboard/*`  - Editor actions (editor session required)
//! - `POST /logout`       - Discard the editor session
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Editor session** - Cookie-keyed session lookup for editor actions
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, Limits};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Assembles every route; `limit` wraps each rate-limited group.
fn compose<F>(state: AppState, limit: F) -> Router
where
    F: Fn(Router<AppState>, Limits) -> Router<AppState>,
{
    let editor_actions = Router::new()
        .nest("/dashboard", web::routes::editor_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::layer,
        ));

    let dashboard = limit(
        web::routes::dashboard_routes().merge(editor_actions),
        rate_limit::EDITOR,
    );

    let public = limit(
        web::routes::public_routes()
            .route("/health", get(health_handler))
            .nest_service("/static", ServeDir::new("static")),
        rate_limit::PUBLIC,
    );

    Router::new()
        .merge(dashboard)
        .merge(public)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = compose(state, |routes, limits| {
        rate_limit::apply(routes, limits, behind_proxy)
    });

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// The same routes without rate limiting, for in-process servers that have
/// no peer address to key on.
pub fn unlimited_router(state: AppState) -> Router {
    compose(state, |routes, _| routes)
}
