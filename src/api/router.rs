use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::albums;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Paths served by [`create_router_with_state`]
pub const API_ROUTES: [&str; 5] = ["/health", "/ready", "/live", "/albums", "/albums/{id}"];

/// Create the router with album and health endpoints
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Album API
        .route("/albums", get(albums::list_albums).post(albums::create_album))
        .route("/albums/{id}", get(albums::get_album))
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router, exposing Prometheus metrics when enabled
///
/// A metrics path that collides with an API route is not mounted.
pub fn create_router_with_metrics(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let router = create_router_with_state(state);

    match metrics {
        Some(m) if API_ROUTES.iter().any(|route| *route == m.path()) => {
            tracing::error!(path = %m.path(), "Metrics path collides with an API route, not mounted");
            router
        }
        Some(m) => router.merge(create_metrics_router(m)),
        None => router,
    }
}
