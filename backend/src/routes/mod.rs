//! Route definitions for the Job Board API
//!
//! This module organizes all routes and applies middleware.

use crate::error::route_not_found;
use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderName, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod health;
mod jobs;


pub use auth::auth_routes;
pub use jobs::job_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health-api", get(health::health_api).fallback(route_not_found))
        .route(
            "/health/ready",
            get(health::readiness_check).fallback(route_not_found),
        )
        .merge(auth::auth_routes())
        .nest("/api", jobs::job_routes(state.clone()))
        .fallback(route_not_found)
        // Apply middleware layers
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([CONTENT_TYPE, HeaderName::from_static(crate::auth::TOKEN_HEADER)]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
