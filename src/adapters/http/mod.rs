//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the FMEA routes with the cross-cutting
//! middleware stack (request tracing, timeout, CORS).

pub mod fmea;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use fmea::{fmea_router, FmeaAppState};

/// Builds the full application router with middleware.
pub fn build_router(state: FmeaAppState, server: &ServerConfig) -> Router {
    fmea_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(cors_layer(server)),
    )
}

/// CORS policy from the configured origin list. No origins, no cross-origin access.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
