//! FINVIA Storefront library.
//!
//! This crate provides the storefront service as a library, allowing the
//! router to be tested without binding a socket and the credential verifier
//! to be swapped per deployment.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, extract::Request, http::StatusCode, middleware::from_fn};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are left to the binary so tests run without a hub.
pub fn build_router(state: AppState) -> Router {
    let timeout = state.config().request_timeout;

    routes::routes()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
