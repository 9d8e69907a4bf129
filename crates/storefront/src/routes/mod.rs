//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Auth
//! POST /auth/login             - Credential check (JSON)
//!
//! # Catalog API
//! GET  /api/products           - Product listing (?category=, ?filter=)
//! GET  /api/products/{id}      - Product detail
//! GET  /api/categories         - Navigation categories
//!
//! # Session
//! GET  /api/session            - Login status for the header
//! ```

pub mod auth;
pub mod products;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .layer(CatchPanicLayer::custom(auth::login_panic_response))
}

/// Create the catalog API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/categories", get(products::categories))
        .route("/session", get(session::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_routes())
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
