//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `TraceLayer` (request span with empty `request_id` field)
//! 3. Request ID (fills in the span field, echoes the header)
//! 4. Security headers
//! 5. Timeout
//!
//! Session resolution is not a layer: handlers that need it take the
//! [`CurrentSession`] extractor.

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{CurrentSession, NoSession, SessionResolver};
