//! Session resolution.
//!
//! Login state is resolved once per request by a [`SessionResolver`] held in
//! application state and handed to handlers through the [`CurrentSession`]
//! extractor. There is no process-wide session global.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::models::Session;
use crate::state::AppState;

/// Resolves the session, if any, attached to an incoming request.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolve the session for a request.
    async fn resolve(&self, parts: &Parts) -> Option<Session>;
}

/// Resolver used until session issuance exists: nobody is ever logged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

#[async_trait]
impl SessionResolver for NoSession {
    async fn resolve(&self, _parts: &Parts) -> Option<Session> {
        None
    }
}

/// Extractor that yields the resolved session for the current request.
///
/// Never rejects; absence is `CurrentSession(None)`.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentSession(session): CurrentSession) -> impl IntoResponse {
///     match session {
///         Some(s) => format!("Hello, {}!", s.user.name),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.sessions().resolve(parts).await))
    }
}
