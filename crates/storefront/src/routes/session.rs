//! Session status for the site header.

use axum::Json;
use serde::Serialize;

use crate::middleware::CurrentSession;
use crate::models::UserSummary;

/// Whether the caller is logged in, and as whom.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub logged_in: bool,
    pub user: Option<UserSummary>,
}

/// GET /api/session
pub async fn show(CurrentSession(session): CurrentSession) -> Json<SessionStatus> {
    Json(SessionStatus {
        logged_in: session.is_some(),
        user: session.map(|s| s.user),
    })
}
