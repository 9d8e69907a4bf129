//! Authentication route handlers.
//!
//! `POST /auth/login` accepts `{ "email", "password" }` as JSON and answers
//! with one of four fixed outcomes:
//!
//! | outcome                         | status | body                                              |
//! |---------------------------------|--------|---------------------------------------------------|
//! | body not a login payload        | 500    | `{ "message": "An error occurred during login" }` |
//! | email or password missing/empty | 400    | `{ "message": "Email and password are required" }`|
//! | no matching account             | 401    | `{ "message": "Invalid email or password" }`      |
//! | verified                        | 200    | `{ "user": { "id", "name", "email", "role" } }`   |
//!
//! Verifier faults and panics also produce the 500 response.

use std::any::Any;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MessageBody, Result};
use crate::models::UserSummary;
use crate::services::auth::{AuthError, AuthService, Credentials, LOGIN_FAILED_MESSAGE};
use crate::state::AppState;

/// Login request body.
///
/// Absent fields deserialize as `None`; a field of the wrong JSON type makes
/// the whole body malformed.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Read a login payload from a parsed JSON body.
    ///
    /// Only a JSON object qualifies. The derived `Deserialize` would also
    /// bind a two-element array to the fields by position.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedRequest` for any other shape.
    pub fn from_json(body: Value) -> std::result::Result<Self, AuthError> {
        if !body.is_object() {
            return Err(AuthError::MalformedRequest);
        }
        serde_json::from_value(body).map_err(|_| AuthError::MalformedRequest)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserSummary,
}

/// Handle a login submission.
///
/// POST /auth/login
///
/// # Errors
///
/// Returns `AppError::Auth` for every non-200 outcome; see the module docs
/// for the status and message of each.
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    // Rejection text can quote field values, so only the status is logged
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "Login request body rejected");
        AuthError::MalformedRequest
    })?;
    let request = LoginRequest::from_json(body).inspect_err(|_| {
        tracing::warn!("Login request body is not a login payload");
    })?;

    tracing::info!(
        email = request.email.as_deref().unwrap_or_default(),
        "Login attempt"
    );

    let credentials = Credentials::new(request.email, request.password)?;

    let user = match AuthService::new(state.verifier()).login(&credentials).await {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials) => {
            tracing::info!(email = credentials.email(), "Authentication failed");
            return Err(AuthError::InvalidCredentials.into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.id, "Successful login");

    Ok(Json(LoginResponse {
        user: UserSummary::from(&user),
    }))
}

/// Response for a panic anywhere under `/auth`.
///
/// Installed with `CatchPanicLayer::custom` so a panicking verifier still
/// yields the generic login failure instead of a dropped connection.
pub fn login_panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Panic while handling login request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody::new(LOGIN_FAILED_MESSAGE)),
    )
        .into_response()
}
