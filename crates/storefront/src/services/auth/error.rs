//! Authentication error types.

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for malformed requests and internal faults.
pub const LOGIN_FAILED_MESSAGE: &str = "An error occurred during login";
/// Message returned when the email or password is missing.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required";
/// Message returned when the verifier finds no matching account.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Faults raised by a credential verifier backend.
///
/// A verifier reports "no such account" as `Ok(None)`; these variants are
/// reserved for the backend itself failing.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The backing store could not be reached.
    #[error("credential store unavailable")]
    Unavailable,

    /// The backing store returned an unexpected error.
    #[error("credential store error: {0}")]
    Backend(String),
}

/// Errors that can occur while handling a login.
///
/// Each variant maps to exactly one status/message pair; see
/// [`AuthError::status_code`] and [`AuthError::public_message`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request body could not be parsed as a login payload.
    #[error("malformed login request")]
    MalformedRequest,

    /// Email or password missing or empty.
    #[error("email and password are required")]
    MissingCredentials,

    /// No account matched the submitted credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The credential verifier failed.
    #[error("verifier error: {0}")]
    Verifier(#[from] VerifierError),
}

impl AuthError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::MalformedRequest | Self::Verifier(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Never includes internal detail.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => MISSING_CREDENTIALS_MESSAGE,
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            Self::MalformedRequest | Self::Verifier(_) => LOGIN_FAILED_MESSAGE,
        }
    }

    /// Whether this error is a server-side fault worth reporting.
    ///
    /// A malformed body still answers 500 but is the client's doing.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Verifier(_))
    }
}
