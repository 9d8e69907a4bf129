//! Authentication service.
//!
//! The storefront does not own user storage. A [`CredentialVerifier`] is
//! plugged in at startup and answers one question: does this
//! `(identifier, secret)` pair belong to an account? [`AuthService`] wraps
//! that call with field validation and turns the outcome into a
//! `Result<User, AuthError>`.

mod error;
mod memory;

pub use error::{
    AuthError, INVALID_CREDENTIALS_MESSAGE, LOGIN_FAILED_MESSAGE, MISSING_CREDENTIALS_MESSAGE,
    VerifierError,
};
pub use memory::{InMemoryVerifier, SeedAccount, SeedError};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::models::User;

/// Looks up the account matching a credential submission.
///
/// Implementations return `Ok(None)` when no valid account matches, whether
/// the identifier is unknown or the secret is wrong. `Err` is reserved for
/// the backend failing.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify `identifier` and `secret`.
    ///
    /// # Errors
    ///
    /// Returns `VerifierError` if the backing store fails.
    async fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<Option<User>, VerifierError>;
}

/// A validated credential submission.
///
/// Both fields are guaranteed non-empty. The secret is wrapped in
/// [`SecretString`] so `Debug` output never contains it.
#[derive(Debug)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    /// Build credentials from the raw submission fields.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is absent or
    /// empty.
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, AuthError> {
        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Self {
                    email,
                    password: SecretString::from(password),
                })
            }
            _ => Err(AuthError::MissingCredentials),
        }
    }

    /// The submitted identifier.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The submitted secret.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Authentication service.
///
/// Borrowed from application state per request; holds nothing between calls.
pub struct AuthService<'a> {
    verifier: &'a dyn CredentialVerifier,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(verifier: &'a dyn CredentialVerifier) -> Self {
        Self { verifier }
    }

    /// Login with email and password.
    ///
    /// Calls the verifier exactly once.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    /// Returns `AuthError::Verifier` if the verifier fails.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.verifier
            .verify(credentials.email(), credentials.password())
            .await?
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Compare two secrets for equality.
///
/// Shared by verifiers that hold secrets in memory.
pub(crate) fn secrets_match(stored: &SecretString, submitted: &SecretString) -> bool {
    stored.expose_secret() == submitted.expose_secret()
}
