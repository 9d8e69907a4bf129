//! In-memory credential verifier.
//!
//! Accounts are held in a map keyed by normalized email. The map can be
//! seeded from a JSON file listing accounts:
//!
//! ```json
//! [
//!   { "id": "u1", "name": "Alice", "email": "alice@example.com",
//!     "role": "customer", "password": "..." }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

use finvia_core::{Email, UserId, UserRole};

use super::{CredentialVerifier, VerifierError, secrets_match};
use crate::models::User;

/// Errors loading seed accounts.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read users file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse users file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate account for email {0}")]
    Duplicate(Email),
}

/// One account entry in a users seed file.
#[derive(Deserialize)]
pub struct SeedAccount {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub role: UserRole,
    pub password: String,
}

impl std::fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAccount")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

struct Account {
    secret: SecretString,
    user: User,
}

/// A [`CredentialVerifier`] backed by a fixed set of accounts.
///
/// Identifiers that are not email-shaped never match.
#[derive(Default)]
pub struct InMemoryVerifier {
    accounts: HashMap<String, Account>,
}

impl InMemoryVerifier {
    /// Create an empty verifier. Every login is rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load accounts from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the file cannot be read or parsed, or if two
    /// entries share an email.
    pub fn from_json_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Load accounts from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the document is invalid or contains duplicates.
    pub fn from_json_str(content: &str) -> Result<Self, SeedError> {
        let seeds: Vec<SeedAccount> = serde_json::from_str(content)?;
        let mut verifier = Self::new();
        for seed in seeds {
            verifier.insert(seed)?;
        }
        Ok(verifier)
    }

    /// Add an account.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Duplicate` if the email is already registered.
    pub fn insert(&mut self, seed: SeedAccount) -> Result<(), SeedError> {
        let key = seed.email.normalized();
        if self.accounts.contains_key(&key) {
            return Err(SeedError::Duplicate(seed.email));
        }

        let account = Account {
            secret: SecretString::from(seed.password),
            user: User {
                id: seed.id,
                name: seed.name,
                email: seed.email,
                role: seed.role,
            },
        };
        self.accounts.insert(key, account);
        Ok(())
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl CredentialVerifier for InMemoryVerifier {
    async fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<Option<User>, VerifierError> {
        let Ok(email) = Email::parse(identifier) else {
            return Ok(None);
        };

        Ok(self
            .accounts
            .get(&email.normalized())
            .filter(|account| secrets_match(&account.secret, secret))
            .map(|account| account.user.clone()))
    }
}
