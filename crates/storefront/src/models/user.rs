//! User domain types.

use serde::Serialize;

use finvia_core::{Email, UserId, UserRole};

/// An authenticated user record, as returned by a credential verifier.
///
/// The record is owned by the verifier's backing store; the storefront only
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque user ID assigned by the backing store.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Account role.
    pub role: UserRole,
}

/// The public projection of a [`User`].
///
/// This is exactly what the login endpoint returns: `id`, `name`, `email`
/// and `role`, nothing else from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}
