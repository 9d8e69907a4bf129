//! Session-related types.

use serde::Serialize;

use super::user::UserSummary;

/// A resolved login session.
///
/// Sessions are produced by a `SessionResolver` at the request boundary and
/// handed to handlers explicitly; absence is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// The logged-in user.
    pub user: UserSummary,
}
