//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Credential verification behind the login endpoint
//! - `catalog` - Read-only product catalog

pub mod auth;
pub mod catalog;

pub use auth::{AuthError, AuthService, CredentialVerifier, Credentials, InMemoryVerifier};
pub use catalog::Catalog;
