//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::middleware::{NoSession, SessionResolver};
use crate::services::{Catalog, CredentialVerifier};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything inside is
/// immutable, so concurrent requests never coordinate.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    verifier: Arc<dyn CredentialVerifier>,
    sessions: Arc<dyn SessionResolver>,
    catalog: Catalog,
}

impl AppState {
    /// Create application state with the sample catalog and no session
    /// resolution.
    #[must_use]
    pub fn new(config: StorefrontConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self::with_parts(config, verifier, Arc::new(NoSession), Catalog::sample())
    }

    /// Create application state from explicit parts.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        verifier: Arc<dyn CredentialVerifier>,
        sessions: Arc<dyn SessionResolver>,
        catalog: Catalog,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                verifier,
                sessions,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the credential verifier behind the login endpoint.
    #[must_use]
    pub fn verifier(&self) -> &dyn CredentialVerifier {
        self.inner.verifier.as_ref()
    }

    /// Get the session resolver.
    #[must_use]
    pub fn sessions(&self) -> &dyn SessionResolver {
        self.inner.sessions.as_ref()
    }

    /// Get the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
