//! Shared helpers for storefront router tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use finvia_core::{Email, UserId, UserRole};
use finvia_storefront::build_router;
use finvia_storefront::config::StorefrontConfig;
use finvia_storefront::models::User;
use finvia_storefront::services::CredentialVerifier;
use finvia_storefront::services::auth::VerifierError;
use finvia_storefront::state::AppState;

/// What a [`StubVerifier`] answers.
#[derive(Clone, Copy)]
pub enum Outcome {
    Found,
    Absent,
    Fault,
    Panic,
    Stall,
}

/// Verifier double that records every call.
pub struct StubVerifier {
    outcome: Outcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubVerifier {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// `(identifier, secret)` pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<Option<User>, VerifierError> {
        self.calls
            .lock()
            .unwrap()
            .push((identifier.to_string(), secret.expose_secret().to_string()));

        match self.outcome {
            Outcome::Found => Ok(Some(alice())),
            Outcome::Absent => Ok(None),
            Outcome::Fault => Err(VerifierError::Backend(
                "replica lag exceeded at db-7".to_string(),
            )),
            Outcome::Panic => panic!("verifier exploded"),
            Outcome::Stall => {
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                Ok(None)
            }
        }
    }
}

/// The account returned by `Outcome::Found`.
pub fn alice() -> User {
    User {
        id: UserId::new("u1"),
        name: "Alice".to_string(),
        email: Email::parse("a@b.com").unwrap(),
        role: UserRole::Customer,
    }
}

/// Router over the given verifier with default configuration.
pub fn app(verifier: Arc<dyn CredentialVerifier>) -> Router {
    app_with_config(StorefrontConfig::default(), verifier)
}

/// Router over the given verifier and configuration.
pub fn app_with_config(config: StorefrontConfig, verifier: Arc<dyn CredentialVerifier>) -> Router {
    build_router(AppState::new(config, verifier))
}

/// Send a request and return status and parsed JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// `POST /auth/login` with a raw JSON body.
pub fn login_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `GET` request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a thread-local subscriber writing every level into a buffer.
///
/// Works with `#[tokio::test]`'s current-thread runtime.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
