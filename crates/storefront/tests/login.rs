//! `POST /auth/login` through the full router.

#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CACHE_CONTROL};
use serde_json::json;
use tokio::task::JoinSet;
use tower::ServiceExt;

use common::{
    Outcome, StubVerifier, app, app_with_config, capture_logs, login_request, send,
};
use finvia_storefront::config::StorefrontConfig;
use finvia_storefront::services::InMemoryVerifier;

const LOGIN_FAILED: &str = "An error occurred during login";
const MISSING: &str = "Email and password are required";
const INVALID: &str = "Invalid email or password";

#[tokio::test]
async fn test_valid_credentials_return_user_summary() {
    let verifier = StubVerifier::new(Outcome::Found);
    let (status, body) = send(
        app(verifier.clone()),
        login_request(r#"{"email":"a@b.com","password":"correct"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "user": {
                "id": "u1",
                "name": "Alice",
                "email": "a@b.com",
                "role": "customer"
            }
        })
    );
    assert_eq!(
        verifier.calls(),
        vec![("a@b.com".to_string(), "correct".to_string())]
    );
}

#[tokio::test]
async fn test_unknown_account_is_unauthorized() {
    let verifier = StubVerifier::new(Outcome::Absent);
    let (status, body) = send(
        app(verifier.clone()),
        login_request(r#"{"email":"a@b.com","password":"wrong"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": INVALID }));
    assert_eq!(verifier.calls().len(), 1);
}

#[tokio::test]
async fn test_missing_or_empty_fields_are_bad_request() {
    let bodies = [
        r#"{"email":"a@b.com"}"#,
        r#"{"password":"x"}"#,
        "{}",
        r#"{"email":"","password":"x"}"#,
        r#"{"email":"a@b.com","password":""}"#,
        r#"{"email":null,"password":"x"}"#,
    ];

    for raw in bodies {
        let verifier = StubVerifier::new(Outcome::Found);
        let (status, body) = send(app(verifier.clone()), login_request(raw)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw}");
        assert_eq!(body, json!({ "message": MISSING }), "body: {raw}");
        assert!(verifier.calls().is_empty(), "verifier called for {raw}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let bodies = [
        "not json",
        r#"{"email":"a@b.com","password":42}"#,
        r#""a@b.com""#,
        r#"["a@b.com","correct"]"#,
        "[]",
        "null",
        r#"{"email":"a@b.com","#,
    ];

    for raw in bodies {
        let verifier = StubVerifier::new(Outcome::Found);
        let (status, body) = send(app(verifier.clone()), login_request(raw)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {raw}");
        assert_eq!(body, json!({ "message": LOGIN_FAILED }), "body: {raw}");
        assert!(verifier.calls().is_empty(), "verifier called for {raw}");
    }
}

#[tokio::test]
async fn test_missing_content_type_is_server_error() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .body(Body::from(r#"{"email":"a@b.com","password":"correct"}"#))
        .unwrap();

    let (status, body) = send(app(StubVerifier::new(Outcome::Found)), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": LOGIN_FAILED }));
}

#[tokio::test]
async fn test_malformed_body_not_reported_as_fault() {
    let (logs, _guard) = capture_logs();

    send(
        app(StubVerifier::new(Outcome::Found)),
        login_request(r#"["a@b.com","correct"]"#),
    )
    .await;
    assert!(!logs.contents().contains("Request error"));

    send(
        app(StubVerifier::new(Outcome::Fault)),
        login_request(r#"{"email":"a@b.com","password":"correct"}"#),
    )
    .await;
    assert!(logs.contents().contains("Request error"));
}

#[tokio::test]
async fn test_slow_verifier_times_out() {
    let config = StorefrontConfig {
        request_timeout: Duration::from_millis(50),
        ..StorefrontConfig::default()
    };
    let app = app_with_config(config, StubVerifier::new(Outcome::Stall));

    let response = app
        .oneshot(login_request(r#"{"email":"a@b.com","password":"correct"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_verifier_fault_is_server_error_without_detail() {
    let (status, body) = send(
        app(StubVerifier::new(Outcome::Fault)),
        login_request(r#"{"email":"a@b.com","password":"correct"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": LOGIN_FAILED }));
}

#[tokio::test]
async fn test_verifier_panic_is_server_error() {
    let (status, body) = send(
        app(StubVerifier::new(Outcome::Panic)),
        login_request(r#"{"email":"a@b.com","password":"correct"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": LOGIN_FAILED }));
}

#[tokio::test]
async fn test_secret_never_logged() {
    let (logs, _guard) = capture_logs();

    let bodies = [
        r#"{"email":"a@b.com","password":"qz-sekrit-found"}"#,
        r#"{"email":"a@b.com","password":"qz-sekrit-extra","extra":1}"#,
        r#"{"email":"a@b.com","password":918273645}"#,
        r#"{"email":"","password":"qz-sekrit-missing"}"#,
    ];

    for raw in bodies {
        for outcome in [Outcome::Found, Outcome::Absent, Outcome::Fault] {
            send(app(StubVerifier::new(outcome)), login_request(raw)).await;
        }
    }

    let output = logs.contents();
    assert!(output.contains("Login attempt"));
    assert!(output.contains("a@b.com"));
    assert!(!output.contains("qz-sekrit"), "secret leaked into logs:\n{output}");
    assert!(!output.contains("918273645"), "secret leaked into logs:\n{output}");
}

#[tokio::test]
async fn test_secret_never_echoed() {
    for outcome in [Outcome::Found, Outcome::Absent, Outcome::Fault] {
        let response = app(StubVerifier::new(outcome))
            .oneshot(login_request(
                r#"{"email":"a@b.com","password":"echo-check-5521"}"#,
            ))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("echo-check-5521"));
    }
}

#[tokio::test]
async fn test_login_response_not_cached() {
    let response = app(StubVerifier::new(Outcome::Found))
        .oneshot(login_request(r#"{"email":"a@b.com","password":"correct"}"#))
        .await
        .unwrap();

    assert_eq!(response.headers()[CACHE_CONTROL], "no-store, max-age=0");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let mut request = login_request(r#"{"email":"a@b.com","password":"correct"}"#);
    request
        .headers_mut()
        .insert("x-request-id", "req-abc-123".parse().unwrap());

    let response = app(StubVerifier::new(Outcome::Absent))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-abc-123");
}

#[tokio::test]
async fn test_login_rejects_get() {
    let request = Request::builder()
        .uri("/auth/login")
        .body(Body::empty())
        .unwrap();
    let response = app(StubVerifier::new(Outcome::Found))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_in_memory_verifier_end_to_end() {
    let verifier = InMemoryVerifier::from_json_str(
        r#"[{
            "id": "u1",
            "name": "Alice",
            "email": "Alice@Example.com",
            "password": "correct",
            "role": "admin"
        }]"#,
    )
    .unwrap();
    let app = app(Arc::new(verifier));

    let (status, body) = send(
        app.clone(),
        login_request(r#"{"email":"alice@example.com","password":"correct"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "u1");
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"].as_object().unwrap().len(), 4);

    let (status, _) = send(
        app.clone(),
        login_request(r#"{"email":"alice@example.com","password":"Correct"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        app,
        login_request(r#"{"email":"not-an-email","password":"correct"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_are_independent() {
    let verifier = InMemoryVerifier::from_json_str(
        r#"[{"id":"u1","name":"Alice","email":"a@b.com","password":"correct"}]"#,
    )
    .unwrap();
    let app = app(Arc::new(verifier));

    let mut tasks = JoinSet::new();
    for i in 0..64 {
        let app = app.clone();
        tasks.spawn(async move {
            let (raw, expected) = match i % 3 {
                0 => (
                    r#"{"email":"a@b.com","password":"correct"}"#,
                    StatusCode::OK,
                ),
                1 => (
                    r#"{"email":"a@b.com","password":"wrong"}"#,
                    StatusCode::UNAUTHORIZED,
                ),
                _ => (r#"{"email":"a@b.com"}"#, StatusCode::BAD_REQUEST),
            };
            let (status, _) = send(app, login_request(raw)).await;
            (status, expected)
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, expected) = result.unwrap();
        assert_eq!(status, expected);
    }
}
