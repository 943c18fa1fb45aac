#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use omni_api::auth::Authenticator;
use omni_api::config::SecurityConfig;
use omni_api::domain::User;
use omni_api::handlers;
use omni_api::localization::StaticGeocoder;
use omni_api::repository::memory::{
    InMemoryProductRepository, InMemorySellerRepository, InMemoryUserRepository,
};
use omni_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn security_config() -> SecurityConfig {
    SecurityConfig {
        jwt_secret: TEST_SECRET.to_string(),
        jwt_issuer: "omni-api".to_string(),
        token_ttl_hours: 1,
    }
}

/// Build the full application router over in-memory repositories. The state
/// handle is returned alongside so tests can seed data and read metrics.
pub fn test_app() -> (Router, AppState) {
    let state = AppState::new(
        &security_config(),
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryProductRepository::default()),
        Arc::new(InMemorySellerRepository::default()),
        Arc::new(StaticGeocoder),
    );
    (handlers::router(state.clone()), state)
}

/// An authenticator sharing the app's secret, for minting test credentials.
pub fn authenticator() -> Authenticator {
    Authenticator::new(&security_config())
}

pub async fn seed_user(state: &AppState, name: &str, email: &str) -> User {
    state
        .users
        .create_user(name.to_string(), email.to_string())
        .await
        .expect("seed user")
}

/// Drive one request through the router and parse the JSON response body.
/// Empty bodies come back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Same as [`send`] but with a verbatim `Authorization` header value, for
/// exercising framing errors.
pub async fn send_with_raw_authorization(
    app: &Router,
    method: Method,
    uri: &str,
    authorization: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Fetch a plain-text endpoint (the metrics exposition).
pub async fn send_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
