mod common;

use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::json;

const GENERIC: &str = "Invalid credentials";
const EXPIRED: &str = "Session expired, please sign in again";

#[tokio::test]
async fn login_returns_a_token_with_its_lifetime() {
    let (app, state) = common::test_app();
    common::seed_user(&state, "Alice", "alice@example.com").await;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "pw" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["expires_in"], 3600);
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_part_was_wrong() {
    let (app, state) = common::test_app();
    common::seed_user(&state, "Alice", "alice@example.com").await;

    // Unknown account
    let (status, body) = common::send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "bob@example.com", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], GENERIC);

    // Known account, empty secret-proof
    let (status, body) = common::send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], GENERIC);
}

#[tokio::test]
async fn issued_credential_flows_through_to_the_propagated_identity() {
    let (app, _state) = common::test_app();
    let token = common::authenticator()
        .issue("u1", &["user".to_string()], Duration::hours(1))
        .unwrap();

    let (status, body) =
        common::send(&app, Method::GET, "/auth/whoami", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], "u1");
    assert_eq!(body["roles"], json!(["user"]));
}

#[tokio::test]
async fn missing_credential_is_rejected() {
    let (app, _state) = common::test_app();

    let (status, body) = common::send(&app, Method::GET, "/auth/whoami", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], GENERIC);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn bearer_framing_must_be_exactly_two_segments() {
    let (app, _state) = common::test_app();

    // Scheme keyword with no token segment
    let (status, body) =
        common::send_with_raw_authorization(&app, Method::GET, "/auth/whoami", "Bearer").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], GENERIC);

    // Three segments
    let (status, _) = common::send_with_raw_authorization(
        &app,
        Method::GET,
        "/auth/whoami",
        "Bearer abc def",
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Wrong scheme keyword
    let (status, _) = common::send_with_raw_authorization(
        &app,
        Method::GET,
        "/auth/whoami",
        "Basic dXNlcjpwYXNz",
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_scheme_keyword_is_case_insensitive() {
    let (app, _state) = common::test_app();
    let token = common::authenticator()
        .issue("u1", &[], Duration::hours(1))
        .unwrap();

    let (status, _) = common::send_with_raw_authorization(
        &app,
        Method::GET,
        "/auth/whoami",
        &format!("bEaReR {}", token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn expired_credential_gets_its_own_wording() {
    let (app, _state) = common::test_app();
    let token = common::authenticator()
        .issue("u1", &["user".to_string()], Duration::hours(-1))
        .unwrap();

    let (status, body) =
        common::send(&app, Method::GET, "/auth/whoami", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], EXPIRED);
    assert_ne!(body["message"], GENERIC);
}

#[tokio::test]
async fn credential_signed_with_another_secret_is_rejected_generically() {
    let (app, _state) = common::test_app();

    let foreign = omni_api::auth::Authenticator::new(&omni_api::config::SecurityConfig {
        jwt_secret: "some-other-secret".to_string(),
        jwt_issuer: "omni-api".to_string(),
        token_ttl_hours: 1,
    });
    let token = foreign.issue("u1", &[], Duration::hours(1)).unwrap();

    let (status, body) =
        common::send(&app, Method::GET, "/auth/whoami", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], GENERIC);
}

#[tokio::test]
async fn credential_with_disallowed_algorithm_is_rejected_generically() {
    let (app, _state) = common::test_app();

    // Right secret, wrong algorithm family
    let now = chrono::Utc::now().timestamp();
    let claims = omni_api::auth::Claims {
        sub: "u1".to_string(),
        roles: vec![],
        iat: now,
        exp: now + 3600,
        iss: "omni-api".to_string(),
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS384),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(common::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, body) =
        common::send(&app, Method::GET, "/auth/whoami", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], GENERIC);
}

#[tokio::test]
async fn login_then_protected_request_end_to_end() {
    let (app, state) = common::test_app();
    let seeded = common::seed_user(&state, "Alice", "alice@example.com").await;

    let (_, login_body) = common::send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "pw" })),
    )
    .await;
    let token = login_body["token"].as_str().unwrap().to_string();

    let (status, body) =
        common::send(&app, Method::GET, "/auth/whoami", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject"], seeded.id.to_string());
    assert_eq!(body["roles"], json!(["user"]));
}
