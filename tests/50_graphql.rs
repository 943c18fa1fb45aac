mod common;

use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::json;

fn staff_token(subject: &str) -> String {
    common::authenticator()
        .issue(subject, &["admin".to_string()], Duration::hours(1))
        .unwrap()
}

#[tokio::test]
async fn graphql_sits_behind_the_auth_gate() {
    let (app, _state) = common::test_app();

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/graphql",
        None,
        Some(json!({ "query": "query { user { id } }" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn query_a_user_through_the_graphql_surface() {
    let (app, state) = common::test_app();
    let seeded = common::seed_user(&state, "Alice", "alice@example.com").await;
    let token = staff_token("staff-1");

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/graphql",
        Some(&token),
        Some(json!({
            "query": "query ($id: ID!) { user(id: $id) { id name email } }",
            "variables": { "id": seeded.id.to_string() }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["email"], "alice@example.com");
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn create_seller_mutation_stamps_the_caller_identity() {
    let (app, _state) = common::test_app();
    let token = staff_token("staff-7");

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/graphql",
        Some(&token),
        Some(json!({
            "query": "mutation ($input: SellerInput!) { createSeller(input: $input) { id last_updated_by latitude } }",
            "variables": {
                "input": {
                    "brand": "BRAND_B",
                    "status": "PENDING",
                    "address": "10 Collins St",
                    "city": "Melbourne",
                    "state": "VIC",
                    "postcode": "3000",
                    "email": "store@example.com",
                    "phone_number": "0400000001"
                }
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let seller = &body["data"]["createSeller"];
    assert_eq!(seller["last_updated_by"], "staff-7");
    assert_eq!(seller["latitude"], -37.8136);
    assert_eq!(seller["brand"], "BRAND_B");
}

#[tokio::test]
async fn unknown_operations_report_a_graphql_error() {
    let (app, _state) = common::test_app();
    let token = staff_token("staff-1");

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/graphql",
        Some(&token),
        Some(json!({ "query": "query { nothingHere }" })),
    )
    .await;

    // GraphQL convention: transport-level success, error in the envelope
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "Unknown operation");
}

#[tokio::test]
async fn resolver_errors_use_client_safe_messages() {
    let (app, _state) = common::test_app();
    let token = staff_token("staff-1");

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/graphql",
        Some(&token),
        Some(json!({
            "query": "query ($id: ID!) { user(id: $id) { id } }",
            "variables": { "id": "00000000-0000-0000-0000-000000000000" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "User not found");
}
