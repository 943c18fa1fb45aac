//! GraphQL call path.
//!
//! The GraphQL engine itself is an external collaborator; what lives here is
//! the resolver surface and the authorization contract. Requests arrive in
//! the standard `{ query, operationName, variables }` envelope, the target
//! operation is selected by name, and each resolver receives a typed
//! [`ResolverContext`] carrying the identity the interception layer
//! attached. Arguments are read from `variables`.

pub mod resolvers;

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::VerifiedIdentity;
use crate::error::ApiError;
use crate::handlers::instrumented;
use crate::metrics::Surface;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
}

impl GraphQLResponse {
    fn data(value: Value) -> Self {
        Self {
            data: Some(value),
            errors: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(vec![GraphQLError {
                message: message.into(),
            }]),
        }
    }
}

/// Request-scoped context threaded into every resolver. Strongly typed so
/// resolvers never reach into dynamic request state.
pub struct ResolverContext {
    pub identity: Option<VerifiedIdentity>,
}

/// Operations this surface resolves, mutations first. Order matters for
/// query-text matching: names that contain another name ("createUser" vs
/// "user", "sellers" vs "seller") must come before it.
const OPERATIONS: &[&str] = &[
    "createUser",
    "createProduct",
    "createSeller",
    "updateSeller",
    "deleteSeller",
    "sellers",
    "seller",
    "user",
    "product",
];

fn select_operation(req: &GraphQLRequest) -> Option<&'static str> {
    if let Some(name) = &req.operation_name {
        return OPERATIONS.iter().copied().find(|op| *op == name.as_str());
    }
    OPERATIONS
        .iter()
        .copied()
        .find(|op| req.query.contains(*op))
}

/// POST /graphql
pub async fn graphql_post(
    State(state): State<AppState>,
    identity: Option<VerifiedIdentity>,
    Json(req): Json<GraphQLRequest>,
) -> Response {
    let operation = select_operation(&req);
    let label = operation.unwrap_or("unknown");

    instrumented(&state.metrics, label, Surface::Graphql, async {
        let body = match operation {
            Some(op) => {
                let ctx = ResolverContext { identity };
                execute(&state, &ctx, op, &req.variables).await
            }
            None => GraphQLResponse::error("Unknown operation"),
        };
        Ok(Json(body).into_response())
    })
    .await
}

async fn execute(
    state: &AppState,
    ctx: &ResolverContext,
    operation: &str,
    variables: &Map<String, Value>,
) -> GraphQLResponse {
    let result = match operation {
        "user" => resolvers::user(state, variables).await,
        "createUser" => resolvers::create_user(state, variables).await,
        "product" => resolvers::product(state, variables).await,
        "createProduct" => resolvers::create_product(state, variables).await,
        "seller" => resolvers::seller(state, variables).await,
        "sellers" => resolvers::sellers(state, variables).await,
        "createSeller" => resolvers::create_seller(state, ctx, variables).await,
        "updateSeller" => resolvers::update_seller(state, ctx, variables).await,
        "deleteSeller" => resolvers::delete_seller(state, variables).await,
        _ => Err(ApiError::bad_request("Unknown operation")),
    };

    match result {
        Ok(value) => {
            let mut data = Map::new();
            data.insert(operation.to_string(), value);
            GraphQLResponse::data(Value::Object(data))
        }
        // ApiError messages are already client-safe
        Err(err) => GraphQLResponse::error(err.message()),
    }
}
