//! Resolver functions for the GraphQL surface. Each one validates its
//! arguments from the variables map, delegates to the same service layer
//! the REST handlers use, and returns a JSON value for the response
//! envelope.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::{CreateProductRequest, CreateSellerRequest, UpdateSellerRequest};
use crate::error::{ApiError, MSG_INVALID_CREDENTIALS};
use crate::graphql::ResolverContext;
use crate::state::AppState;

fn to_json<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!("failed to serialize resolver result: {}", e);
        ApiError::internal_server_error("Failed to format response")
    })
}

fn uuid_arg(variables: &Map<String, Value>, name: &str) -> Result<Uuid, ApiError> {
    variables
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::bad_request(format!("Missing variable: {}", name)))?
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Variable {} must be a UUID", name)))
}

fn string_arg(variables: &Map<String, Value>, name: &str) -> Result<String, ApiError> {
    variables
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| ApiError::bad_request(format!("Missing variable: {}", name)))
}

fn input_arg<T: DeserializeOwned>(
    variables: &Map<String, Value>,
    name: &str,
) -> Result<T, ApiError> {
    let value = variables
        .get(name)
        .cloned()
        .ok_or_else(|| ApiError::bad_request(format!("Missing variable: {}", name)))?;
    serde_json::from_value(value)
        .map_err(|e| ApiError::bad_request(format!("Invalid {}: {}", name, e)))
}

fn require_identity(ctx: &ResolverContext) -> Result<&crate::auth::VerifiedIdentity, ApiError> {
    ctx.identity
        .as_ref()
        .ok_or_else(|| ApiError::unauthorized(MSG_INVALID_CREDENTIALS))
}

pub async fn user(state: &AppState, variables: &Map<String, Value>) -> Result<Value, ApiError> {
    let id = uuid_arg(variables, "id")?;
    let user = state
        .users
        .get_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    to_json(&user)
}

pub async fn create_user(
    state: &AppState,
    variables: &Map<String, Value>,
) -> Result<Value, ApiError> {
    let name = string_arg(variables, "name")?;
    let email = string_arg(variables, "email")?;
    let user = state.users.create_user(name, email).await?;
    to_json(&user)
}

pub async fn product(state: &AppState, variables: &Map<String, Value>) -> Result<Value, ApiError> {
    let id = uuid_arg(variables, "id")?;
    let product = state
        .products
        .get_product(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;
    to_json(&product)
}

pub async fn create_product(
    state: &AppState,
    variables: &Map<String, Value>,
) -> Result<Value, ApiError> {
    let input: CreateProductRequest = input_arg(variables, "input")?;
    let product = state.products.create_product(input).await?;
    to_json(&product)
}

pub async fn seller(state: &AppState, variables: &Map<String, Value>) -> Result<Value, ApiError> {
    let id = uuid_arg(variables, "id")?;
    let seller = state
        .sellers
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Seller not found"))?;
    to_json(&seller)
}

pub async fn sellers(state: &AppState, variables: &Map<String, Value>) -> Result<Value, ApiError> {
    let limit = variables.get("limit").and_then(Value::as_i64).unwrap_or(10);
    let offset = variables.get("offset").and_then(Value::as_i64).unwrap_or(0);
    if limit <= 0 {
        return Err(ApiError::bad_request("Invalid limit parameter"));
    }
    if offset < 0 {
        return Err(ApiError::bad_request("Invalid offset parameter"));
    }
    let sellers = state.sellers.list(limit, offset).await?;
    to_json(&sellers)
}

pub async fn create_seller(
    state: &AppState,
    ctx: &ResolverContext,
    variables: &Map<String, Value>,
) -> Result<Value, ApiError> {
    let identity = require_identity(ctx)?;
    let input: CreateSellerRequest = input_arg(variables, "input")?;
    let seller = state.sellers.create(input, &identity.subject).await?;
    to_json(&seller)
}

pub async fn update_seller(
    state: &AppState,
    ctx: &ResolverContext,
    variables: &Map<String, Value>,
) -> Result<Value, ApiError> {
    let identity = require_identity(ctx)?;
    let id = uuid_arg(variables, "id")?;
    let input: UpdateSellerRequest = input_arg(variables, "input")?;
    let seller = state.sellers.update(id, input, &identity.subject).await?;
    to_json(&seller)
}

pub async fn delete_seller(
    state: &AppState,
    variables: &Map<String, Value>,
) -> Result<Value, ApiError> {
    let id = uuid_arg(variables, "id")?;
    state.sellers.delete(id).await?;
    Ok(Value::Bool(true))
}
