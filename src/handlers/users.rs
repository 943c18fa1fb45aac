use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::domain::CreateUserRequest;
use crate::error::ApiError;
use crate::handlers::instrumented;
use crate::metrics::Surface;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(State(state): State<AppState>, Json(req): Json<CreateUserRequest>) -> Response {
    instrumented(&state.metrics, "create_user", Surface::Rest, async {
        let user = state.users.create_user(req.name, req.email).await?;
        Ok((StatusCode::CREATED, Json(user)).into_response())
    })
    .await
}

/// GET /api/v1/users/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    instrumented(&state.metrics, "get_user", Surface::Rest, async {
        let user = state
            .users
            .get_user(id)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))?;
        Ok(Json(user).into_response())
    })
    .await
}
