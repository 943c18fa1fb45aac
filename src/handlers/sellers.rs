use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::VerifiedIdentity;
use crate::domain::{CreateSellerRequest, UpdateSellerRequest};
use crate::error::{ApiError, MSG_INVALID_CREDENTIALS};
use crate::handlers::instrumented;
use crate::metrics::Surface;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/sellers
///
/// Writes need an author for the audit trail, so the handler checks the
/// propagated identity itself and rejects when it is absent.
pub async fn create(
    State(state): State<AppState>,
    identity: Option<VerifiedIdentity>,
    Json(req): Json<CreateSellerRequest>,
) -> Response {
    instrumented(&state.metrics, "create_seller", Surface::Rest, async {
        let identity =
            identity.ok_or_else(|| ApiError::unauthorized(MSG_INVALID_CREDENTIALS))?;
        let seller = state.sellers.create(req, &identity.subject).await?;
        Ok((StatusCode::CREATED, Json(seller)).into_response())
    })
    .await
}

/// GET /api/v1/sellers/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    instrumented(&state.metrics, "get_seller_by_id", Surface::Rest, async {
        let seller = state
            .sellers
            .get(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Seller not found"))?;
        Ok(Json(seller).into_response())
    })
    .await
}

/// PUT /api/v1/sellers/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    identity: Option<VerifiedIdentity>,
    Json(req): Json<UpdateSellerRequest>,
) -> Response {
    instrumented(&state.metrics, "update_seller", Surface::Rest, async {
        let identity =
            identity.ok_or_else(|| ApiError::unauthorized(MSG_INVALID_CREDENTIALS))?;
        let seller = state.sellers.update(id, req, &identity.subject).await?;
        Ok(Json(seller).into_response())
    })
    .await
}

/// DELETE /api/v1/sellers/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    instrumented(&state.metrics, "delete_seller", Surface::Rest, async {
        state.sellers.delete(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    })
    .await
}

/// GET /api/v1/sellers
pub async fn list(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    instrumented(&state.metrics, "list_sellers", Surface::Rest, async {
        let limit = query.limit.unwrap_or(10);
        if limit <= 0 {
            return Err(ApiError::bad_request("Invalid limit parameter"));
        }
        let offset = query.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ApiError::bad_request("Invalid offset parameter"));
        }

        let sellers = state.sellers.list(limit, offset).await?;
        Ok(Json(sellers).into_response())
    })
    .await
}
