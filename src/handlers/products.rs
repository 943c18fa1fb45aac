use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::domain::CreateProductRequest;
use crate::error::ApiError;
use crate::handlers::instrumented;
use crate::metrics::Surface;
use crate::state::AppState;

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Response {
    instrumented(&state.metrics, "create_product", Surface::Rest, async {
        let product = state.products.create_product(req).await?;
        Ok((StatusCode::CREATED, Json(product)).into_response())
    })
    .await
}

/// GET /api/v1/products/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    instrumented(&state.metrics, "get_product", Surface::Rest, async {
        let product = state
            .products
            .get_product(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Product not found"))?;
        Ok(Json(product).into_response())
    })
    .await
}
