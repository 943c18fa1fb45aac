pub mod auth;
pub mod products;
pub mod sellers;
pub mod users;

use axum::{
    extract::State,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;

use crate::error::ApiError;
use crate::metrics::{AppMetrics, Surface};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Assemble the full application router.
///
/// Public surface: service banner, health, metrics exposition, and login.
/// Everything else sits behind the auth interception layer.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics_exposition))
        .route("/auth/login", post(auth::login::login));

    let protected = Router::new()
        .route("/auth/whoami", get(auth::whoami::whoami))
        .route("/api/v1/users", post(users::create))
        .route("/api/v1/users/:id", get(users::get_by_id))
        .route("/api/v1/products", post(products::create))
        .route("/api/v1/products/:id", get(products::get_by_id))
        .route("/api/v1/sellers", post(sellers::create).get(sellers::list))
        .route(
            "/api/v1/sellers/:id",
            get(sellers::get_by_id)
                .put(sellers::update)
                .delete(sellers::delete),
        )
        .route("/graphql", post(crate::graphql::graphql_post))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public
        .merge(protected)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": "omni-api",
        "description": "Commerce platform API",
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics",
            "login": "/auth/login",
            "rest": "/api/v1",
            "graphql": "/graphql"
        }
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics_exposition(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
        .into_response()
}

/// Run one handler body under the standard metrics contract: count the
/// request on entry, time it, and count the response with its final status
/// code, regardless of which exit path was taken.
pub(crate) async fn instrumented<F>(
    metrics: &Arc<AppMetrics>,
    operation: &'static str,
    surface: Surface,
    fut: F,
) -> Response
where
    F: Future<Output = Result<Response, ApiError>>,
{
    metrics.inc_requests_total(operation, surface);
    let timer = metrics.request_timer(operation, surface);

    let response = match fut.await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    };

    metrics.inc_responses_total(operation, surface, response.status().as_u16());
    timer.observe();
    response
}
