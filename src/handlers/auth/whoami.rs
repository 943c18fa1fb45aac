use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::auth::VerifiedIdentity;
use crate::handlers::instrumented;
use crate::metrics::Surface;
use crate::state::AppState;

/// GET /auth/whoami - echo the identity the interception layer attached.
pub async fn whoami(State(state): State<AppState>, identity: VerifiedIdentity) -> Response {
    instrumented(&state.metrics, "whoami", Surface::Rest, async {
        Ok(Json(json!({
            "subject": identity.subject,
            "roles": identity.roles,
            "issued_at": identity.issued_at,
            "expires_at": identity.expires_at,
        }))
        .into_response())
    })
    .await
}
