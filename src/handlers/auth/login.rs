use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};

use crate::domain::{LoginRequest, LoginResponse};
use crate::handlers::instrumented;
use crate::metrics::Surface;
use crate::state::AppState;

/// POST /auth/login - authenticate and receive a bearer credential.
///
/// The only place credentials are issued. A failed check returns one
/// generic unauthorized response whether the email or the password was
/// wrong.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    instrumented(&state.metrics, "login", Surface::Rest, async {
        let user = state.users.authenticate(&req.email, &req.password).await?;

        let ttl = state.authenticator.default_ttl();
        let token = state
            .authenticator
            .issue(&user.id.to_string(), &user.roles, ttl)?;

        Ok(Json(LoginResponse {
            token,
            expires_in: ttl.num_seconds(),
        })
        .into_response())
    })
    .await
}
