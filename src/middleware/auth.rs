use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::AuthError;
use crate::error::ApiError;
use crate::state::AppState;

/// Request interception layer: the synchronous gate every protected request
/// passes through before reaching business logic.
///
/// Extracts the bearer credential, verifies it, and attaches the resulting
/// [`crate::auth::VerifiedIdentity`] to the request extensions. On any
/// failure the request is rejected here and never reaches a handler. No
/// other side effects: no logging, no storage access.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;
    let identity = state.authenticator.verify(&token)?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Pull the token out of the `Authorization` header.
///
/// Framing contract: exactly two space-separated segments, the first being
/// the scheme keyword `Bearer` (case-insensitive). A missing header is
/// distinct from bad framing so the error taxonomy stays honest, even
/// though both collapse to the same response wording.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;
    let value = value.to_str().map_err(|_| AuthError::Malformed)?;

    let segments: Vec<&str> = value.split(' ').collect();
    if segments.len() != 2 {
        return Err(AuthError::Malformed);
    }
    if !segments[0].eq_ignore_ascii_case("bearer") {
        return Err(AuthError::Malformed);
    }
    if segments[1].is_empty() {
        return Err(AuthError::Malformed);
    }
    Ok(segments[1].to_string())
}
