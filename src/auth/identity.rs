use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Extensions;

use crate::auth::Claims;
use crate::error::{ApiError, MSG_INVALID_CREDENTIALS};

/// Identity of the caller after successful verification, scoped to one
/// in-flight request. Attached to the request extensions by the auth
/// middleware and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub subject: String,
    pub roles: Vec<String>,
    /// Unix seconds
    pub issued_at: i64,
    /// Unix seconds
    pub expires_at: i64,
}

impl VerifiedIdentity {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<Claims> for VerifiedIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            roles: claims.roles,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Read the identity the interception layer attached for this request.
///
/// Returns `None` when the middleware did not run (or did not attach one);
/// never panics. Callers treat `None` as unauthenticated and reject the
/// operation themselves.
pub fn current_identity(extensions: &Extensions) -> Option<VerifiedIdentity> {
    extensions.get::<VerifiedIdentity>().cloned()
}

/// Extractor form of [`current_identity`] for REST handlers. Use
/// `Option<VerifiedIdentity>` in the handler signature to decide the
/// rejection yourself.
#[async_trait]
impl<S> FromRequestParts<S> for VerifiedIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_identity(&parts.extensions)
            .ok_or_else(|| ApiError::unauthorized(MSG_INVALID_CREDENTIALS))
    }
}
