pub mod authenticator;
pub mod codec;
pub mod error;
pub mod identity;

use serde::{Deserialize, Serialize};

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use identity::{current_identity, VerifiedIdentity};

/// Claim set embedded in every issued credential.
///
/// Field names follow the registered JWT claim names so tokens interoperate
/// with standard tooling. `roles` is informational; authorization decisions
/// are made by the handlers that read it, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Role labels carried for downstream authorization decisions
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued-at timestamp (unix seconds)
    pub iat: i64,
    /// Expiry timestamp (unix seconds)
    pub exp: i64,
    /// Issuing service instance
    pub iss: String,
}
