use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::auth::codec;
use crate::auth::error::AuthError;
use crate::auth::identity::VerifiedIdentity;
use crate::auth::Claims;
use crate::config::SecurityConfig;

/// The only component permitted to issue or accept credentials.
///
/// Constructed once at startup from injected configuration and shared
/// read-only across requests. Verification is a pure function of the
/// credential, the wall clock, and the configured secret, so it is safe to
/// call from any number of concurrent requests.
pub struct Authenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    default_ttl: Duration,
}

impl Authenticator {
    pub fn new(security: &SecurityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(security.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(security.jwt_secret.as_bytes()),
            issuer: security.jwt_issuer.clone(),
            default_ttl: Duration::hours(security.token_ttl_hours),
        }
    }

    /// Nominal lifetime applied to credentials issued by the login surface.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a fresh credential for `subject` carrying `roles`, valid for
    /// `ttl` from now.
    pub fn issue(&self, subject: &str, roles: &[String], ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: self.issuer.clone(),
        };
        codec::encode(&claims, &self.encoding_key)
    }

    /// Verify a presented credential against the current wall clock.
    pub fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify against an explicit clock. Exactly one terminal outcome per
    /// call: malformed, bad signature, bad algorithm, expired, or valid.
    pub fn verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<VerifiedIdentity, AuthError> {
        let claims = codec::decode(token, &self.decoding_key)?;
        if now.timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }
        Ok(VerifiedIdentity::from(claims))
    }
}
