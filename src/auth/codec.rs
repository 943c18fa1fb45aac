use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::error::AuthError;
use crate::auth::Claims;

/// The single signing algorithm family this service accepts. Tokens that
/// declare anything else are rejected before signature verification, which
/// closes off algorithm-confusion attacks.
pub const ALLOWED_ALGORITHM: Algorithm = Algorithm::HS256;

/// Sign a claim set into a compact token string.
pub fn encode(claims: &Claims, key: &EncodingKey) -> Result<String, AuthError> {
    jsonwebtoken::encode(&Header::new(ALLOWED_ALGORITHM), claims, key).map_err(AuthError::Encoding)
}

/// Verify signature and structure and return the embedded claims.
///
/// Expiry is deliberately NOT checked here. The codec answers "is this a
/// token we signed", the `Authenticator` answers "is it still good".
pub fn decode(token: &str, key: &DecodingKey) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(ALLOWED_ALGORITHM);
    validation.validate_exp = false;

    match jsonwebtoken::decode::<Claims>(token, key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(err) => Err(match err.kind() {
            ErrorKind::InvalidSignature => AuthError::Signature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                AuthError::AlgorithmMismatch
            }
            _ => AuthError::Malformed,
        }),
    }
}
