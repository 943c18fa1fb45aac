use thiserror::Error;

/// Verification and issuance failures.
///
/// Every failure kind is terminal for the request that produced it. The
/// HTTP layer collapses all verification kinds except `Expired` into one
/// generic unauthorized response so the caller learns nothing about why a
/// credential was rejected.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential was presented on the request
    #[error("authorization credential is missing")]
    MissingCredential,

    /// Bearer framing or token structure is invalid
    #[error("credential is malformed")]
    Malformed,

    /// Signature does not verify against the configured secret
    #[error("credential signature is invalid")]
    Signature,

    /// Token declares a signing algorithm outside the allowed family
    #[error("credential signing algorithm is not allowed")]
    AlgorithmMismatch,

    /// Claims verified but the credential is past its expiry
    #[error("credential has expired")]
    Expired,

    /// Issuance-side serialization failure, surfaced as an internal fault
    #[error("failed to encode credential")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}
