pub mod product_service;
pub mod seller_service;
pub mod user_service;

use thiserror::Error;

use crate::localization::GeocodeError;
use crate::repository::RepositoryError;

pub use product_service::ProductService;
pub use seller_service::SellerService;
pub use user_service::UserService;

/// Business-logic failures. The HTTP layer maps these onto status codes;
/// repository and geocoding detail never reaches a response body.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Deliberately carries no detail about which part of the credential
    /// pair was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Geocoding(#[from] GeocodeError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
