pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Product, Seller, User};

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("stored value could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
}

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn create(&self, seller: &Seller) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Seller>, RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn update(&self, seller: &Seller) -> Result<(), RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Seller>, RepositoryError>;
}
