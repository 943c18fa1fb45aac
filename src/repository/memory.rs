//! In-memory repositories. The services only see the repository traits, so
//! the whole API can run against these for tests and local experiments
//! without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Product, Seller, User};
use crate::repository::{
    ProductRepository, RepositoryError, SellerRepository, UserRepository,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        self.rows.write().await.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<HashMap<Uuid, Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        self.rows.write().await.insert(product.id, product.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }
}

#[derive(Default)]
pub struct InMemorySellerRepository {
    rows: RwLock<HashMap<Uuid, Seller>>,
}

#[async_trait]
impl SellerRepository for InMemorySellerRepository {
    async fn create(&self, seller: &Seller) -> Result<(), RepositoryError> {
        self.rows.write().await.insert(seller.id, seller.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Seller>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn update(&self, seller: &Seller) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&seller.id) {
            Some(existing) => {
                *existing = seller.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Seller>, RepositoryError> {
        let rows = self.rows.read().await;
        let mut sellers: Vec<Seller> = rows.values().cloned().collect();
        // Stable ordering so pagination behaves like the SQL implementation
        sellers.sort_by(|a, b| {
            a.last_update_time
                .cmp(&b.last_update_time)
                .then(a.id.cmp(&b.id))
        });
        Ok(sellers
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}
