use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateProductRequest, Product};
use crate::repository::ProductRepository;
use crate::services::ServiceError;

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_product(&self, req: CreateProductRequest) -> Result<Product, ServiceError> {
        if req.name.trim().is_empty() {
            return Err(ServiceError::Validation("name is required".to_string()));
        }
        if req.sku.trim().is_empty() {
            return Err(ServiceError::Validation("sku is required".to_string()));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            sku: req.sku,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&product).await?;
        tracing::info!(product_id = %product.id, sku = %product.sku, "product created");
        Ok(product)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Option<Product>, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryProductRepository;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::default()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let products = service();
        let created = products
            .create_product(CreateProductRequest {
                name: "Widget".to_string(),
                description: "A widget".to_string(),
                sku: "W-100".to_string(),
            })
            .await
            .unwrap();

        let fetched = products.get_product(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.sku, "W-100");
    }

    #[tokio::test]
    async fn create_requires_name_and_sku() {
        let products = service();
        let missing_sku = products
            .create_product(CreateProductRequest {
                name: "Widget".to_string(),
                description: String::new(),
                sku: "  ".to_string(),
            })
            .await;
        assert!(matches!(missing_sku, Err(ServiceError::Validation(_))));
    }
}
