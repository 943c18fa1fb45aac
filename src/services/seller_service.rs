use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateSellerRequest, Seller, UpdateSellerRequest};
use crate::localization::Geocoder;
use crate::repository::{RepositoryError, SellerRepository};
use crate::services::ServiceError;

/// Seller storefront management. Every write re-derives coordinates from
/// the postal address and stamps the audit fields from the verified
/// identity of the caller.
#[derive(Clone)]
pub struct SellerService {
    repo: Arc<dyn SellerRepository>,
    geocoder: Arc<dyn Geocoder>,
}

impl SellerService {
    pub fn new(repo: Arc<dyn SellerRepository>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { repo, geocoder }
    }

    pub async fn create(
        &self,
        req: CreateSellerRequest,
        updated_by: &str,
    ) -> Result<Seller, ServiceError> {
        let coordinates = self
            .geocoder
            .locate(&req.address, &req.city, &req.state, &req.country, &req.postcode)
            .await?;

        let seller = Seller {
            id: Uuid::new_v4(),
            brand: req.brand,
            status: req.status,
            address: req.address,
            city: req.city,
            state: req.state,
            country: req.country,
            postcode: req.postcode,
            email: req.email,
            phone_number: req.phone_number,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            last_updated_by: updated_by.to_string(),
            last_update_time: Utc::now(),
        };
        self.repo.create(&seller).await?;
        tracing::info!(seller_id = %seller.id, updated_by = %updated_by, "seller created");
        Ok(seller)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Seller>, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        updates: UpdateSellerRequest,
        updated_by: &str,
    ) -> Result<Seller, ServiceError> {
        let mut seller = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("seller {} not found", id)))?;

        if let Some(brand) = updates.brand {
            seller.brand = brand;
        }
        if let Some(status) = updates.status {
            seller.status = status;
        }
        if let Some(address) = updates.address {
            seller.address = address;
        }
        if let Some(city) = updates.city {
            seller.city = city;
        }
        if let Some(state) = updates.state {
            seller.state = state;
        }
        if let Some(country) = updates.country {
            seller.country = country;
        }
        if let Some(postcode) = updates.postcode {
            seller.postcode = postcode;
        }
        if let Some(email) = updates.email {
            seller.email = email;
        }
        if let Some(phone_number) = updates.phone_number {
            seller.phone_number = phone_number;
        }

        // Re-geocode unconditionally; cheap for the static provider and the
        // address may have changed in any of five fields.
        let coordinates = self
            .geocoder
            .locate(
                &seller.address,
                &seller.city,
                &seller.state,
                &seller.country,
                &seller.postcode,
            )
            .await?;
        seller.latitude = coordinates.latitude;
        seller.longitude = coordinates.longitude;

        seller.last_updated_by = updated_by.to_string();
        seller.last_update_time = Utc::now();

        self.repo.update(&seller).await?;
        tracing::info!(seller_id = %id, updated_by = %updated_by, "seller updated");
        Ok(seller)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(seller_id = %id, "seller deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                Err(ServiceError::NotFound(format!("seller {} not found", id)))
            }
            Err(other) => Err(other.into()),
        }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Seller>, ServiceError> {
        Ok(self.repo.list(limit, offset).await?)
    }
}
