use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::Authenticator;
use crate::config::{AppConfig, SecurityConfig};
use crate::localization::{Geocoder, StaticGeocoder};
use crate::metrics::AppMetrics;
use crate::repository::postgres::{
    PostgresProductRepository, PostgresSellerRepository, PostgresUserRepository,
};
use crate::repository::{ProductRepository, SellerRepository, UserRepository};
use crate::services::{ProductService, SellerService, UserService};

/// Shared per-process dependencies, cloned cheaply into every request.
/// Everything in here is immutable after startup; concurrent requests share
/// it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
    pub users: UserService,
    pub products: ProductService,
    pub sellers: SellerService,
    pub metrics: Arc<AppMetrics>,
}

impl AppState {
    pub fn new(
        security: &SecurityConfig,
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        sellers: Arc<dyn SellerRepository>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            authenticator: Arc::new(Authenticator::new(security)),
            users: UserService::new(users),
            products: ProductService::new(products),
            sellers: SellerService::new(sellers, geocoder),
            metrics: Arc::new(AppMetrics::default()),
        }
    }

    /// Production wiring: PostgreSQL repositories and the static geocoder.
    pub fn postgres(config: &AppConfig, pool: PgPool) -> Self {
        Self::new(
            &config.security,
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresProductRepository::new(pool.clone())),
            Arc::new(PostgresSellerRepository::new(pool)),
            Arc::new(StaticGeocoder),
        )
    }
}
