//! PostgreSQL repositories, wired in by `main`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::{Brand, Product, Seller, SellerStatus, User};
use crate::repository::{
    ProductRepository, RepositoryError, SellerRepository, UserRepository,
};

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, roles, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.roles)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, roles, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, roles, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO products (id, name, description, sku, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.sku)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, sku, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }
}

pub struct PostgresSellerRepository {
    pool: PgPool,
}

impl PostgresSellerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELLER_COLUMNS: &str = "id, brand, status, address, city, state, country, postcode, \
                              email, phone_number, latitude, longitude, last_updated_by, \
                              last_update_time";

/// Brand and status are stored as their wire names in TEXT columns, so rows
/// are mapped by hand instead of deriving `FromRow`.
fn row_to_seller(row: &PgRow) -> Result<Seller, RepositoryError> {
    let brand: String = row.try_get("brand")?;
    let status: String = row.try_get("status")?;
    Ok(Seller {
        id: row.try_get("id")?,
        brand: brand.parse::<Brand>().map_err(RepositoryError::Decode)?,
        status: status
            .parse::<SellerStatus>()
            .map_err(RepositoryError::Decode)?,
        address: row.try_get("address")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        country: row.try_get("country")?,
        postcode: row.try_get("postcode")?,
        email: row.try_get("email")?,
        phone_number: row.try_get("phone_number")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        last_updated_by: row.try_get("last_updated_by")?,
        last_update_time: row.try_get("last_update_time")?,
    })
}

#[async_trait]
impl SellerRepository for PostgresSellerRepository {
    async fn create(&self, seller: &Seller) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO sellers (id, brand, status, address, city, state, country, postcode, \
             email, phone_number, latitude, longitude, last_updated_by, last_update_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(seller.id)
        .bind(seller.brand.as_str())
        .bind(seller.status.as_str())
        .bind(&seller.address)
        .bind(&seller.city)
        .bind(&seller.state)
        .bind(&seller.country)
        .bind(&seller.postcode)
        .bind(&seller.email)
        .bind(&seller.phone_number)
        .bind(seller.latitude)
        .bind(seller.longitude)
        .bind(&seller.last_updated_by)
        .bind(seller.last_update_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Seller>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sellers WHERE id = $1",
            SELLER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_seller).transpose()
    }

    async fn update(&self, seller: &Seller) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE sellers
             SET brand = $2, status = $3, address = $4, city = $5, state = $6, country = $7, \
                 postcode = $8, email = $9, phone_number = $10, latitude = $11, longitude = $12, \
                 last_updated_by = $13, last_update_time = $14
             WHERE id = $1",
        )
        .bind(seller.id)
        .bind(seller.brand.as_str())
        .bind(seller.status.as_str())
        .bind(&seller.address)
        .bind(&seller.city)
        .bind(&seller.state)
        .bind(&seller.country)
        .bind(&seller.postcode)
        .bind(&seller.email)
        .bind(&seller.phone_number)
        .bind(seller.latitude)
        .bind(seller.longitude)
        .bind(&seller.last_updated_by)
        .bind(seller.last_update_time)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM sellers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Seller>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sellers ORDER BY last_update_time, id LIMIT $1 OFFSET $2",
            SELLER_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_seller).collect()
    }
}
