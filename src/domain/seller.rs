use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Brands a seller can trade under. Closed list; anything else is rejected
/// at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brand {
    BrandA,
    BrandB,
    BrandC,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::BrandA => "BRAND_A",
            Brand::BrandB => "BRAND_B",
            Brand::BrandC => "BRAND_C",
        }
    }
}

impl FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BRAND_A" => Ok(Brand::BrandA),
            "BRAND_B" => Ok(Brand::BrandB),
            "BRAND_C" => Ok(Brand::BrandC),
            other => Err(format!("unknown brand: {}", other)),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerStatus {
    Active,
    Inactive,
    Pending,
}

impl SellerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::Active => "ACTIVE",
            SellerStatus::Inactive => "INACTIVE",
            SellerStatus::Pending => "PENDING",
        }
    }
}

impl FromStr for SellerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(SellerStatus::Active),
            "INACTIVE" => Ok(SellerStatus::Inactive),
            "PENDING" => Ok(SellerStatus::Pending),
            other => Err(format!("unknown seller status: {}", other)),
        }
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seller storefront. Coordinates are derived from the postal address at
/// write time; `last_updated_by` carries the subject of the identity that
/// performed the write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: Uuid,
    pub brand: Brand,
    pub status: SellerStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: String,
    pub email: String,
    pub phone_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub last_updated_by: String,
    pub last_update_time: DateTime<Utc>,
}

fn default_country() -> String {
    "AUS".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateSellerRequest {
    pub brand: Brand,
    pub status: SellerStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub postcode: String,
    pub email: String,
    pub phone_number: String,
}

/// Partial update; only the supplied fields change.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSellerRequest {
    pub brand: Option<Brand>,
    pub status: Option<SellerStatus>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_and_status_round_trip_their_wire_names() {
        assert_eq!("BRAND_A".parse::<Brand>().unwrap(), Brand::BrandA);
        assert_eq!(Brand::BrandC.as_str(), "BRAND_C");
        assert!("BRAND_X".parse::<Brand>().is_err());

        assert_eq!("PENDING".parse::<SellerStatus>().unwrap(), SellerStatus::Pending);
        assert!("UNKNOWN".parse::<SellerStatus>().is_err());
    }

    #[test]
    fn create_request_defaults_country() {
        let req: CreateSellerRequest = serde_json::from_value(serde_json::json!({
            "brand": "BRAND_A",
            "status": "ACTIVE",
            "address": "1 Main St",
            "city": "Sydney",
            "state": "NSW",
            "postcode": "2000",
            "email": "shop@example.com",
            "phone_number": "0400000000"
        }))
        .unwrap();
        assert_eq!(req.country, "AUS");
    }

    #[test]
    fn unknown_brand_fails_deserialization() {
        let result: Result<CreateSellerRequest, _> = serde_json::from_value(serde_json::json!({
            "brand": "BRAND_X",
            "status": "ACTIVE",
            "address": "1 Main St",
            "city": "Sydney",
            "state": "NSW",
            "postcode": "2000",
            "email": "shop@example.com",
            "phone_number": "0400000000"
        }));
        assert!(result.is_err());
    }
}
