use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding provider failed: {0}")]
    Provider(String),
}

/// Address-to-coordinates lookup. The seller service refuses to persist an
/// address it could not geocode, so implementations should only fail when
/// the provider itself is unavailable.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn locate(
        &self,
        address: &str,
        city: &str,
        state: &str,
        country: &str,
        postcode: &str,
    ) -> Result<Coordinates, GeocodeError>;
}

/// Table-driven stand-in for a real geocoding provider. Covers the cities
/// the platform launched with and falls back to a fixed point for
/// everything else.
pub struct StaticGeocoder;

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn locate(
        &self,
        address: &str,
        city: &str,
        _state: &str,
        country: &str,
        postcode: &str,
    ) -> Result<Coordinates, GeocodeError> {
        tracing::debug!(%address, %city, %country, %postcode, "geocoding address");

        let coordinates = match city {
            "Sydney" => Coordinates {
                latitude: -33.8688,
                longitude: 151.2093,
            },
            "Melbourne" => Coordinates {
                latitude: -37.8136,
                longitude: 144.9631,
            },
            "Brisbane" => Coordinates {
                latitude: -27.4698,
                longitude: 153.0251,
            },
            _ => Coordinates {
                latitude: -34.0,
                longitude: 151.0,
            },
        };
        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_cities_resolve_to_their_coordinates() {
        let geocoder = StaticGeocoder;
        let sydney = geocoder
            .locate("1 Main St", "Sydney", "NSW", "AUS", "2000")
            .await
            .unwrap();
        assert_eq!(sydney.latitude, -33.8688);
        assert_eq!(sydney.longitude, 151.2093);

        let melbourne = geocoder
            .locate("1 Main St", "Melbourne", "VIC", "AUS", "3000")
            .await
            .unwrap();
        assert_eq!(melbourne.latitude, -37.8136);
    }

    #[tokio::test]
    async fn unknown_city_falls_back_to_default_point() {
        let geocoder = StaticGeocoder;
        let other = geocoder
            .locate("1 Main St", "Perth", "WA", "AUS", "6000")
            .await
            .unwrap();
        assert_eq!(other.latitude, -34.0);
        assert_eq!(other.longitude, 151.0);
    }
}
