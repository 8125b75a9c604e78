use crate::api::{Geocoder, decode_json, http_client, join_url};
use crate::errors::ApiError;
use crate::types::geo::Coordinates;
use async_trait::async_trait;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use std::time::Duration;

/// Nominatim-style search endpoint. Only the first result is used.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
}

/// Nominatim devuelve lat/lon como strings.
#[serde_as]
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    #[serde_as(as = "DisplayFromStr")]
    lat: f64,
    #[serde_as(as = "DisplayFromStr")]
    lon: f64,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates, ApiError> {
        let response = self
            .http
            .get(join_url(&self.base_url, "search"))
            .query(&[("format", "json"), ("limit", "1"), ("q", address)])
            .send()
            .await?;
        let places: Vec<NominatimPlace> = decode_json(response).await?;
        let first = places.into_iter().next().ok_or_else(|| {
            ApiError::InvalidPayload(format!("no results for address '{}'", address))
        })?;
        Coordinates::new(first.lat, first.lon)
    }
}
