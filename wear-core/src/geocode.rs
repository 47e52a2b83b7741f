//! Zipcode to coordinate resolution via the Open-Meteo geocoding API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::WeatherError;

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com";

/// Geographic coordinates for a resolved postal code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolves a US zipcode to coordinates.
///
/// Trait seam so the weather client can be tested without the real
/// geocoding service.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, zipcode: &str) -> Result<Coordinates, WeatherError>;
}

/// Production geocoder backed by Open-Meteo's search endpoint (no API key).
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client) -> Self {
        Self { http, base_url: GEOCODING_BASE.to_string() }
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, zipcode: &str) -> Result<Coordinates, WeatherError> {
        let url = format!("{}/v1/search", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", zipcode),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
                ("countryCode", "US"),
            ])
            .send()
            .await?;

        let parsed: GeocodingResponse = res.error_for_status()?.json().await?;

        let first = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(zipcode.to_string()))?;

        debug!(zipcode, lat = first.latitude, lon = first.longitude, "resolved zipcode");

        Ok(Coordinates { latitude: first.latitude, longitude: first.longitude })
    }
}
