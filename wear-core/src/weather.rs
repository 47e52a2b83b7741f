use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::codes;
use crate::error::WeatherError;
use crate::geocode::Geocoder;
use crate::model::Weather;

const FORECAST_BASE: &str = "https://api.open-meteo.com";

/// Client for the Open-Meteo daily forecast endpoint.
///
/// Resolves the zipcode through the injected [`Geocoder`], then requests the
/// daily weather code and max/min temperature for a single day
/// (start_date = end_date). One attempt per call; the menu loop decides
/// whether to retry.
pub struct WeatherClient {
    http: Client,
    base_url: String,
    geocoder: Arc<dyn Geocoder>,
}

impl WeatherClient {
    pub fn new(http: Client, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { http, base_url: FORECAST_BASE.to_string(), geocoder }
    }

    pub fn with_base_url(
        http: Client,
        geocoder: Arc<dyn Geocoder>,
        base_url: impl Into<String>,
    ) -> Self {
        Self { http, base_url: base_url.into(), geocoder }
    }

    /// Fetch the daily weather for `date` (ISO 8601 day) at `zipcode`.
    pub async fn fetch_weather(&self, date: &str, zipcode: &str) -> Result<Weather, WeatherError> {
        let coords = self.geocoder.resolve(zipcode).await?;
        debug!(date, zipcode, lat = coords.latitude, lon = coords.longitude, "fetching forecast");

        let url = format!("{}/v1/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string().as_str()),
                ("longitude", coords.longitude.to_string().as_str()),
                ("daily", "weathercode,temperature_2m_max,temperature_2m_min"),
                ("timezone", "auto"),
                ("start_date", date),
                ("end_date", date),
            ])
            .send()
            .await?;

        let body = res.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;

        let daily = parsed.daily.ok_or(WeatherError::NoData)?;

        // start_date = end_date, so each array holds exactly one entry.
        let (&code, &max_temp, &min_temp) = match (
            daily.weathercode.first(),
            daily.temperature_2m_max.first(),
            daily.temperature_2m_min.first(),
        ) {
            (Some(code), Some(max), Some(min)) => (code, max, min),
            _ => return Err(WeatherError::NoData),
        };

        Ok(Weather {
            max_temp,
            min_temp,
            weather_code: code,
            weather_description: codes::describe(code).to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<ForecastDaily>,
}

#[derive(Debug, Deserialize)]
struct ForecastDaily {
    #[serde(default)]
    weathercode: Vec<i32>,
    #[serde(default)]
    temperature_2m_max: Vec<f64>,
    #[serde(default)]
    temperature_2m_min: Vec<f64>,
}
