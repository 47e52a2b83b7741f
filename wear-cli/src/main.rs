//! Binary crate for the `weatherwear` command-line tool.
//!
//! This crate focuses on:
//! - Startup (credentials, logging)
//! - The interactive menu loop
//! - Human-friendly output formatting

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wear_core::{Config, OpenMeteoGeocoder, RecommendationClient, Session, WeatherClient};

mod menu;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let api_key = match config.api_key() {
        Ok(key) => key,
        Err(err) => {
            // Missing credential aborts before the menu is entered.
            println!("{err}");
            return Ok(());
        }
    };
    println!("OpenAI API Key Loaded: {}", wear_core::config::mask_key(&api_key));

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to create HTTP client")?;

    let geocoder = Arc::new(OpenMeteoGeocoder::new(http.clone()));
    let weather_client = WeatherClient::new(http.clone(), geocoder);
    let recommendation_client = RecommendationClient::new(http, api_key.clone());

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let session = Session::new(today, api_key);

    menu::run(session, &weather_client, &recommendation_client).await
}
