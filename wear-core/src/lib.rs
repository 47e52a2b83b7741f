//! Core library for the `weatherwear` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WMO weather-code table
//! - The geocoder, weather, and recommendation clients
//! - Shared domain models (session, weather, recommendation)
//!
//! It is used by `wear-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod recommend;
pub mod weather;

pub use config::Config;
pub use error::{RecommendError, WeatherError};
pub use geocode::{Coordinates, Geocoder, OpenMeteoGeocoder};
pub use model::{ClothingRecommendation, Session, Weather};
pub use recommend::RecommendationClient;
pub use weather::WeatherClient;
