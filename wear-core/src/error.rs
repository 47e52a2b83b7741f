//! Typed errors for the two fallible clients.
//!
//! Both error kinds are recoverable from the menu's point of view: the CLI
//! prints one line and returns to the prompt, leaving the session untouched.

use thiserror::Error;

/// Failures while resolving a zipcode or fetching the daily forecast.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The geocoder returned no coordinates for the zipcode.
    #[error("No location found for zipcode '{0}'.")]
    LocationNotFound(String),

    /// The forecast body had no usable `daily` data.
    #[error("Could not retrieve weather data.")]
    NoData,

    #[error("Weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures while requesting a clothing recommendation, split by cause so
/// the caller can branch instead of getting one opaque "message failed".
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Recommendation request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from the chat endpoint; 401/403 means the
    /// API key was rejected.
    #[error("Recommendation service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    /// The service answered but the candidate list was empty.
    #[error("Recommendation service returned no choices")]
    EmptyReply,

    /// The reply content was not the instructed JSON schema.
    #[error("Could not parse recommendation reply: {0}")]
    Malformed(String),
}

impl RecommendError {
    /// True when the failure is the credential being rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Service { status: 401 | 403, .. })
    }
}
