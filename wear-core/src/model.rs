use serde::{Deserialize, Serialize};

/// Daily weather for one (date, zipcode) pair.
///
/// Built fresh on every successful fetch and never mutated; the session
/// drops it whenever the date or zipcode it was keyed to changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub max_temp: f64,
    pub min_temp: f64,
    pub weather_code: i32,
    pub weather_description: String,
}

/// Structured clothing advice decoded from the model's reply.
///
/// All fields are required strings; decoding doubles as schema validation,
/// so a reply missing a key or carrying a non-string value is rejected
/// before it ever reaches the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingRecommendation {
    pub head: String,
    pub torso: String,
    pub legs: String,
    pub feet: String,
    pub notes: String,
}

/// In-memory state for one interactive run.
///
/// A fetched [`Weather`] is only meaningful for the exact (date, zipcode)
/// pair that produced it, so the setters clear it on any change to either
/// field. Gender is unrestricted free text and replaced unconditionally.
#[derive(Debug, Clone)]
pub struct Session {
    pub date: String,
    pub zipcode: String,
    pub gender: String,
    pub weather: Option<Weather>,
    api_key: String,
}

impl Session {
    pub const DEFAULT_ZIPCODE: &'static str = "47803";
    pub const DEFAULT_GENDER: &'static str = "Male";

    /// Start a session with the given date (normally today) and the fixed
    /// default zipcode and gender.
    pub fn new(date: String, api_key: String) -> Self {
        Self {
            date,
            zipcode: Self::DEFAULT_ZIPCODE.to_string(),
            gender: Self::DEFAULT_GENDER.to_string(),
            weather: None,
            api_key,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the date and invalidate any fetched weather.
    pub fn set_date(&mut self, date: String) {
        self.date = date;
        self.weather = None;
    }

    /// Replace the zipcode and invalidate any fetched weather.
    pub fn set_zipcode(&mut self, zipcode: String) {
        self.zipcode = zipcode;
        self.weather = None;
    }

    /// Replace gender, including with the empty string.
    pub fn set_gender(&mut self, gender: String) {
        self.gender = gender;
    }

    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = Some(weather);
    }

    /// Weather to feed into a recommendation, present only when date,
    /// zipcode, fetched weather, and gender are all set.
    pub fn recommendation_inputs(&self) -> Option<&Weather> {
        if self.date.is_empty() || self.zipcode.is_empty() || self.gender.is_empty() {
            return None;
        }
        self.weather.as_ref()
    }
}
