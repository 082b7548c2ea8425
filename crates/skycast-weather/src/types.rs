use serde::{Deserialize, Serialize};

/// Unit system accepted by the provider's `units` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Value sent on the wire
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }
}

/// The structured result of one successful provider query.
///
/// Held transiently in view state and replaced wholesale on each successful
/// query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub city_name: String,
    pub country_code: String,
    /// Sunrise, seconds since the Unix epoch
    pub sunrise: i64,
    /// Sunset, seconds since the Unix epoch
    pub sunset: i64,
    /// Provider icon id, e.g. `04d`
    pub icon_id: String,
    pub description: String,
}

/// Provider-level outcome of a single query.
///
/// City-not-found is a normal outcome, not an error: the view keeps its
/// previous report and shows the provider's message instead.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Report(WeatherReport),
    CityNotFound {
        /// Provider message, passed through verbatim; capitalization is a
        /// display concern
        message: String,
    },
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Provider error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}
