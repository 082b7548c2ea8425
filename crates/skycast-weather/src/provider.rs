//! Current-weather client for the OpenWeatherMap API.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{QueryOutcome, Units, WeatherError, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
    units: Units,
}

impl WeatherProvider {
    pub fn new(api_key: &str, units: Units) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, units, DEFAULT_BASE_URL)
    }

    /// Build a provider against a non-default base URL (tests point this at
    /// a mock server).
    pub fn with_base_url(
        api_key: &str,
        units: Units,
        base_url: &str,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            units,
        })
    }

    /// Query current weather for a city by name.
    ///
    /// The body is decoded regardless of HTTP status; the provider mirrors
    /// its status into the body's `cod` field, which selects the outcome.
    #[instrument(skip(self), level = "info")]
    pub async fn current_weather(&self, city: &str) -> Result<QueryOutcome, WeatherError> {
        let url = format!(
            "{}/weather?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city),
            self.units.as_query_value(),
            self.api_key,
        );

        let response = self.client.get(&url).send().await?;
        let http_status = response.status();

        let body: ApiResponse = response.json().await.map_err(|e| {
            WeatherError::Parse(format!("invalid provider body (HTTP {}): {}", http_status, e))
        })?;

        if body.cod != 200 {
            let message = body
                .message
                .unwrap_or_else(|| "unknown provider error".to_string());
            return match body.cod {
                404 => {
                    tracing::info!("City not found: {}", city);
                    Ok(QueryOutcome::CityNotFound { message })
                }
                401 => Err(WeatherError::InvalidApiKey),
                status => Err(WeatherError::Api { status, message }),
            };
        }

        let report = body.into_report()?;
        tracing::info!(
            "Fetched weather for {}, {}",
            report.city_name,
            report.country_code
        );
        Ok(QueryOutcome::Report(report))
    }
}

/// Wire shape of the provider response.
///
/// Only `cod` is guaranteed; the data fields are absent on error bodies.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(deserialize_with = "status_code")]
    cod: u16,
    message: Option<String>,
    main: Option<ApiMain>,
    name: Option<String>,
    weather: Option<Vec<ApiCondition>>,
    sys: Option<ApiSys>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

/// The provider encodes `cod` as a number on success and a string on errors.
fn status_code<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(u16),
        Text(String),
    }

    match Code::deserialize(deserializer)? {
        Code::Number(n) => Ok(n),
        Code::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

impl ApiResponse {
    fn into_report(self) -> Result<WeatherReport, WeatherError> {
        let missing =
            |field: &str| WeatherError::Parse(format!("missing field `{}` in provider body", field));

        let main = self.main.ok_or_else(|| missing("main"))?;
        let name = self.name.ok_or_else(|| missing("name"))?;
        let sys = self.sys.ok_or_else(|| missing("sys"))?;
        let condition = self
            .weather
            .and_then(|mut conditions| {
                if conditions.is_empty() {
                    None
                } else {
                    Some(conditions.remove(0))
                }
            })
            .ok_or_else(|| missing("weather[0]"))?;

        Ok(WeatherReport {
            temperature: main.temp,
            city_name: name,
            country_code: sys.country,
            sunrise: sys.sunrise,
            sunset: sys.sunset,
            icon_id: condition.icon,
            description: condition.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: serde_json::Value) -> ApiResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_cod_as_number() {
        let resp = decode(serde_json::json!({ "cod": 200 }));
        assert_eq!(resp.cod, 200);
    }

    #[test]
    fn test_cod_as_string() {
        let resp = decode(serde_json::json!({ "cod": "404", "message": "city not found" }));
        assert_eq!(resp.cod, 404);
        assert_eq!(resp.message.as_deref(), Some("city not found"));
    }

    #[test]
    fn test_non_numeric_cod_is_rejected() {
        let result: Result<ApiResponse, _> =
            serde_json::from_value(serde_json::json!({ "cod": "oops" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_report_requires_data_fields() {
        let resp = decode(serde_json::json!({ "cod": 200, "name": "Kyiv" }));
        let err = resp.into_report().unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[test]
    fn test_into_report_requires_nonempty_conditions() {
        let resp = decode(serde_json::json!({
            "cod": 200,
            "name": "Kyiv",
            "main": { "temp": 1.0 },
            "weather": [],
            "sys": { "country": "UA", "sunrise": 0, "sunset": 0 }
        }));
        let err = resp.into_report().unwrap_err();
        assert!(err.to_string().contains("weather[0]"));
    }
}
