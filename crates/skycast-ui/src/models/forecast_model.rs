//! Forecast view model.
//!
//! Single source of truth for the forecast screen. Every query is tagged
//! with a generation; a result from a superseded generation is dropped, so
//! the display always reflects the last-issued query.

use skycast_weather::{QueryOutcome, WeatherReport};

use crate::services::WeatherServiceError;

/// Notice shown in the failure panel.
///
/// A notice never clears the last report; the report stays on screen with
/// the notice above it, and the next successful query removes the notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The provider did not recognize the requested city
    CityNotFound { message: String },
    /// The query failed before the provider produced a verdict
    Error { message: String },
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::CityNotFound { message } | Notice::Error { message } => message,
        }
    }
}

/// Handle for one issued query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub generation: u64,
    pub city: String,
}

#[derive(Debug)]
pub struct ForecastModel {
    fallback_city: String,
    loading: bool,
    generation: u64,
    weather: Option<WeatherReport>,
    notice: Option<Notice>,
}

impl ForecastModel {
    pub fn new(fallback_city: impl Into<String>) -> Self {
        Self {
            fallback_city: fallback_city.into(),
            loading: false,
            generation: 0,
            weather: None,
            notice: None,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn fallback_city(&self) -> &str {
        &self.fallback_city
    }

    /// Issue a new query. An empty or blank input queries the fallback city.
    pub fn begin_query(&mut self, raw_input: &str) -> QueryTicket {
        let city = match raw_input.trim() {
            "" => self.fallback_city.clone(),
            trimmed => trimmed.to_string(),
        };

        self.generation += 1;
        self.loading = true;
        tracing::debug!("Issued query #{} for {}", self.generation, city);

        QueryTicket {
            generation: self.generation,
            city,
        }
    }

    /// Apply the result of a query.
    ///
    /// Returns false when the result belongs to a superseded generation and
    /// was dropped without touching the view state.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<QueryOutcome, WeatherServiceError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!("Dropped result for superseded query #{}", generation);
            return false;
        }

        self.loading = false;
        match result {
            Ok(QueryOutcome::Report(report)) => {
                self.weather = Some(report);
                self.notice = None;
            }
            Ok(QueryOutcome::CityNotFound { message }) => {
                self.notice = Some(Notice::CityNotFound { message });
            }
            Err(e) => {
                self.notice = Some(Notice::Error {
                    message: e.to_string(),
                });
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(city: &str, temperature: f64) -> WeatherReport {
        WeatherReport {
            temperature,
            city_name: city.to_string(),
            country_code: "UA".to_string(),
            sunrise: 1_699_937_416,
            sunset: 1_699_970_573,
            icon_id: "04d".to_string(),
            description: "overcast clouds".to_string(),
        }
    }

    #[test]
    fn test_blank_input_queries_fallback_city() {
        let mut model = ForecastModel::new("Kyiv");

        assert_eq!(model.begin_query("").city, "Kyiv");
        assert_eq!(model.begin_query("   ").city, "Kyiv");
        assert_eq!(model.begin_query(" Lviv ").city, "Lviv");
    }

    #[test]
    fn test_successful_query_replaces_report_and_clears_notice() {
        let mut model = ForecastModel::new("Kyiv");

        let ticket = model.begin_query("Nowhere");
        model.apply(
            ticket.generation,
            Ok(QueryOutcome::CityNotFound {
                message: "city not found".to_string(),
            }),
        );
        assert!(model.notice().is_some());

        let ticket = model.begin_query("Kyiv");
        assert!(model.loading());
        assert!(model.apply(ticket.generation, Ok(QueryOutcome::Report(report("Kyiv", 7.46)))));

        assert!(!model.loading());
        assert!(model.notice().is_none());
        assert_eq!(model.weather().map(|r| r.city_name.as_str()), Some("Kyiv"));
    }

    #[test]
    fn test_city_not_found_keeps_previous_report() {
        let mut model = ForecastModel::new("Kyiv");

        let ticket = model.begin_query("");
        model.apply(ticket.generation, Ok(QueryOutcome::Report(report("Kyiv", 7.46))));

        let ticket = model.begin_query("Atlantis");
        model.apply(
            ticket.generation,
            Ok(QueryOutcome::CityNotFound {
                message: "city not found".to_string(),
            }),
        );

        assert_eq!(
            model.notice(),
            Some(&Notice::CityNotFound {
                message: "city not found".to_string()
            })
        );
        // Prior weather fields are unchanged
        assert_eq!(model.weather().map(|r| r.city_name.as_str()), Some("Kyiv"));
    }

    #[test]
    fn test_service_error_keeps_previous_report() {
        let mut model = ForecastModel::new("Kyiv");

        let ticket = model.begin_query("");
        model.apply(ticket.generation, Ok(QueryOutcome::Report(report("Kyiv", 7.46))));

        let ticket = model.begin_query("Lviv");
        model.apply(
            ticket.generation,
            Err(WeatherServiceError::Network("connection refused".to_string())),
        );

        assert!(matches!(model.notice(), Some(Notice::Error { .. })));
        assert_eq!(model.weather().map(|r| r.city_name.as_str()), Some("Kyiv"));
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let mut model = ForecastModel::new("Kyiv");

        let first = model.begin_query("Kyiv");
        let second = model.begin_query("Lviv");

        // The first query resolves late; last-issued wins
        assert!(!model.apply(first.generation, Ok(QueryOutcome::Report(report("Kyiv", 7.46)))));
        assert!(model.weather().is_none());
        assert!(model.loading());

        assert!(model.apply(second.generation, Ok(QueryOutcome::Report(report("Lviv", 4.02)))));
        assert_eq!(model.weather().map(|r| r.city_name.as_str()), Some("Lviv"));
        assert!(!model.loading());
    }
}
