//! Weather lookup for Skycast
//!
//! Current-weather queries against the OpenWeatherMap API, plus the display
//! formatting used by the forecast view.

pub mod format;
pub mod provider;
pub mod types;

pub use provider::WeatherProvider;
pub use types::{QueryOutcome, Units, WeatherError, WeatherReport};
