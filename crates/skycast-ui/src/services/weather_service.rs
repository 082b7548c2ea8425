//! Weather backend: async weather fetching.
//! All network work runs off the interactive thread; results sent via mpsc.

use std::sync::Arc;

use skycast_core::error::ReqwestErrorExt;
use skycast_weather::{QueryOutcome, WeatherError, WeatherProvider};

use crate::models::forecast_model::QueryTicket;

/// Error type for weather operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherServiceError {
    Network(String),
    InvalidApiKey,
    Api(String),
    NotInitialized,
}

impl std::fmt::Display for WeatherServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherServiceError::Network(s) => write!(f, "network error: {}", s),
            WeatherServiceError::InvalidApiKey => write!(f, "weather API key was rejected"),
            WeatherServiceError::Api(s) => write!(f, "weather provider error: {}", s),
            WeatherServiceError::NotInitialized => write!(f, "weather service not initialized"),
        }
    }
}

impl std::error::Error for WeatherServiceError {}

impl From<WeatherError> for WeatherServiceError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(e) => Self::Network(e.into_network_error().to_string()),
            WeatherError::InvalidApiKey => Self::InvalidApiKey,
            WeatherError::Api { status, message } => {
                Self::Api(format!("{} ({})", message, status))
            }
            WeatherError::Parse(message) => Self::Api(message),
        }
    }
}

/// Messages sent from async operations back to the interactive thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of one weather query, tagged with its ticket generation
    QueryDone {
        generation: u64,
        result: Result<QueryOutcome, WeatherServiceError>,
    },
}

/// Request a weather query asynchronously.
/// Sends `QueryDone` on the channel when complete.
pub fn request_query(
    tx: &std::sync::mpsc::Sender<WeatherServiceMessage>,
    runtime: &tokio::runtime::Handle,
    provider: Arc<WeatherProvider>,
    ticket: &QueryTicket,
) {
    let tx = tx.clone();
    let generation = ticket.generation;
    let city = ticket.city.clone();

    runtime.spawn(async move {
        let result = provider
            .current_weather(&city)
            .await
            .map_err(WeatherServiceError::from);
        let _ = tx.send(WeatherServiceMessage::QueryDone { generation, result });
    });
}
