//! Centralized application services.
//!
//! One `AppServices` container owns the tokio runtime, the shared weather
//! provider slot, the auth gate, and the weather service channel.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};

use skycast_auth::{AuthGate, CredentialStore};
use skycast_core::{Config, Units};
use skycast_weather::WeatherProvider;

use crate::services::WeatherServiceMessage;

pub struct AppServices {
    /// Tokio runtime for async operations
    runtime: tokio::runtime::Runtime,

    /// Weather provider; replaced when settings change
    weather_provider: RwLock<Option<Arc<WeatherProvider>>>,

    /// Credential gate
    auth_gate: Arc<AuthGate>,

    /// Weather service channel
    weather_tx: Sender<WeatherServiceMessage>,
    weather_rx: Mutex<Receiver<WeatherServiceMessage>>,
}

impl AppServices {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("skycast-tokio")
            .build()
            .context("Failed to create tokio runtime")?;

        let provider = WeatherProvider::with_base_url(
            &config.weather.api_key,
            provider_units(config.weather.units),
            &config.weather.api_base_url,
        )?;

        let gate = AuthGate::new(CredentialStore::new(&config.config_dir));
        let (weather_tx, weather_rx) = channel();

        Ok(Self {
            runtime,
            weather_provider: RwLock::new(Some(Arc::new(provider))),
            auth_gate: Arc::new(gate),
            weather_tx,
            weather_rx: Mutex::new(weather_rx),
        })
    }

    pub fn runtime_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    pub fn weather_provider(&self) -> Option<Arc<WeatherProvider>> {
        self.weather_provider.read().clone()
    }

    pub fn auth_gate(&self) -> Arc<AuthGate> {
        self.auth_gate.clone()
    }

    pub fn weather_tx(&self) -> Sender<WeatherServiceMessage> {
        self.weather_tx.clone()
    }

    /// Block until the next weather service message arrives.
    /// Returns None when every sender is gone.
    pub fn recv_weather(&self) -> Option<WeatherServiceMessage> {
        self.weather_rx.lock().recv().ok()
    }
}

/// Map the config-level unit preference onto the provider's unit system.
fn provider_units(units: Units) -> skycast_weather::Units {
    match units {
        Units::Metric => skycast_weather::Units::Metric,
        Units::Imperial => skycast_weather::Units::Imperial,
        Units::Standard => skycast_weather::Units::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_units_mapping() {
        assert_eq!(provider_units(Units::Metric), skycast_weather::Units::Metric);
        assert_eq!(
            provider_units(Units::Imperial),
            skycast_weather::Units::Imperial
        );
        assert_eq!(
            provider_units(Units::Standard),
            skycast_weather::Units::Standard
        );
    }
}
