//! Conversions from view-layer service errors into the core error hierarchy.

use skycast_core::{AppError, NetworkError, WeatherError};

use crate::services::WeatherServiceError;

impl From<WeatherServiceError> for AppError {
    fn from(e: WeatherServiceError) -> Self {
        match e {
            WeatherServiceError::Network(s) => {
                AppError::Network(NetworkError::ConnectionFailed(s))
            }
            WeatherServiceError::InvalidApiKey => AppError::Weather(WeatherError::InvalidApiKey),
            WeatherServiceError::Api(s) => AppError::Weather(WeatherError::ApiError(s)),
            WeatherServiceError::NotInitialized => {
                AppError::Weather(WeatherError::ServiceUnavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_maps_into_app_error() {
        let err: AppError = WeatherServiceError::NotInitialized.into();
        assert!(matches!(
            err,
            AppError::Weather(WeatherError::ServiceUnavailable)
        ));

        let err: AppError = WeatherServiceError::Network("refused".into()).into();
        assert!(matches!(err, AppError::Network(_)));
    }
}
