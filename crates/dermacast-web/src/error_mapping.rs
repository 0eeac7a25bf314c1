//! Maps weather crate errors to dermacast_core::AppError for consistent
//! user-facing messages.

use dermacast_core::{AppError, NetworkError, WeatherError};
use dermacast_weather::FetchError;

/// Extension trait for converting fetch errors to the application error type.
pub trait FetchErrorExt {
    fn into_app_error(self) -> AppError;
}

impl FetchErrorExt for FetchError {
    fn into_app_error(self) -> AppError {
        match self {
            FetchError::Client(s) => AppError::Weather(WeatherError::ApiError(s)),
            FetchError::Timeout => AppError::Network(NetworkError::Timeout),
            FetchError::Transport(s) => AppError::Network(NetworkError::ConnectionFailed(s)),
            FetchError::Status { status, body } => AppError::Network(NetworkError::ServerError {
                status,
                message: body,
            }),
            FetchError::NotJson(s) => AppError::Network(NetworkError::InvalidResponse(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_network_timeout() {
        let app = FetchError::Timeout.into_app_error();
        assert!(matches!(app, AppError::Network(NetworkError::Timeout)));
    }

    #[test]
    fn test_client_maps_to_weather_error() {
        let app = FetchError::Client("tls backend".into()).into_app_error();
        assert!(matches!(app, AppError::Weather(WeatherError::ApiError(_))));
    }

    #[test]
    fn test_status_keeps_code() {
        let app = FetchError::Status {
            status: 503,
            body: "unavailable".into(),
        }
        .into_app_error();
        assert!(matches!(
            app,
            AppError::Network(NetworkError::ServerError { status: 503, .. })
        ));
    }

    #[test]
    fn test_not_json_maps_to_invalid_response() {
        let app = FetchError::NotJson("expected value".into()).into_app_error();
        assert!(matches!(app, AppError::Network(NetworkError::InvalidResponse(_))));
    }
}
