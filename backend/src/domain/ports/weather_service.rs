//! Port for the external current-weather provider.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{Coordinates, CurrentWeather, WeatherCondition, Wind};

use super::define_port_error;

define_port_error! {
    /// Failures raised by weather service adapters.
    pub enum WeatherServiceError {
        /// Network-level failure reaching the provider.
        Transport => "weather service transport failed: {message}",
        /// The provider did not answer in time.
        Timeout => "weather service timed out: {message}",
        /// The provider throttled the request.
        RateLimited => "weather service rate limited the request: {message}",
        /// The provider rejected the request (bad key, bad parameters).
        InvalidRequest => "weather service rejected the request: {message}",
        /// The provider answered with a payload that could not be decoded.
        Decode => "weather payload could not be decoded: {message}",
    }
}

/// Boundary to the third-party weather API.
///
/// Retry, caching and rate-limit policy belong to the adapter, not to the
/// handlers consuming this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrentWeatherService: Send + Sync {
    /// Resolve the current weather at a WGS84 point.
    async fn current_weather_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentWeather, WeatherServiceError>;
}

/// Stub service returning a fixed clear-sky observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCurrentWeatherService;

#[async_trait]
impl CurrentWeatherService for FixtureCurrentWeatherService {
    async fn current_weather_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentWeather, WeatherServiceError> {
        Ok(CurrentWeather {
            coordinates,
            condition: WeatherCondition::Clear,
            description: "clear sky".to_owned(),
            temperature: 18.0,
            humidity: 40,
            pressure: 1013,
            wind: Wind {
                speed: 2.5,
                degrees: 90.0,
            },
            rain: None,
            observed_at: Utc.timestamp_opt(1_700_000_000, 0)
                .single()
                .unwrap_or_default(),
        })
    }
}
