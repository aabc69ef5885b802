//! Reqwest-backed OpenWeatherMap adapter.
//!
//! This adapter owns transport details only: request building, timeout and
//! HTTP error mapping, and JSON decoding into a domain observation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::CurrentWeatherResponseDto;
use crate::domain::ports::{CurrentWeatherService, WeatherServiceError};
use crate::domain::{Coordinates, CurrentWeather};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";
const DEFAULT_UNITS: &str = "metric";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint, credential and unit settings for OpenWeatherMap requests.
pub struct OpenWeatherMapConfig {
    /// API key sent as the `appid` query parameter.
    pub api_key: String,
    /// Base URL the `weather` path is resolved against.
    pub base_url: Url,
    /// Unit system requested from the provider.
    pub units: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl OpenWeatherMapConfig {
    /// Default endpoint and units with the given credential.
    ///
    /// # Errors
    ///
    /// Returns an error when the built-in base URL fails to parse, which
    /// indicates a build defect rather than a runtime condition.
    pub fn new(api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            units: DEFAULT_UNITS.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Weather adapter performing HTTP GET requests against one endpoint.
pub struct OpenWeatherMapSource {
    client: Client,
    base_url: Url,
    api_key: String,
    units: String,
}

impl OpenWeatherMapSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: OpenWeatherMapConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
            units: config.units,
        })
    }

    fn weather_url(&self, coordinates: Coordinates) -> Result<Url, WeatherServiceError> {
        let mut url = self.base_url.join("weather").map_err(|error| {
            WeatherServiceError::invalid_request(format!("malformed endpoint: {error}"))
        })?;
        url.query_pairs_mut()
            .append_pair("lat", &coordinates.latitude.to_string())
            .append_pair("lon", &coordinates.longitude.to_string())
            .append_pair("units", &self.units)
            .append_pair("appid", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl CurrentWeatherService for OpenWeatherMapSource {
    async fn current_weather_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentWeather, WeatherServiceError> {
        let url = self.weather_url(coordinates)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_observation(body.as_ref())
    }
}

fn parse_observation(body: &[u8]) -> Result<CurrentWeather, WeatherServiceError> {
    let decoded: CurrentWeatherResponseDto = serde_json::from_slice(body).map_err(|error| {
        WeatherServiceError::decode(format!("invalid OpenWeatherMap JSON payload: {error}"))
    })?;
    decoded
        .into_current_weather()
        .map_err(WeatherServiceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> WeatherServiceError {
    if error.is_timeout() {
        WeatherServiceError::timeout(error.to_string())
    } else {
        WeatherServiceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> WeatherServiceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => WeatherServiceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            WeatherServiceError::timeout(message)
        }
        _ if status.is_client_error() => WeatherServiceError::invalid_request(message),
        _ => WeatherServiceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
