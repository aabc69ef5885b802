//! OpenWeatherMap wire types.
//!
//! Shapes mirror the provider's current-weather JSON payload; conversion into
//! domain values lives here so the transport layer stays free of field-level
//! knowledge.

use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::domain::{Coordinates, CurrentWeather, Rain, WeatherCondition, Wind};

#[derive(Debug, Deserialize)]
pub(super) struct CoordDto {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionDto {
    /// Condition group name, e.g. "Rain" or "Clear".
    pub main: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MainDto {
    pub temp: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct WindReadingDto {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct RainReadingDto {
    /// Precipitation over the last hour, keyed "1h" by the provider.
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
}

/// Provider response for the current-weather endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct CurrentWeatherResponseDto {
    pub coord: CoordDto,
    pub weather: Vec<ConditionDto>,
    pub main: MainDto,
    #[serde(default)]
    pub wind: Option<WindReadingDto>,
    #[serde(default)]
    pub rain: Option<RainReadingDto>,
    /// Observation time as a unix timestamp.
    pub dt: i64,
}

impl CurrentWeatherResponseDto {
    /// Convert the provider payload into a domain observation.
    pub(super) fn into_current_weather(self) -> Result<CurrentWeather, String> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| "payload carries no weather condition".to_owned())?;

        let observed_at = Utc
            .timestamp_opt(self.dt, 0)
            .single()
            .ok_or_else(|| format!("observation timestamp {} is out of range", self.dt))?;

        let wind = self.wind.unwrap_or_default();
        let rain = self
            .rain
            .and_then(|rain| rain.one_hour)
            .map(|volume| Rain { volume });

        Ok(CurrentWeather {
            coordinates: Coordinates {
                latitude: self.coord.lat,
                longitude: self.coord.lon,
            },
            condition: WeatherCondition::from_group(condition.main.as_str()),
            description: condition.description,
            temperature: self.main.temp,
            humidity: self.main.humidity.clamp(0.0, 100.0) as u8,
            pressure: self.main.pressure.max(0.0) as u32,
            wind: Wind {
                speed: wind.speed,
                degrees: wind.deg,
            },
            rain,
            observed_at,
        })
    }
}
