//! DTO conversion for weather observations.

use crate::domain::CurrentWeather;

use super::dto::{CurrentWeatherDto, RainDto, WindDto};

/// Flattens a [`CurrentWeather`] observation into its wire shape.
///
/// Weather is read-only, so only the outbound direction exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentWeatherMapper;

impl CurrentWeatherMapper {
    pub fn to_dto(&self, observation: &CurrentWeather) -> CurrentWeatherDto {
        CurrentWeatherDto {
            latitude: observation.coordinates.latitude,
            longitude: observation.coordinates.longitude,
            condition: observation.condition,
            description: observation.description.clone(),
            temperature: observation.temperature,
            humidity: observation.humidity,
            pressure: observation.pressure,
            wind: WindDto {
                speed: observation.wind.speed,
                degrees: observation.wind.degrees,
            },
            rain: observation.rain.map(|rain| RainDto {
                volume: rain.volume,
            }),
            observed_at: observation.observed_at,
        }
    }
}
