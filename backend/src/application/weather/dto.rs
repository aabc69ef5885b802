//! Wire shapes for weather lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::WeatherCondition;

/// Outbound wind payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindDto {
    pub speed: f64,
    pub degrees: f64,
}

/// Outbound rain payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainDto {
    pub volume: f64,
}

/// Outbound payload for a current weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherDto {
    pub latitude: f64,
    pub longitude: f64,
    pub condition: WeatherCondition,
    pub description: String,
    pub temperature: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind: WindDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<RainDto>,
    pub observed_at: DateTime<Utc>,
}
