//! Weather value objects returned by the external weather service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WGS84 point a weather lookup is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// True when `latitude` is finite and within [-90, 90].
    pub fn latitude_in_range(latitude: f64) -> bool {
        latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
    }

    /// True when `longitude` is finite and within [-180, 180].
    pub fn longitude_in_range(longitude: f64) -> bool {
        longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
    }
}

/// Broad weather condition group, mapped from the provider's condition field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    /// Mist, fog, haze and the other atmosphere groups.
    Atmosphere,
}

impl WeatherCondition {
    /// Map a provider condition group name onto the domain enum.
    ///
    /// Unrecognised atmosphere groups (smoke, dust, squalls...) collapse into
    /// [`WeatherCondition::Atmosphere`] rather than failing the decode.
    pub fn from_group(group: &str) -> Self {
        match group {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Drizzle" => Self::Drizzle,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            "Thunderstorm" => Self::Thunderstorm,
            _ => Self::Atmosphere,
        }
    }
}

/// Wind observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Speed in the provider's configured units.
    pub speed: f64,
    /// Direction in meteorological degrees.
    pub degrees: f64,
}

/// Rain observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rain {
    /// Precipitation volume over the last hour, in millimetres.
    pub volume: f64,
}

/// Snapshot of the current weather at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub coordinates: Coordinates,
    pub condition: WeatherCondition,
    /// Provider's human-readable condition text (e.g. "light rain").
    pub description: String,
    pub temperature: f64,
    /// Relative humidity percentage.
    pub humidity: u8,
    /// Atmospheric pressure in hPa.
    pub pressure: u32,
    pub wind: Wind,
    /// Absent when no rain was observed.
    pub rain: Option<Rain>,
    pub observed_at: DateTime<Utc>,
}
