//! OpenWeatherMap adapter for the current-weather port.

mod dto;
mod http_source;

pub use http_source::{OpenWeatherMapConfig, OpenWeatherMapSource};
