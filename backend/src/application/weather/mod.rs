//! Weather operations: the lookup command, its handler and wire shapes.

mod commands;
mod dto;
mod handlers;
mod mapper;

pub use commands::GetCurrentWeatherCommand;
pub use dto::{CurrentWeatherDto, RainDto, WindDto};
pub use handlers::GetCurrentWeatherActionHandler;
pub use mapper::CurrentWeatherMapper;
