//! Outbound adapters implementing the domain ports.

pub mod memory;
pub mod openweathermap;
pub mod password;

pub use memory::{InMemorySpellRepository, InMemoryUserRepository};
pub use openweathermap::{OpenWeatherMapConfig, OpenWeatherMapSource};
pub use password::Sha256PasswordService;
