//! Collaborator ports consumed by the action handlers.
//!
//! Each port pairs a `Send + Sync` trait with a `define_port_error!`-generated
//! error enum, a mockall automock for unit tests and a `Fixture*` stub for
//! code paths where the collaborator is not under test.

mod macros;
pub(crate) use macros::define_port_error;

mod password_service;
mod repository;
mod spell_repository;
mod user_repository;
mod weather_service;

#[cfg(test)]
pub use password_service::MockPasswordService;
pub use password_service::{FixturePasswordService, PasswordService, PasswordServiceError};
pub use repository::RepositoryError;
#[cfg(test)]
pub use spell_repository::MockSpellRepository;
pub use spell_repository::{FixtureSpellRepository, SpellRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository};
#[cfg(test)]
pub use weather_service::MockCurrentWeatherService;
pub use weather_service::{
    CurrentWeatherService, FixtureCurrentWeatherService, WeatherServiceError,
};
