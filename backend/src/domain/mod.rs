//! Domain entities, notifications and ports.
//!
//! Purpose: strongly typed domain objects that own their validation state.
//! Expected validation failure is represented as [`Notifications`] data, never
//! as an error type; collaborator failure surfaces through the port error
//! enums under [`ports`].

pub mod catalog;
pub mod character;
pub mod entity;
pub mod notification;
pub mod ports;
pub mod rules;
pub mod spell;
pub mod user;
pub mod weather;

pub use self::catalog::{codes, NotificationCatalog};
pub use self::character::Character;
pub use self::entity::{EntityId, Validatable};
pub use self::notification::{Notification, Notifications};
pub use self::spell::{Spell, SpellRule};
pub use self::user::User;
pub use self::weather::{Coordinates, CurrentWeather, Rain, WeatherCondition, Wind};
