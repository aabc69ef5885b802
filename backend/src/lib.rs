//! Command and validation core for the WeatherAttack backend.
//!
//! Operations are expressed as commands, validated against catalogued
//! notification rules, and dispatched through a typed handler registry to
//! adapters behind the domain ports.

pub mod application;
pub mod domain;
pub mod outbound;

pub use application::{HandlerRegistry, HandlerRegistryBuilder};
pub use domain::NotificationCatalog;
