//! Application layer: commands, their handlers and the dispatch registry.
//!
//! A [`command::Command`] names an operation and carries its input; an
//! [`command::ActionHandler`] executes it against the domain ports; the
//! [`registry::HandlerRegistry`] routes each command type to the handler
//! registered for it at startup.

pub mod command;
pub mod mapper;
pub mod registry;
pub mod spell;
pub mod user;
pub mod weather;

pub use command::{ActionHandler, Command, CommandError};
pub use mapper::Mapper;
pub use registry::{HandlerRegistry, HandlerRegistryBuilder};
