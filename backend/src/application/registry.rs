//! Typed command-to-handler registry.
//!
//! One handler per command type, resolved once at startup through the
//! builder; dispatch is an exact `TypeId` lookup, not runtime pattern
//! matching.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use super::command::{ActionHandler, Command, CommandError};

type BoxedHandler = Box<dyn Any + Send + Sync>;

/// Builder collecting handler registrations before the registry is frozen.
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<TypeId, BoxedHandler>,
}

impl HandlerRegistryBuilder {
    /// Bind `handler` to command type `C`, replacing any earlier binding.
    #[must_use]
    pub fn register<C, H>(mut self, handler: H) -> Self
    where
        C: Command,
        H: ActionHandler<C> + 'static,
    {
        let handler: Arc<dyn ActionHandler<C>> = Arc::new(handler);
        self.handlers.insert(TypeId::of::<C>(), Box::new(handler));
        self
    }

    /// Freeze the registrations into an immutable registry.
    #[must_use]
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}

/// Immutable map from command type to its single action handler.
pub struct HandlerRegistry {
    handlers: HashMap<TypeId, BoxedHandler>,
}

impl HandlerRegistry {
    /// Start collecting registrations.
    #[must_use]
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// Execute `command` with the handler registered for its type.
    ///
    /// A missing registration is a wiring bug; it surfaces as
    /// [`CommandError::Unrouted`] rather than a panic so that callers decide
    /// how loudly to fail.
    pub async fn execute<C: Command>(&self, command: C) -> Result<C::Output, CommandError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn ActionHandler<C>>>());

        match handler {
            Some(handler) => handler.execute(command).await,
            None => {
                tracing::error!(command = C::name(), "no handler registered");
                Err(CommandError::Unrouted { command: C::name() })
            }
        }
    }

    /// Number of registered command types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
