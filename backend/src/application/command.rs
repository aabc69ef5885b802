//! Command and action handler contracts.
//!
//! Every read or write operation is expressed as a [`Command`] carrying its
//! own inputs, validated against the declarative rule sets, and executed by a
//! single-purpose [`ActionHandler`]. A handler returns either the operation's
//! typed output or a [`CommandError`]; success and failure are structurally
//! exclusive, so a populated result can never coexist with failure
//! notifications.

use async_trait::async_trait;

use crate::domain::ports::{PasswordServiceError, RepositoryError, WeatherServiceError};
use crate::domain::{NotificationCatalog, Notifications};

/// A unit of work: one operation's inputs plus its own validation.
///
/// `validate` runs the command's required-input checks against the injected
/// catalog; a command wrapping an entity delegates to that entity's full rule
/// set. Handlers must not reach any collaborator while validation fails.
pub trait Command: Send + 'static {
    /// Typed output populated only on success.
    type Output: Send;

    /// Stable operation name used for dispatch diagnostics and logging.
    fn name() -> &'static str;

    /// Run the command's own input checks; empty means valid.
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications;
}

/// Why a command produced no output.
///
/// `Rejected` is the expected, data-driven outcome carrying validation
/// notifications; the remaining variants propagate collaborator failure
/// upward untouched, to be translated by an outer layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Input failed validation; recoverable by fixing the input.
    #[error("command rejected: {0}")]
    Rejected(Notifications),
    /// Persistence collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// Weather provider collaborator failed.
    #[error(transparent)]
    Weather(#[from] WeatherServiceError),
    /// Password service collaborator failed.
    #[error(transparent)]
    Password(#[from] PasswordServiceError),
    /// No handler is registered for the command type.
    #[error("no handler registered for command {command}")]
    Unrouted { command: &'static str },
}

impl CommandError {
    /// Validation notifications, when the command was rejected.
    pub fn notifications(&self) -> Option<&Notifications> {
        match self {
            Self::Rejected(notifications) => Some(notifications),
            _ => None,
        }
    }
}

/// Executor bound to exactly one command type.
///
/// Handlers are stateless between invocations and safe to share across
/// concurrent executions over independent commands. Validation always
/// completes fully before any collaborator call, so invalid input never
/// causes a partial side effect.
#[async_trait]
pub trait ActionHandler<C: Command>: Send + Sync {
    /// Validate and execute the command.
    async fn execute(&self, command: C) -> Result<C::Output, CommandError>;
}

/// Reject the command when its own validation fails.
///
/// Shared guard used at the top of every handler; logs the rejection with the
/// operation name.
pub(crate) fn ensure_valid<C: Command>(
    command: &C,
    catalog: &NotificationCatalog,
) -> Result<(), CommandError> {
    let notifications = command.validate(catalog);
    if notifications.is_empty() {
        Ok(())
    } else {
        tracing::debug!(
            command = C::name(),
            failures = notifications.len(),
            "command rejected by validation"
        );
        Err(CommandError::Rejected(notifications))
    }
}
