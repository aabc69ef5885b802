//! Entity identity and the validation capability.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::NotificationCatalog;
use super::notification::Notifications;

/// Integer identifier shared by all persisted domain objects.
///
/// ## Invariants
/// - Zero means "not yet persisted"; a nonzero value is assigned by the
///   repository on successful persistence.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Identifier of an instance that has not been persisted yet.
    pub const NEW: Self = Self(0);

    /// Wrap a raw identifier value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// True while the owning entity has not been persisted.
    pub const fn is_new(self) -> bool {
        self.0 == 0
    }

    /// Raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability implemented by every domain object that owns a validation
/// rule set.
///
/// `validate` runs the full rule set: all checks are evaluated (no
/// short-circuit on first failure) so a single pass surfaces every problem at
/// once. For one field, the "required" check and the length/format checks are
/// mutually exclusive; an absent value reports only the required-field code.
/// Repeated calls are idempotent because [`Notifications`] deduplicates by
/// code.
pub trait Validatable {
    /// Evaluate the rule set against the catalog and return every failure.
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications;

    /// True iff a fresh validation pass records no failure.
    fn is_valid(&self, catalog: &NotificationCatalog) -> bool {
        self.validate(catalog).is_empty()
    }
}
