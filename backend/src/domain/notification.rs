//! Validation notifications.
//!
//! A [`Notification`] is an immutable `(code, message)` pair describing one
//! expected validation failure. Failures are data, never errors: entities and
//! commands accumulate them in a [`Notifications`] collection which callers
//! inspect before trusting a result.

use std::fmt;
use std::hash::{Hash, Hasher};

/// One validation failure with a stable short code (e.g. `UN-002`).
///
/// ## Invariants
/// - Equality and deduplication are by `code` alone; two notifications with
///   the same code are considered identical.
#[derive(Debug, Clone)]
pub struct Notification {
    code: String,
    message: String,
}

impl Notification {
    /// Build a notification from a catalogued code and its message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Box a raw human-readable message as a notification directly.
    ///
    /// The message doubles as the code so that distinct messages survive
    /// code-based deduplication.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            code: message.clone(),
            message,
        }
    }

    /// Stable short identifier, unique within its catalog partition.
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Human-readable failure text.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Notification {}

impl Hash for Notification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Ordered, code-deduplicated set of notifications.
///
/// Insertion order is preserved; pushing an already-present code is a no-op,
/// which keeps repeated validation passes idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification unless its code is already present.
    pub fn push(&mut self, notification: Notification) {
        if !self.0.contains(&notification) {
            self.0.push(notification);
        }
    }

    /// Append every notification from `other`, deduplicating by code.
    pub fn extend(&mut self, other: Self) {
        for notification in other.0 {
            self.push(notification);
        }
    }

    /// True when no failure has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct failure codes recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when a notification with `code` has been recorded.
    pub fn contains_code(&self, code: &str) -> bool {
        self.0.iter().any(|n| n.code() == code)
    }

    /// Iterate notifications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.0.iter()
    }
}

impl fmt::Display for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for notification in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{notification}")?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Notification> for Notifications {
    fn from_iter<I: IntoIterator<Item = Notification>>(iter: I) -> Self {
        let mut notifications = Self::new();
        for notification in iter {
            notifications.push(notification);
        }
        notifications
    }
}
