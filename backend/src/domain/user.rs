//! User entity and its validation rule set.

use std::sync::OnceLock;

use regex::Regex;

use super::catalog::{codes, NotificationCatalog};
use super::character::Character;
use super::entity::{EntityId, Validatable};
use super::notification::Notifications;
use super::rules;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Structural shape only; length bounds are enforced separately.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Application user.
///
/// Constructed with [`EntityId::NEW`]; a nonzero identifier is assigned by the
/// repository on successful persistence. Fields are mutated only through
/// explicit setters.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: EntityId,
    email: String,
    username: String,
    password: String,
    character: Character,
}

impl User {
    /// Build a new, unpersisted user with a fresh default character.
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: EntityId::NEW,
            email: email.into(),
            username: username.into(),
            password: String::new(),
            character: Character::default(),
        }
    }

    /// Return this user with a persistence-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    /// Persistence identifier; zero while unpersisted.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Login email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Public handle.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Stored password material (hashed once persisted).
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// The user's game character.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Replace the stored password material.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}

impl Validatable for User {
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications {
        let mut notifications = Notifications::new();

        let email = self.email.trim();
        if email.is_empty() {
            catalog.append(&mut notifications, codes::user::EMAIL_IS_REQUIRED);
        } else {
            let length = email.chars().count();
            if length <= rules::user::email::MIN_LENGTH
                || length > rules::user::email::MAX_LENGTH
                || !email_regex().is_match(email)
            {
                catalog.append(&mut notifications, codes::user::INVALID_EMAIL);
            }
        }

        let username = self.username.trim();
        if username.is_empty() {
            catalog.append(&mut notifications, codes::user::USERNAME_IS_REQUIRED);
        } else {
            let length = username.chars().count();
            if length <= rules::user::username::MIN_LENGTH
                || length > rules::user::username::MAX_LENGTH
            {
                catalog.append(&mut notifications, codes::user::INVALID_USERNAME);
            }
        }

        if self.password.is_empty() {
            catalog.append(&mut notifications, codes::user::PASSWORD_IS_REQUIRED);
        }

        notifications
    }
}
