//! Notification catalog.
//!
//! Maps stable string codes to human-readable messages, partitioned by entity
//! type. The catalog is built once at startup from a fixed literal table and
//! injected into validators; it is read-only and safe to share without
//! locking.

use std::collections::HashMap;

use super::notification::{Notification, Notifications};

/// Catalogued notification codes, partitioned per entity type.
pub mod codes {
    /// User validation codes (`UN-xxx`).
    pub mod user {
        pub const EMAIL_IS_REQUIRED: &str = "UN-001";
        pub const INVALID_EMAIL: &str = "UN-002";
        pub const INVALID_USERNAME: &str = "UN-003";
        pub const USERNAME_IS_REQUIRED: &str = "UN-004";
        pub const PASSWORD_IS_REQUIRED: &str = "UN-005";
        pub const USER_NOT_FOUND: &str = "UN-006";
    }

    /// Character validation codes (`CN-xxx`).
    pub mod character {
        pub const INVALID_CHARACTER: &str = "CN-001";
        pub const CHARACTER_NOT_FOUND: &str = "CN-002";
    }

    /// Spell validation codes (`SN-xxx`).
    pub mod spell {
        pub const NAME_IS_REQUIRED: &str = "SN-001";
        pub const INVALID_NAME: &str = "SN-002";
        pub const INVALID_MANA_COST: &str = "SN-003";
        pub const SPELL_NOT_FOUND: &str = "SN-004";
        pub const INVALID_SPELL_RULE: &str = "SN-005";
    }

    /// Weather lookup codes (`WN-xxx`).
    pub mod weather {
        pub const INVALID_LATITUDE: &str = "WN-001";
        pub const INVALID_LONGITUDE: &str = "WN-002";
    }
}

const CATALOG_ENTRIES: &[(&str, &str)] = &[
    (codes::user::EMAIL_IS_REQUIRED, "Email is required"),
    (codes::user::INVALID_EMAIL, "Invalid email"),
    (codes::user::INVALID_USERNAME, "Invalid username"),
    (codes::user::USERNAME_IS_REQUIRED, "Username is required"),
    (codes::user::PASSWORD_IS_REQUIRED, "Password is required"),
    (codes::user::USER_NOT_FOUND, "User not found"),
    (codes::character::INVALID_CHARACTER, "Invalid character"),
    (codes::character::CHARACTER_NOT_FOUND, "Character not found"),
    (codes::spell::NAME_IS_REQUIRED, "Spell name is required"),
    (codes::spell::INVALID_NAME, "Invalid spell name"),
    (codes::spell::INVALID_MANA_COST, "Invalid mana cost"),
    (codes::spell::SPELL_NOT_FOUND, "Spell not found"),
    (codes::spell::INVALID_SPELL_RULE, "Invalid spell rule"),
    (codes::weather::INVALID_LATITUDE, "Invalid latitude"),
    (codes::weather::INVALID_LONGITUDE, "Invalid longitude"),
];

/// Immutable registry of catalogued notifications.
#[derive(Debug, Clone)]
pub struct NotificationCatalog {
    entries: HashMap<&'static str, Notification>,
}

impl NotificationCatalog {
    /// Build the standard catalog from the fixed literal table.
    pub fn standard() -> Self {
        let entries = CATALOG_ENTRIES
            .iter()
            .map(|(code, message)| (*code, Notification::new(*code, *message)))
            .collect();
        Self { entries }
    }

    /// Look up the catalog entry for `code`.
    ///
    /// Unknown codes resolve to `None` rather than failing; the miss is
    /// logged so that an unregistered code does not vanish silently.
    pub fn get(&self, code: &str) -> Option<Notification> {
        let entry = self.entries.get(code).cloned();
        if entry.is_none() {
            tracing::warn!(code, "unknown notification code requested");
        }
        entry
    }

    /// Map each code to its catalog entry, dropping unmatched codes.
    pub fn get_all<'a>(&self, codes: impl IntoIterator<Item = &'a str>) -> Notifications {
        codes
            .into_iter()
            .filter_map(|code| self.get(code))
            .collect()
    }

    /// Append the catalog entry for `code` to `notifications`, if registered.
    pub fn append(&self, notifications: &mut Notifications, code: &str) {
        if let Some(notification) = self.get(code) {
            notifications.push(notification);
        }
    }

    /// Box raw human-readable messages as notifications, bypassing lookup.
    pub fn from_messages<'a>(messages: impl IntoIterator<Item = &'a str>) -> Notifications {
        messages.into_iter().map(Notification::from_message).collect()
    }
}

impl Default for NotificationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_resolves_to_catalogued_message() {
        let catalog = NotificationCatalog::standard();
        let notification = catalog
            .get(codes::user::INVALID_EMAIL)
            .expect("UN-002 is catalogued");
        assert_eq!(notification.code(), "UN-002");
        assert_eq!(notification.message(), "Invalid email");
    }

    #[test]
    fn unknown_code_resolves_to_none() {
        let catalog = NotificationCatalog::standard();
        assert!(catalog.get("XX-999").is_none());
    }

    #[test]
    fn get_all_drops_unmatched_codes() {
        let catalog = NotificationCatalog::standard();
        let notifications = catalog.get_all([
            codes::user::EMAIL_IS_REQUIRED,
            "XX-999",
            codes::spell::INVALID_NAME,
        ]);

        assert_eq!(notifications.len(), 2);
        assert!(notifications.contains_code("UN-001"));
        assert!(notifications.contains_code("SN-002"));
    }

    #[test]
    fn from_messages_boxes_raw_text() {
        let notifications = NotificationCatalog::from_messages(["first", "second"]);
        assert_eq!(notifications.len(), 2);
        assert!(notifications.iter().any(|n| n.message() == "first"));
    }

    #[test]
    fn every_partition_has_entries() {
        let catalog = NotificationCatalog::standard();
        for prefix in ["UN", "CN", "SN", "WN"] {
            assert!(
                catalog.entries.keys().any(|code| code.starts_with(prefix)),
                "partition {prefix} must not be empty"
            );
        }
    }
}
