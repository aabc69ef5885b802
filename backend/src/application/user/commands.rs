//! User commands.

use crate::application::command::Command;
use crate::domain::{EntityId, NotificationCatalog, Notifications, User, Validatable};

use super::dto::UserResponseDto;

/// Create a user from raw credentials.
#[derive(Debug, Clone)]
pub struct AddUserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl AddUserCommand {
    /// Build the [`User`] entity this command wraps.
    pub fn to_user(&self) -> User {
        let mut user = User::new(self.email.as_str(), self.username.as_str());
        user.set_password(self.password.as_str());
        user
    }
}

impl Command for AddUserCommand {
    type Output = UserResponseDto;

    fn name() -> &'static str {
        "add_user"
    }

    // The command's validity is the wrapped entity's validity.
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications {
        self.to_user().validate(catalog)
    }
}

/// List every user.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllUsersCommand;

impl Command for GetAllUsersCommand {
    /// `None` when the repository reported no collection at all;
    /// `Some(vec![])` is a legitimate, successful empty listing.
    type Output = Option<Vec<UserResponseDto>>;

    fn name() -> &'static str {
        "get_all_users"
    }

    fn validate(&self, _catalog: &NotificationCatalog) -> Notifications {
        Notifications::new()
    }
}

/// Fetch one user by identifier.
#[derive(Debug, Clone, Copy)]
pub struct GetUserCommand {
    pub id: EntityId,
}

impl Command for GetUserCommand {
    type Output = UserResponseDto;

    fn name() -> &'static str {
        "get_user"
    }

    fn validate(&self, _catalog: &NotificationCatalog) -> Notifications {
        Notifications::new()
    }
}

/// Delete one user by identifier.
#[derive(Debug, Clone, Copy)]
pub struct DeleteUserCommand {
    pub id: EntityId,
}

impl Command for DeleteUserCommand {
    /// `false` when no record with the identifier existed.
    type Output = bool;

    fn name() -> &'static str {
        "delete_user"
    }

    fn validate(&self, _catalog: &NotificationCatalog) -> Notifications {
        Notifications::new()
    }
}
