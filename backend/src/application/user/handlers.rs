//! Action handlers for user commands.

use std::sync::Arc;

use async_trait::async_trait;
use zeroize::Zeroize;

use crate::application::command::{ensure_valid, ActionHandler, Command, CommandError};
use crate::application::mapper::Mapper;
use crate::domain::ports::{PasswordService, UserRepository};
use crate::domain::{codes, NotificationCatalog};

use super::commands::{AddUserCommand, DeleteUserCommand, GetAllUsersCommand, GetUserCommand};
use super::dto::UserResponseDto;
use super::mapper::UserEntityMapper;

/// Creates a user: validate, hash the password, persist, map.
pub struct AddUserActionHandler<R, P> {
    repository: Arc<R>,
    passwords: Arc<P>,
    mapper: UserEntityMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<R, P> AddUserActionHandler<R, P> {
    /// Wire the handler to its collaborators.
    pub fn new(repository: Arc<R>, passwords: Arc<P>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            repository,
            passwords,
            mapper: UserEntityMapper,
            catalog,
        }
    }
}

#[async_trait]
impl<R, P> ActionHandler<AddUserCommand> for AddUserActionHandler<R, P>
where
    R: UserRepository,
    P: PasswordService,
{
    async fn execute(&self, command: AddUserCommand) -> Result<UserResponseDto, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        let mut user = command.to_user();
        let mut plain = command.password;
        let hashed = self.passwords.hash(plain.as_str())?;
        plain.zeroize();
        user.set_password(hashed);

        let persisted = self.repository.add(user).await?;
        tracing::info!(
            command = AddUserCommand::name(),
            id = persisted.id().value(),
            "user persisted"
        );
        Ok(self.mapper.to_dto(&persisted))
    }
}

/// Lists users, preserving the absent-versus-empty distinction.
pub struct GetAllUsersActionHandler<R> {
    repository: Arc<R>,
    mapper: UserEntityMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<R> GetAllUsersActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            repository,
            mapper: UserEntityMapper,
            catalog,
        }
    }
}

#[async_trait]
impl<R> ActionHandler<GetAllUsersCommand> for GetAllUsersActionHandler<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        command: GetAllUsersCommand,
    ) -> Result<Option<Vec<UserResponseDto>>, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        // A non-null source always maps through, empty included; only an
        // absent collection stays absent.
        let users = self.repository.get_all().await?;
        Ok(users.map(|users| users.iter().map(|user| self.mapper.to_dto(user)).collect()))
    }
}

/// Fetches one user, rejecting with UN-006 when the id is unknown.
pub struct GetUserActionHandler<R> {
    repository: Arc<R>,
    mapper: UserEntityMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<R> GetUserActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            repository,
            mapper: UserEntityMapper,
            catalog,
        }
    }
}

#[async_trait]
impl<R> ActionHandler<GetUserCommand> for GetUserActionHandler<R>
where
    R: UserRepository,
{
    async fn execute(&self, command: GetUserCommand) -> Result<UserResponseDto, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        match self.repository.get(command.id).await? {
            Some(user) => Ok(self.mapper.to_dto(&user)),
            None => Err(CommandError::Rejected(
                self.catalog.get_all([codes::user::USER_NOT_FOUND]),
            )),
        }
    }
}

/// Deletes one user by identifier.
pub struct DeleteUserActionHandler<R> {
    repository: Arc<R>,
    catalog: Arc<NotificationCatalog>,
}

impl<R> DeleteUserActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self { repository, catalog }
    }
}

#[async_trait]
impl<R> ActionHandler<DeleteUserCommand> for DeleteUserActionHandler<R>
where
    R: UserRepository,
{
    async fn execute(&self, command: DeleteUserCommand) -> Result<bool, CommandError> {
        ensure_valid(&command, &self.catalog)?;
        Ok(self.repository.delete(command.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FixturePasswordService, MockUserRepository, RepositoryError,
    };
    use crate::domain::{EntityId, User};

    fn catalog() -> Arc<NotificationCatalog> {
        Arc::new(NotificationCatalog::standard())
    }

    fn add_command() -> AddUserCommand {
        AddUserCommand {
            email: "alice@example.com".to_owned(),
            username: "alice".to_owned(),
            password: "hunter2".to_owned(),
        }
    }

    #[tokio::test]
    async fn add_user_hashes_persists_and_maps() {
        let mut repo = MockUserRepository::new();
        repo.expect_add()
            .withf(|user: &User| user.password() == "hashed:hunter2")
            .times(1)
            .return_once(|user| Ok(user.with_id(EntityId::new(7))));

        let handler =
            AddUserActionHandler::new(Arc::new(repo), Arc::new(FixturePasswordService), catalog());
        let response = handler.execute(add_command()).await.expect("add succeeds");

        assert_eq!(response.id, 7);
        assert_eq!(response.email, "alice@example.com");
    }

    #[tokio::test]
    async fn add_user_with_missing_email_is_rejected_before_any_side_effect() {
        let mut repo = MockUserRepository::new();
        repo.expect_add().times(0);

        let handler =
            AddUserActionHandler::new(Arc::new(repo), Arc::new(FixturePasswordService), catalog());
        let mut command = add_command();
        command.email = String::new();

        let error = handler.execute(command).await.expect_err("must reject");
        let notifications = error.notifications().expect("rejection carries data");
        assert!(notifications.contains_code(codes::user::EMAIL_IS_REQUIRED));
        assert_eq!(notifications.len(), 1);
    }

    #[tokio::test]
    async fn get_all_maps_an_empty_listing_to_an_empty_list() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_all()
            .times(1)
            .return_once(|| Ok(Some(Vec::new())));

        let handler = GetAllUsersActionHandler::new(Arc::new(repo), catalog());
        let result = handler
            .execute(GetAllUsersCommand)
            .await
            .expect("listing succeeds");

        assert_eq!(result, Some(Vec::new()), "empty is a result, not absence");
    }

    #[tokio::test]
    async fn get_all_keeps_an_absent_listing_absent() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_all().times(1).return_once(|| Ok(None));

        let handler = GetAllUsersActionHandler::new(Arc::new(repo), catalog());
        let result = handler
            .execute(GetAllUsersCommand)
            .await
            .expect("listing succeeds");

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_all_propagates_repository_failure_untouched() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_all()
            .times(1)
            .return_once(|| Err(RepositoryError::connection("refused")));

        let handler = GetAllUsersActionHandler::new(Arc::new(repo), catalog());
        let error = handler
            .execute(GetAllUsersCommand)
            .await
            .expect_err("failure propagates");

        assert_eq!(
            error,
            CommandError::Repository(RepositoryError::connection("refused"))
        );
    }

    #[tokio::test]
    async fn get_user_rejects_an_unknown_id_with_the_catalogued_code() {
        let mut repo = MockUserRepository::new();
        repo.expect_get().times(1).return_once(|_| Ok(None));

        let handler = GetUserActionHandler::new(Arc::new(repo), catalog());
        let error = handler
            .execute(GetUserCommand {
                id: EntityId::new(99),
            })
            .await
            .expect_err("unknown id rejects");

        let notifications = error.notifications().expect("rejection carries data");
        assert!(notifications.contains_code(codes::user::USER_NOT_FOUND));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_existed() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .withf(|id: &EntityId| id.value() == 3)
            .times(1)
            .return_once(|_| Ok(true));

        let handler = DeleteUserActionHandler::new(Arc::new(repo), catalog());
        let deleted = handler
            .execute(DeleteUserCommand {
                id: EntityId::new(3),
            })
            .await
            .expect("delete succeeds");
        assert!(deleted);
    }
}
