//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use crate::domain::{EntityId, User};

use super::RepositoryError;

/// Persistence boundary for [`User`] records.
///
/// `get_all` returns `None` when the backing store has no user collection at
/// all (e.g. unreachable table) and `Some(vec![])` when the collection exists
/// but is empty; the two are distinct successful outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user.
    async fn get_all(&self) -> Result<Option<Vec<User>>, RepositoryError>;

    /// Fetch one user by identifier.
    async fn get(&self, id: EntityId) -> Result<Option<User>, RepositoryError>;

    /// Persist a new user, returning it with a nonzero identifier assigned.
    async fn add(&self, user: User) -> Result<User, RepositoryError>;

    /// Delete by identifier; `false` when no such record existed.
    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;
}

/// Stub repository for tests where user persistence is not under test.
///
/// Lookups find nothing, `add` assigns identifier 1 and deletes report
/// `false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn get_all(&self) -> Result<Option<Vec<User>>, RepositoryError> {
        Ok(None)
    }

    async fn get(&self, _id: EntityId) -> Result<Option<User>, RepositoryError> {
        Ok(None)
    }

    async fn add(&self, user: User) -> Result<User, RepositoryError> {
        Ok(user.with_id(EntityId::new(1)))
    }

    async fn delete(&self, _id: EntityId) -> Result<bool, RepositoryError> {
        Ok(false)
    }
}
