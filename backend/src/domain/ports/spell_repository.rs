//! Port abstraction for spell persistence adapters.

use async_trait::async_trait;

use crate::domain::{EntityId, Spell};

use super::RepositoryError;

/// Persistence boundary for [`Spell`] records; same absent-versus-empty
/// semantics as the user repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellRepository: Send + Sync {
    /// Fetch every stored spell.
    async fn get_all(&self) -> Result<Option<Vec<Spell>>, RepositoryError>;

    /// Fetch one spell by identifier.
    async fn get(&self, id: EntityId) -> Result<Option<Spell>, RepositoryError>;

    /// Persist a new spell, returning it with a nonzero identifier assigned.
    async fn add(&self, spell: Spell) -> Result<Spell, RepositoryError>;

    /// Delete by identifier; `false` when no such record existed.
    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError>;
}

/// Stub repository for tests where spell persistence is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSpellRepository;

#[async_trait]
impl SpellRepository for FixtureSpellRepository {
    async fn get_all(&self) -> Result<Option<Vec<Spell>>, RepositoryError> {
        Ok(None)
    }

    async fn get(&self, _id: EntityId) -> Result<Option<Spell>, RepositoryError> {
        Ok(None)
    }

    async fn add(&self, spell: Spell) -> Result<Spell, RepositoryError> {
        Ok(spell.with_id(EntityId::new(1)))
    }

    async fn delete(&self, _id: EntityId) -> Result<bool, RepositoryError> {
        Ok(false)
    }
}
