//! In-memory repository adapters.
//!
//! Backing store for tests and local runs; identifiers are assigned
//! sequentially starting at 1 so persisted records are never mistaken for new
//! ones.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{RepositoryError, SpellRepository, UserRepository};
use crate::domain::{EntityId, Spell, User};

struct Store<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Store<T> {
    fn assign_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Thread-safe in-memory [`UserRepository`].
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Store<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Option<Vec<User>>, RepositoryError> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Some(store.rows.clone()))
    }

    async fn get(&self, id: EntityId) -> Result<Option<User>, RepositoryError> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(store.rows.iter().find(|user| user.id() == id).cloned())
    }

    async fn add(&self, user: User) -> Result<User, RepositoryError> {
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = store.assign_id();
        let persisted = user.with_id(id);
        store.rows.push(persisted.clone());
        Ok(persisted)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = store.rows.len();
        store.rows.retain(|user| user.id() != id);
        Ok(store.rows.len() < before)
    }
}

/// Thread-safe in-memory [`SpellRepository`].
#[derive(Default)]
pub struct InMemorySpellRepository {
    inner: RwLock<Store<Spell>>,
}

impl InMemorySpellRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpellRepository for InMemorySpellRepository {
    async fn get_all(&self) -> Result<Option<Vec<Spell>>, RepositoryError> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Some(store.rows.clone()))
    }

    async fn get(&self, id: EntityId) -> Result<Option<Spell>, RepositoryError> {
        let store = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(store.rows.iter().find(|spell| spell.id() == id).cloned())
    }

    async fn add(&self, spell: Spell) -> Result<Spell, RepositoryError> {
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = store.assign_id();
        let persisted = spell.with_id(id);
        store.rows.push(persisted.clone());
        Ok(persisted)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        let mut store = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = store.rows.len();
        store.rows.retain(|spell| spell.id() != id);
        Ok(store.rows.len() < before)
    }
}
