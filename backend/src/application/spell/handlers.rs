//! Action handlers for spell commands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::command::{ensure_valid, ActionHandler, Command, CommandError};
use crate::application::mapper::Mapper;
use crate::domain::ports::SpellRepository;
use crate::domain::{codes, NotificationCatalog};

use super::commands::{AddSpellCommand, DeleteSpellCommand, GetAllSpellsCommand, GetSpellCommand};
use super::dto::SpellResponseDto;
use super::mapper::SpellEntityMapper;

/// Creates a spell: validate, persist, map.
pub struct AddSpellActionHandler<R> {
    repository: Arc<R>,
    mapper: SpellEntityMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<R> AddSpellActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            repository,
            mapper: SpellEntityMapper::default(),
            catalog,
        }
    }
}

#[async_trait]
impl<R> ActionHandler<AddSpellCommand> for AddSpellActionHandler<R>
where
    R: SpellRepository,
{
    async fn execute(&self, command: AddSpellCommand) -> Result<SpellResponseDto, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        let persisted = self.repository.add(command.to_spell()).await?;
        tracing::info!(
            command = AddSpellCommand::name(),
            id = persisted.id().value(),
            "spell persisted"
        );
        Ok(self.mapper.to_dto(&persisted))
    }
}

/// Lists spells, preserving the absent-versus-empty distinction.
pub struct GetAllSpellsActionHandler<R> {
    repository: Arc<R>,
    mapper: SpellEntityMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<R> GetAllSpellsActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            repository,
            mapper: SpellEntityMapper::default(),
            catalog,
        }
    }
}

#[async_trait]
impl<R> ActionHandler<GetAllSpellsCommand> for GetAllSpellsActionHandler<R>
where
    R: SpellRepository,
{
    async fn execute(
        &self,
        command: GetAllSpellsCommand,
    ) -> Result<Option<Vec<SpellResponseDto>>, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        // A non-null source always maps through, empty included; only an
        // absent collection stays absent.
        let spells = self.repository.get_all().await?;
        Ok(spells.map(|spells| {
            spells
                .iter()
                .map(|spell| self.mapper.to_dto(spell))
                .collect()
        }))
    }
}

/// Fetches one spell, rejecting with SN-004 when the id is unknown.
pub struct GetSpellActionHandler<R> {
    repository: Arc<R>,
    mapper: SpellEntityMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<R> GetSpellActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            repository,
            mapper: SpellEntityMapper::default(),
            catalog,
        }
    }
}

#[async_trait]
impl<R> ActionHandler<GetSpellCommand> for GetSpellActionHandler<R>
where
    R: SpellRepository,
{
    async fn execute(&self, command: GetSpellCommand) -> Result<SpellResponseDto, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        match self.repository.get(command.id).await? {
            Some(spell) => Ok(self.mapper.to_dto(&spell)),
            None => Err(CommandError::Rejected(
                self.catalog.get_all([codes::spell::SPELL_NOT_FOUND]),
            )),
        }
    }
}

/// Deletes one spell by identifier.
pub struct DeleteSpellActionHandler<R> {
    repository: Arc<R>,
    catalog: Arc<NotificationCatalog>,
}

impl<R> DeleteSpellActionHandler<R> {
    /// Wire the handler to its repository.
    pub fn new(repository: Arc<R>, catalog: Arc<NotificationCatalog>) -> Self {
        Self { repository, catalog }
    }
}

#[async_trait]
impl<R> ActionHandler<DeleteSpellCommand> for DeleteSpellActionHandler<R>
where
    R: SpellRepository,
{
    async fn execute(&self, command: DeleteSpellCommand) -> Result<bool, CommandError> {
        ensure_valid(&command, &self.catalog)?;
        Ok(self.repository.delete(command.id).await?)
    }
}
