//! Spell commands.

use crate::application::command::Command;
use crate::application::mapper::Mapper;
use crate::domain::{EntityId, NotificationCatalog, Notifications, Spell, Validatable};

use super::dto::{SpellRequestDto, SpellResponseDto};
use super::mapper::SpellEntityMapper;

/// Create a spell with its damage rules.
#[derive(Debug, Clone)]
pub struct AddSpellCommand {
    pub request: SpellRequestDto,
}

impl AddSpellCommand {
    /// Build the [`Spell`] entity this command wraps.
    pub fn to_spell(&self) -> Spell {
        SpellEntityMapper::default().to_entity(self.request.clone())
    }
}

impl Command for AddSpellCommand {
    type Output = SpellResponseDto;

    fn name() -> &'static str {
        "add_spell"
    }

    // The command's validity is the wrapped entity's validity.
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications {
        self.to_spell().validate(catalog)
    }
}

/// List every spell.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllSpellsCommand;

impl Command for GetAllSpellsCommand {
    /// `None` when the repository reported no collection at all;
    /// `Some(vec![])` is a legitimate, successful empty listing.
    type Output = Option<Vec<SpellResponseDto>>;

    fn name() -> &'static str {
        "get_all_spells"
    }

    fn validate(&self, _catalog: &NotificationCatalog) -> Notifications {
        Notifications::new()
    }
}

/// Fetch one spell by identifier.
#[derive(Debug, Clone, Copy)]
pub struct GetSpellCommand {
    pub id: EntityId,
}

impl Command for GetSpellCommand {
    type Output = SpellResponseDto;

    fn name() -> &'static str {
        "get_spell"
    }

    fn validate(&self, _catalog: &NotificationCatalog) -> Notifications {
        Notifications::new()
    }
}

/// Delete one spell by identifier.
#[derive(Debug, Clone, Copy)]
pub struct DeleteSpellCommand {
    pub id: EntityId,
}

impl Command for DeleteSpellCommand {
    /// `false` when no record with the identifier existed.
    type Output = bool;

    fn name() -> &'static str {
        "delete_spell"
    }

    fn validate(&self, _catalog: &NotificationCatalog) -> Notifications {
        Notifications::new()
    }
}
