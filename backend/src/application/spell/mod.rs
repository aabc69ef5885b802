//! Spell operations: commands, handlers and wire shapes.

mod commands;
mod dto;
mod handlers;
mod mapper;

pub use commands::{AddSpellCommand, DeleteSpellCommand, GetAllSpellsCommand, GetSpellCommand};
pub use dto::{SpellRequestDto, SpellResponseDto, SpellRuleRequestDto, SpellRuleResponseDto};
pub use handlers::{
    AddSpellActionHandler, DeleteSpellActionHandler, GetAllSpellsActionHandler,
    GetSpellActionHandler,
};
pub use mapper::{SpellEntityMapper, SpellRuleEntityMapper};
