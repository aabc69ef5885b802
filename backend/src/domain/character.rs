//! Game character owned by a user.

use super::catalog::{codes, NotificationCatalog};
use super::entity::{EntityId, Validatable};
use super::notification::Notifications;
use super::rules;

/// Battle record and progression stats for one user.
///
/// Numeric stats start from the rule-set initial values; the battle tally is
/// mutated only through [`Character::record_victory`] and
/// [`Character::record_defeat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: EntityId,
    level: u32,
    experience: u32,
    battles: u32,
    wins: u32,
    losses: u32,
    medals: u32,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            id: EntityId::NEW,
            level: rules::character::INITIAL_LEVEL,
            experience: rules::character::INITIAL_EXPERIENCE,
            battles: rules::character::INITIAL_BATTLES,
            wins: rules::character::INITIAL_WINS,
            losses: rules::character::INITIAL_LOSSES,
            medals: rules::character::INITIAL_MEDALS,
        }
    }
}

impl Character {
    /// Return this character with a persistence-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    /// Persistence identifier; zero while unpersisted.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Accumulated experience points.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Total battles fought.
    pub fn battles(&self) -> u32 {
        self.battles
    }

    /// Battles won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Battles lost.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Medals earned.
    pub fn medals(&self) -> u32 {
        self.medals
    }

    /// Record a won battle.
    pub fn record_victory(&mut self) {
        self.battles += 1;
        self.wins += 1;
    }

    /// Record a lost battle.
    pub fn record_defeat(&mut self) {
        self.battles += 1;
        self.losses += 1;
    }

    /// Award a medal.
    pub fn award_medal(&mut self) {
        self.medals += 1;
    }
}

impl Validatable for Character {
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications {
        let mut notifications = Notifications::new();

        let level_in_range = (rules::character::INITIAL_LEVEL..=rules::character::MAX_LEVEL)
            .contains(&self.level);
        let experience_in_range = self.experience <= rules::character::MAX_EXPERIENCE;
        let tally_consistent = self.wins + self.losses <= self.battles;
        if !level_in_range || !experience_in_range || !tally_consistent {
            catalog.append(&mut notifications, codes::character::INVALID_CHARACTER);
        }

        notifications
    }
}
