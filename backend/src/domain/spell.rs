//! Spell entity and the per-condition damage rules attached to it.

use super::catalog::{codes, NotificationCatalog};
use super::entity::{EntityId, Validatable};
use super::notification::Notifications;
use super::rules;
use super::weather::WeatherCondition;

/// Damage modifier applied when a spell is cast under a weather condition.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellRule {
    id: EntityId,
    condition: WeatherCondition,
    multiplier: f64,
}

impl SpellRule {
    /// Build a new, unpersisted rule.
    pub fn new(condition: WeatherCondition, multiplier: f64) -> Self {
        Self {
            id: EntityId::NEW,
            condition,
            multiplier,
        }
    }

    /// Return this rule with a persistence-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    /// Persistence identifier; zero while unpersisted.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Weather condition the rule triggers under.
    pub fn condition(&self) -> WeatherCondition {
        self.condition
    }

    /// Damage multiplier applied while the condition holds.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    fn multiplier_in_range(&self) -> bool {
        self.multiplier.is_finite()
            && self.multiplier >= rules::spell::rule::MIN_MULTIPLIER
            && self.multiplier <= rules::spell::rule::MAX_MULTIPLIER
    }
}

/// Castable spell with its weather-dependent damage rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    id: EntityId,
    name: String,
    description: String,
    mana_cost: u32,
    base_damage: u32,
    spell_rules: Vec<SpellRule>,
}

impl Spell {
    /// Build a new, unpersisted spell.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mana_cost: u32,
        base_damage: u32,
    ) -> Self {
        Self {
            id: EntityId::NEW,
            name: name.into(),
            description: description.into(),
            mana_cost,
            base_damage,
            spell_rules: Vec::new(),
        }
    }

    /// Return this spell with a persistence-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    /// Attach a damage rule.
    #[must_use]
    pub fn with_rule(mut self, rule: SpellRule) -> Self {
        self.spell_rules.push(rule);
        self
    }

    /// Persistence identifier; zero while unpersisted.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Flavour text shown in the spell book.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Mana drained per cast.
    pub fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    /// Damage dealt before weather modifiers.
    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    /// Attached damage rules.
    pub fn spell_rules(&self) -> &[SpellRule] {
        &self.spell_rules
    }
}

impl Validatable for Spell {
    fn validate(&self, catalog: &NotificationCatalog) -> Notifications {
        let mut notifications = Notifications::new();

        let name = self.name.trim();
        if name.is_empty() {
            catalog.append(&mut notifications, codes::spell::NAME_IS_REQUIRED);
        } else {
            let length = name.chars().count();
            if length <= rules::spell::name::MIN_LENGTH || length > rules::spell::name::MAX_LENGTH {
                catalog.append(&mut notifications, codes::spell::INVALID_NAME);
            }
        }

        if self.mana_cost < rules::spell::mana_cost::MIN
            || self.mana_cost > rules::spell::mana_cost::MAX
        {
            catalog.append(&mut notifications, codes::spell::INVALID_MANA_COST);
        }

        if self.spell_rules.iter().any(|r| !r.multiplier_in_range()) {
            catalog.append(&mut notifications, codes::spell::INVALID_SPELL_RULE);
        }

        notifications
    }
}
