//! DTO conversion for spells and their rules.

use crate::application::mapper::Mapper;
use crate::domain::{Spell, SpellRule};

use super::dto::{SpellRequestDto, SpellResponseDto, SpellRuleRequestDto, SpellRuleResponseDto};

/// Converts between [`SpellRule`] and its wire shapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpellRuleEntityMapper;

impl Mapper<SpellRule> for SpellRuleEntityMapper {
    type Request = SpellRuleRequestDto;
    type Response = SpellRuleResponseDto;

    fn to_entity(&self, request: SpellRuleRequestDto) -> SpellRule {
        SpellRule::new(request.condition, request.multiplier)
    }

    fn to_dto(&self, entity: &SpellRule) -> SpellRuleResponseDto {
        SpellRuleResponseDto {
            id: entity.id().value(),
            condition: entity.condition(),
            multiplier: entity.multiplier(),
        }
    }
}

/// Converts between [`Spell`] and its wire shapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpellEntityMapper {
    rules: SpellRuleEntityMapper,
}

impl Mapper<Spell> for SpellEntityMapper {
    type Request = SpellRequestDto;
    type Response = SpellResponseDto;

    fn to_entity(&self, request: SpellRequestDto) -> Spell {
        let mut spell = Spell::new(
            request.name,
            request.description,
            request.mana_cost,
            request.base_damage,
        );
        for rule in request.rules {
            spell = spell.with_rule(self.rules.to_entity(rule));
        }
        spell
    }

    fn to_dto(&self, entity: &Spell) -> SpellResponseDto {
        SpellResponseDto {
            id: entity.id().value(),
            name: entity.name().to_owned(),
            description: entity.description().to_owned(),
            mana_cost: entity.mana_cost(),
            base_damage: entity.base_damage(),
            rules: entity
                .spell_rules()
                .iter()
                .map(|rule| self.rules.to_dto(rule))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeatherCondition;

    fn request() -> SpellRequestDto {
        SpellRequestDto {
            name: "Chain Lightning".to_owned(),
            description: "Arcs between targets.".to_owned(),
            mana_cost: 55,
            base_damage: 70,
            rules: vec![SpellRuleRequestDto {
                condition: WeatherCondition::Thunderstorm,
                multiplier: 2.0,
            }],
        }
    }

    #[test]
    fn round_trip_preserves_every_exposed_field() {
        let mapper = SpellEntityMapper::default();
        let entity = mapper.to_entity(request());
        let response = mapper.to_dto(&entity);

        assert_eq!(response.name, "Chain Lightning");
        assert_eq!(response.mana_cost, 55);
        assert_eq!(response.base_damage, 70);
        assert_eq!(response.rules.len(), 1);
        assert_eq!(response.rules[0].condition, WeatherCondition::Thunderstorm);
        assert_eq!(response.rules[0].multiplier, 2.0);
    }
}
