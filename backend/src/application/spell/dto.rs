//! Wire shapes for spell operations.

use serde::{Deserialize, Serialize};

use crate::domain::WeatherCondition;

/// Inbound payload for one weather-dependent damage rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRuleRequestDto {
    pub condition: WeatherCondition,
    pub multiplier: f64,
}

/// Outbound payload for one damage rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRuleResponseDto {
    pub id: i64,
    pub condition: WeatherCondition,
    pub multiplier: f64,
}

/// Inbound payload for creating a spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRequestDto {
    pub name: String,
    pub description: String,
    pub mana_cost: u32,
    pub base_damage: u32,
    #[serde(default)]
    pub rules: Vec<SpellRuleRequestDto>,
}

/// Outbound spell payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub mana_cost: u32,
    pub base_damage: u32,
    pub rules: Vec<SpellRuleResponseDto>,
}
