//! Character-state inputs and derived-stat outputs

mod aggregator;
mod computed;

pub use aggregator::{aggregate, aggregate_loadout, EquipmentBonuses, Loadout};
pub use computed::{
    derive_stats, ArmorScoreStat, DerivedStats, DerivedTraits, EvasionStat, HitPointsStat,
    ProficiencyStat, ThresholdStat, TraitStat,
};

use crate::types::CharacterTrait;
use serde::{Deserialize, Serialize};

/// Class contribution to base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    pub base_hp: i32,
    pub base_evasion: i32,
    /// Level band (1-4); see `config::tier_for_level`
    pub tier: u8,
}

/// Damage breakpoints for one armor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageThresholds {
    pub major: i32,
    pub severe: i32,
}

/// Armor base stats, applied once by the calculation engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorStats {
    pub base_score: i32,
    pub evasion_modifier: i32,
    pub agility_modifier: i32,
    pub base_thresholds: DamageThresholds,
}

/// Level progression state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
}

/// Base value and permanent bonus for one trait
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    pub value: i32,
    pub bonus: i32,
}

/// All six trait scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitState {
    pub agility: TraitScore,
    pub strength: TraitScore,
    pub finesse: TraitScore,
    pub instinct: TraitScore,
    pub presence: TraitScore,
    pub knowledge: TraitScore,
}

impl TraitState {
    /// Get the score for one trait
    pub fn get(&self, t: CharacterTrait) -> TraitScore {
        match t {
            CharacterTrait::Agility => self.agility,
            CharacterTrait::Strength => self.strength,
            CharacterTrait::Finesse => self.finesse,
            CharacterTrait::Instinct => self.instinct,
            CharacterTrait::Presence => self.presence,
            CharacterTrait::Knowledge => self.knowledge,
        }
    }
}

/// Immutable input snapshot for one stat calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsInput {
    pub class: ClassStats,
    pub armor: ArmorStats,
    pub equipment: EquipmentBonuses,
    pub progression: Progression,
    pub traits: TraitState,
    /// Proficiency base override; defaults to the engine constant when unset
    #[serde(default)]
    pub proficiency_base: Option<i32>,
}
