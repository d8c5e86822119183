//! Derived-stat calculation with per-component breakdowns

use crate::config::DEFAULT_PROFICIENCY_BASE;
use crate::stat_block::StatsInput;
use crate::types::CharacterTrait;
use serde::{Deserialize, Serialize};

/// Hit points and the parts they were computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPointsStat {
    pub total: i32,
    pub class_base: i32,
    pub tier_bonus: i32,
}

/// Evasion and the parts it was computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvasionStat {
    pub total: i32,
    pub class_base: i32,
    pub armor_modifier: i32,
    pub equipment_modifier: i32,
}

/// Armor score and the parts it was computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorScoreStat {
    pub total: i32,
    pub armor_base: i32,
    pub equipment_modifier: i32,
}

/// Proficiency and the parts it was computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyStat {
    pub total: i32,
    pub base: i32,
    pub equipment_modifier: i32,
}

/// One damage threshold and the parts it was computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdStat {
    pub total: i32,
    pub armor_base: i32,
    pub level_bonus: i32,
    pub equipment_modifier: i32,
}

/// One trait total and the parts it was computed from
///
/// `equipment_modifier` already folds the armor's agility modifier into the
/// Agility trait, so display code shows a single equipment number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitStat {
    pub total: i32,
    pub base: i32,
    pub bonus: i32,
    pub equipment_modifier: i32,
}

/// Derived totals for all six traits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTraits {
    pub agility: TraitStat,
    pub strength: TraitStat,
    pub finesse: TraitStat,
    pub instinct: TraitStat,
    pub presence: TraitStat,
    pub knowledge: TraitStat,
}

impl DerivedTraits {
    /// Get the derived stat for one trait
    pub fn get(&self, t: CharacterTrait) -> TraitStat {
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

/// Complete derived stats for one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub hit_points: HitPointsStat,
    pub evasion: EvasionStat,
    pub armor_score: ArmorScoreStat,
    pub proficiency: ProficiencyStat,
    pub major_threshold: ThresholdStat,
    pub severe_threshold: ThresholdStat,
    pub traits: DerivedTraits,
}

fn threshold(armor_base: i32, level: u32, equipment_modifier: i32) -> ThresholdStat {
    let level_bonus = (level as i32 - 1).max(0);
    ThresholdStat {
        total: armor_base + level_bonus + equipment_modifier,
        armor_base,
        level_bonus,
        equipment_modifier,
    }
}

/// Combine class, armor, progression, trait and equipment inputs into final
/// stats with per-component breakdowns
///
/// Pure function of its input: identical inputs yield identical outputs,
/// and nothing is retained between calls. No value is clamped here; a
/// presentation layer that wants a floor applies it on top.
pub fn derive_stats(input: &StatsInput) -> DerivedStats {
    let class = &input.class;
    let armor = &input.armor;
    let equipment = &input.equipment;

    // Level-up HP increases are tracked elsewhere; only the tier band
    // contributes here
    let tier_bonus = class.tier as i32 - 1;
    let hit_points = HitPointsStat {
        total: class.base_hp + tier_bonus,
        class_base: class.base_hp,
        tier_bonus,
    };

    // The armor's own evasion modifier is applied exactly once, here
    let evasion = EvasionStat {
        total: class.base_evasion + armor.evasion_modifier + equipment.evasion,
        class_base: class.base_evasion,
        armor_modifier: armor.evasion_modifier,
        equipment_modifier: equipment.evasion,
    };

    let armor_score = ArmorScoreStat {
        total: armor.base_score + equipment.armor_score,
        armor_base: armor.base_score,
        equipment_modifier: equipment.armor_score,
    };

    let proficiency_base = input.proficiency_base.unwrap_or(DEFAULT_PROFICIENCY_BASE);
    let proficiency = ProficiencyStat {
        total: proficiency_base + equipment.proficiency,
        base: proficiency_base,
        equipment_modifier: equipment.proficiency,
    };

    let level = input.progression.level;
    let major_threshold = threshold(
        armor.base_thresholds.major,
        level,
        equipment.major_threshold,
    );
    let severe_threshold = threshold(
        armor.base_thresholds.severe,
        level,
        equipment.severe_threshold,
    );

    let trait_stat = |t: CharacterTrait| {
        let score = input.traits.get(t);
        let armor_part = if t == CharacterTrait::Agility {
            armor.agility_modifier
        } else {
            0
        };
        let equipment_modifier = equipment.traits.get(t) + armor_part;
        TraitStat {
            total: score.value + score.bonus + equipment_modifier,
            base: score.value,
            bonus: score.bonus,
            equipment_modifier,
        }
    };
    let traits = DerivedTraits {
        agility: trait_stat(CharacterTrait::Agility),
        strength: trait_stat(CharacterTrait::Strength),
        finesse: trait_stat(CharacterTrait::Finesse),
        instinct: trait_stat(CharacterTrait::Instinct),
        presence: trait_stat(CharacterTrait::Presence),
        knowledge: trait_stat(CharacterTrait::Knowledge),
    };

    DerivedStats {
        hit_points,
        evasion,
        armor_score,
        proficiency,
        major_threshold,
        severe_threshold,
        traits,
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::stat_block::{ArmorStats, ClassStats, DamageThresholds, Progression, StatsInput};
    use proptest::prelude::*;

    proptest! {
        /// The engine is a pure function over arbitrary numeric inputs
        #[test]
        fn derive_is_deterministic(
            base_hp in -20i32..40,
            base_evasion in -20i32..40,
            tier in 0u8..6,
            base_score in -10i32..20,
            evasion_modifier in -5i32..5,
            agility_modifier in -5i32..5,
            major in -10i32..30,
            severe in -10i32..40,
            level in 0u32..30,
        ) {
            let input = StatsInput {
                class: ClassStats { base_hp, base_evasion, tier },
                armor: ArmorStats {
                    base_score,
                    evasion_modifier,
                    agility_modifier,
                    base_thresholds: DamageThresholds { major, severe },
                },
                progression: Progression { level },
                ..Default::default()
            };
            let first = derive_stats(&input);
            prop_assert_eq!(first, derive_stats(&input));
            prop_assert_eq!(first.evasion.total, base_evasion + evasion_modifier);
            prop_assert_eq!(first.major_threshold.total, major + (level as i32 - 1).max(0));
        }
    }
}
