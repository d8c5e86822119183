//! Core stat vocabulary shared across the resolution pipeline

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One of the six character traits used for action rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterTrait {
    Agility,
    Strength,
    Finesse,
    Instinct,
    Presence,
    Knowledge,
}

impl CharacterTrait {
    /// Get all six traits in display order
    pub fn all() -> &'static [CharacterTrait] {
        &[
            CharacterTrait::Agility,
            CharacterTrait::Strength,
            CharacterTrait::Finesse,
            CharacterTrait::Instinct,
            CharacterTrait::Presence,
            CharacterTrait::Knowledge,
        ]
    }

    /// Display name as it appears in feature text
    pub fn name(&self) -> &'static str {
        match self {
            CharacterTrait::Agility => "Agility",
            CharacterTrait::Strength => "Strength",
            CharacterTrait::Finesse => "Finesse",
            CharacterTrait::Instinct => "Instinct",
            CharacterTrait::Presence => "Presence",
            CharacterTrait::Knowledge => "Knowledge",
        }
    }
}

/// A stat that equipment can modify
///
/// The set is closed: seven simple stats plus the six traits. There are no
/// dynamic stat names anywhere in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifiableStat {
    Evasion,
    Proficiency,
    ArmorScore,
    MajorThreshold,
    SevereThreshold,
    AttackRolls,
    SpellcastRolls,
    Trait(CharacterTrait),
}

/// Display-name lookup shared by every sentence matcher
static NAME_TABLE: Lazy<Vec<(&'static str, ModifiableStat)>> = Lazy::new(|| {
    ModifiableStat::all().iter().map(|s| (s.name(), *s)).collect()
});

impl ModifiableStat {
    /// Get all thirteen modifiable stats
    pub fn all() -> &'static [ModifiableStat] {
        static ALL: [ModifiableStat; 13] = [
            ModifiableStat::Evasion,
            ModifiableStat::Proficiency,
            ModifiableStat::ArmorScore,
            ModifiableStat::MajorThreshold,
            ModifiableStat::SevereThreshold,
            ModifiableStat::AttackRolls,
            ModifiableStat::SpellcastRolls,
            ModifiableStat::Trait(CharacterTrait::Agility),
            ModifiableStat::Trait(CharacterTrait::Strength),
            ModifiableStat::Trait(CharacterTrait::Finesse),
            ModifiableStat::Trait(CharacterTrait::Instinct),
            ModifiableStat::Trait(CharacterTrait::Presence),
            ModifiableStat::Trait(CharacterTrait::Knowledge),
        ];
        &ALL
    }

    /// Display name as it appears in feature text
    pub fn name(&self) -> &'static str {
        match self {
            ModifiableStat::Evasion => "Evasion",
            ModifiableStat::Proficiency => "Proficiency",
            ModifiableStat::ArmorScore => "Armor Score",
            ModifiableStat::MajorThreshold => "Major Threshold",
            ModifiableStat::SevereThreshold => "Severe Threshold",
            ModifiableStat::AttackRolls => "Attack Rolls",
            ModifiableStat::SpellcastRolls => "Spellcast Rolls",
            ModifiableStat::Trait(t) => t.name(),
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<ModifiableStat> {
        let name = name.trim();
        NAME_TABLE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, stat)| *stat)
    }

    pub(crate) fn name_table() -> &'static [(&'static str, ModifiableStat)] {
        &NAME_TABLE
    }
}

/// One signed stat delta, extracted from text or supplied explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: ModifiableStat,
    pub value: i32,
    /// Set when the modifier came from an "all character traits" clause
    #[serde(default)]
    pub applies_to_all_traits: bool,
}

impl StatModifier {
    /// Create a plain single-stat modifier
    pub fn new(stat: ModifiableStat, value: i32) -> Self {
        StatModifier {
            stat,
            value,
            applies_to_all_traits: false,
        }
    }
}

/// Per-trait integer bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitBonuses {
    #[serde(default)]
    pub agility: i32,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub finesse: i32,
    #[serde(default)]
    pub instinct: i32,
    #[serde(default)]
    pub presence: i32,
    #[serde(default)]
    pub knowledge: i32,
}

impl TraitBonuses {
    /// Get the bonus for one trait
    pub fn get(&self, t: CharacterTrait) -> i32 {
        match t {
            CharacterTrait::Agility => self.agility,
            CharacterTrait::Strength => self.strength,
            CharacterTrait::Finesse => self.finesse,
            CharacterTrait::Instinct => self.instinct,
            CharacterTrait::Presence => self.presence,
            CharacterTrait::Knowledge => self.knowledge,
        }
    }

    pub fn get_mut(&mut self, t: CharacterTrait) -> &mut i32 {
        match t {
            CharacterTrait::Agility => &mut self.agility,
            CharacterTrait::Strength => &mut self.strength,
            CharacterTrait::Finesse => &mut self.finesse,
            CharacterTrait::Instinct => &mut self.instinct,
            CharacterTrait::Presence => &mut self.presence,
            CharacterTrait::Knowledge => &mut self.knowledge,
        }
    }

    /// Pointwise add another set of bonuses
    pub fn add(&mut self, other: &TraitBonuses) {
        self.agility += other.agility;
        self.strength += other.strength;
        self.finesse += other.finesse;
        self.instinct += other.instinct;
        self.presence += other.presence;
        self.knowledge += other.knowledge;
    }

    /// Check whether every trait bonus is zero
    pub fn is_zero(&self) -> bool {
        *self == TraitBonuses::default()
    }
}

/// Weapon handedness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Burden {
    #[serde(rename = "One-Handed")]
    OneHanded,
    #[serde(rename = "Two-Handed")]
    TwoHanded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_stats() {
        assert_eq!(ModifiableStat::all().len(), 13);
        assert_eq!(CharacterTrait::all().len(), 6);
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(
            ModifiableStat::from_name("evasion"),
            Some(ModifiableStat::Evasion)
        );
        assert_eq!(
            ModifiableStat::from_name("ARMOR SCORE"),
            Some(ModifiableStat::ArmorScore)
        );
        assert_eq!(
            ModifiableStat::from_name("Finesse"),
            Some(ModifiableStat::Trait(CharacterTrait::Finesse))
        );
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(ModifiableStat::from_name("Luck"), None);
        assert_eq!(ModifiableStat::from_name(""), None);
    }

    #[test]
    fn test_name_table_covers_all_stats() {
        assert_eq!(ModifiableStat::name_table().len(), 13);
        for stat in ModifiableStat::all() {
            assert_eq!(ModifiableStat::from_name(stat.name()), Some(*stat));
        }
    }

    #[test]
    fn test_trait_bonuses_add() {
        let mut a = TraitBonuses {
            agility: 1,
            ..Default::default()
        };
        let b = TraitBonuses {
            agility: 2,
            knowledge: -1,
            ..Default::default()
        };
        a.add(&b);
        assert_eq!(a.agility, 3);
        assert_eq!(a.knowledge, -1);
        assert!(!a.is_zero());
        assert!(TraitBonuses::default().is_zero());
    }

    #[test]
    fn test_burden_serde_names() {
        let two: Burden = serde_json::from_str("\"Two-Handed\"").unwrap();
        assert_eq!(two, Burden::TwoHanded);
        assert_eq!(serde_json::to_string(&Burden::OneHanded).unwrap(), "\"One-Handed\"");
    }
}
