//! Aggregation of normalized modifiers across equipped slots

use crate::equipment::EquipmentItem;
use crate::source::{normalize_item, NormalizedModifiers};
use crate::types::TraitBonuses;
use serde::{Deserialize, Serialize};

/// Pointwise sum of normalized modifiers from every equipped item
///
/// Constructed empty, filled during a single aggregation pass, then treated
/// as read-only by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentBonuses {
    pub evasion: i32,
    pub proficiency: i32,
    pub armor_score: i32,
    pub major_threshold: i32,
    pub severe_threshold: i32,
    pub attack_rolls: i32,
    pub spellcast_rolls: i32,
    pub traits: TraitBonuses,
    /// Display names of items that contributed at least one modifier
    pub contributing: Vec<String>,
}

impl EquipmentBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one normalized record into the running totals
    pub fn add(&mut self, record: &NormalizedModifiers) {
        if record.is_empty() {
            return;
        }
        self.evasion += record.evasion;
        self.proficiency += record.proficiency;
        self.armor_score += record.armor_score;
        self.major_threshold += record.major_threshold;
        self.severe_threshold += record.severe_threshold;
        self.attack_rolls += record.attack_rolls;
        self.spellcast_rolls += record.spellcast_rolls;
        self.traits.add(&record.traits);
        if let Some(name) = &record.name {
            self.contributing.push(name.clone());
        }
    }

    /// Check whether the aggregate carries no modifiers at all
    pub fn is_empty(&self) -> bool {
        self.evasion == 0
            && self.proficiency == 0
            && self.armor_score == 0
            && self.major_threshold == 0
            && self.severe_threshold == 0
            && self.attack_rolls == 0
            && self.spellcast_rolls == 0
            && self.traits.is_zero()
    }
}

/// Currently equipped items by slot
///
/// Callers resolve which concrete item (standard or homebrew variant) is
/// active for each slot before building the loadout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loadout<'a> {
    pub armor: Option<&'a EquipmentItem>,
    pub primary_weapon: Option<&'a EquipmentItem>,
    pub secondary_weapon: Option<&'a EquipmentItem>,
    pub accessory: Option<&'a EquipmentItem>,
}

/// Normalize every equipped slot and fold the results
///
/// A Two-Handed primary weapon occupies the secondary slot, so the
/// secondary weapon is skipped outright in that case. The check runs once
/// per call against the current primary; nothing is stored.
pub fn aggregate_loadout(loadout: &Loadout) -> EquipmentBonuses {
    let mut records = Vec::with_capacity(4);
    records.push(normalize_item(loadout.armor));
    records.push(normalize_item(loadout.primary_weapon));

    let two_handed_primary = loadout
        .primary_weapon
        .is_some_and(|weapon| weapon.is_two_handed());
    if !two_handed_primary {
        records.push(normalize_item(loadout.secondary_weapon));
    }

    records.push(normalize_item(loadout.accessory));
    aggregate(&records)
}

/// Fold already-normalized records into one aggregate
pub fn aggregate(records: &[NormalizedModifiers]) -> EquipmentBonuses {
    let mut totals = EquipmentBonuses::new();
    for record in records {
        totals.add(record);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{ExplicitModifiers, ItemFeature};
    use crate::types::Burden;

    fn item(name: &str, description: &str) -> EquipmentItem {
        EquipmentItem {
            name: name.to_string(),
            features: vec![ItemFeature::new("Feature", description)],
            ..Default::default()
        }
    }

    #[test]
    fn test_aggregate_sums_pointwise() {
        let dagger = item("Dagger", "+1 to Evasion");
        let charm = item("Charm", "+1 to Evasion, +2 to Knowledge");
        let records = vec![
            normalize_item(Some(&dagger)),
            normalize_item(Some(&charm)),
        ];
        let totals = aggregate(&records);
        assert_eq!(totals.evasion, 2);
        assert_eq!(totals.traits.knowledge, 2);
        assert_eq!(totals.contributing, vec!["Dagger", "Charm"]);
    }

    #[test]
    fn test_two_handed_primary_excludes_secondary() {
        let mut greatsword = item("Greatsword", "+1 to Attack Rolls");
        greatsword.burden = Some(Burden::TwoHanded);
        let shield = EquipmentItem {
            name: "Round Shield".to_string(),
            stat_modifiers: Some(ExplicitModifiers {
                armor_score: 2,
                ..Default::default()
            }),
            ..Default::default()
        };

        let loadout = Loadout {
            primary_weapon: Some(&greatsword),
            secondary_weapon: Some(&shield),
            ..Default::default()
        };
        let totals = aggregate_loadout(&loadout);
        assert_eq!(totals.armor_score, 0);
        assert_eq!(totals.attack_rolls, 1);
        assert!(!totals.contributing.contains(&"Round Shield".to_string()));
    }

    #[test]
    fn test_one_handed_primary_keeps_secondary() {
        let mut sword = item("Shortsword", "+1 to Attack Rolls");
        sword.burden = Some(Burden::OneHanded);
        let shield = EquipmentItem {
            name: "Round Shield".to_string(),
            stat_modifiers: Some(ExplicitModifiers {
                armor_score: 2,
                ..Default::default()
            }),
            ..Default::default()
        };

        let loadout = Loadout {
            primary_weapon: Some(&sword),
            secondary_weapon: Some(&shield),
            ..Default::default()
        };
        let totals = aggregate_loadout(&loadout);
        assert_eq!(totals.armor_score, 2);
    }

    #[test]
    fn test_legacy_armor_contributes_nothing() {
        let armor = EquipmentItem {
            name: "Full Plate".to_string(),
            evasion_modifier: Some(-2),
            ..Default::default()
        };
        let loadout = Loadout {
            armor: Some(&armor),
            ..Default::default()
        };
        let totals = aggregate_loadout(&loadout);
        assert!(totals.is_empty());
        assert!(totals.contributing.is_empty());
    }

    #[test]
    fn test_empty_loadout() {
        let totals = aggregate_loadout(&Loadout::default());
        assert!(totals.is_empty());
    }

    #[test]
    fn test_negative_contributions_counted() {
        let cursed = item("Cursed Band", "\u{2212}1 Proficiency");
        let totals = aggregate(&[normalize_item(Some(&cursed))]);
        assert_eq!(totals.proficiency, -1);
        assert_eq!(totals.contributing, vec!["Cursed Band"]);
    }
}
