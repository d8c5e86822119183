//! Equipment normalization - heterogeneous items to one modifier record

use crate::equipment::EquipmentItem;
use crate::parser::parse_features;
use crate::source::ModifierSource;
use crate::types::{ModifiableStat, StatModifier, TraitBonuses};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Canonical per-item stat deltas, independent of how they were expressed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedModifiers {
    pub evasion: i32,
    pub proficiency: i32,
    pub armor_score: i32,
    pub major_threshold: i32,
    pub severe_threshold: i32,
    pub attack_rolls: i32,
    pub spellcast_rolls: i32,
    pub traits: TraitBonuses,
    pub source: ModifierSource,
    /// Display name for breakdown tooltips
    pub name: Option<String>,
}

impl NormalizedModifiers {
    fn tagged(source: ModifierSource, name: &str) -> Self {
        NormalizedModifiers {
            source,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Fold one parsed modifier into the matching field
    pub fn apply(&mut self, modifier: &StatModifier) {
        match modifier.stat {
            ModifiableStat::Evasion => self.evasion += modifier.value,
            ModifiableStat::Proficiency => self.proficiency += modifier.value,
            ModifiableStat::ArmorScore => self.armor_score += modifier.value,
            ModifiableStat::MajorThreshold => self.major_threshold += modifier.value,
            ModifiableStat::SevereThreshold => self.severe_threshold += modifier.value,
            ModifiableStat::AttackRolls => self.attack_rolls += modifier.value,
            ModifiableStat::SpellcastRolls => self.spellcast_rolls += modifier.value,
            ModifiableStat::Trait(t) => *self.traits.get_mut(t) += modifier.value,
        }
    }

    /// Check whether every numeric field is zero
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

/// Produce the single normalized record for one equipment slot
///
/// Priority is strict: an explicit `stat_modifiers` block wins outright and
/// suppresses feature parsing; items exposing armor base fields normalize
/// to an empty legacy-armor record (those fields are applied once, in the
/// engine's armor term - adding them here would count them twice); anything
/// else has its feature text parsed. A missing item short-circuits to the
/// all-zero record tagged `None`.
pub fn normalize_item(item: Option<&EquipmentItem>) -> NormalizedModifiers {
    let Some(item) = item else {
        return NormalizedModifiers::default();
    };

    if let Some(explicit) = &item.stat_modifiers {
        let record = NormalizedModifiers {
            evasion: explicit.evasion,
            proficiency: explicit.proficiency,
            armor_score: explicit.armor_score,
            major_threshold: explicit.major_threshold,
            severe_threshold: explicit.severe_threshold,
            attack_rolls: explicit.attack_rolls,
            spellcast_rolls: explicit.spellcast_rolls,
            traits: explicit.traits,
            source: ModifierSource::Explicit,
            name: Some(item.name.clone()),
        };
        debug!(item = %item.name, "normalized from explicit stat modifiers");
        return record;
    }

    if item.is_legacy_armor() {
        debug!(item = %item.name, "normalized as legacy armor (empty record)");
        return NormalizedModifiers::tagged(ModifierSource::LegacyArmor, &item.name);
    }

    let mut record = NormalizedModifiers::tagged(ModifierSource::Parsed, &item.name);
    for effect in parse_features(&item.features) {
        for modifier in &effect.modifiers {
            record.apply(modifier);
        }
    }
    if record.is_empty() {
        record.source = ModifierSource::None;
    }
    debug!(item = %item.name, source = ?record.source, "normalized from feature text");
    record
}
