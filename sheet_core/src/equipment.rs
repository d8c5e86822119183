//! Equipment input records supplied by the character-management layer
//!
//! These records mirror whatever subset of fields the app layer stores for
//! an item. A missing field always means "no contribution", never an error.

use crate::types::{Burden, TraitBonuses};
use serde::{Deserialize, Serialize};

/// One feature line on an equipment item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFeature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ItemFeature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        ItemFeature {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Explicit structured modifiers carried by user-authored items
///
/// When present on an item, these numbers are used as-is and the item's
/// feature text is never parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitModifiers {
    #[serde(default)]
    pub evasion: i32,
    #[serde(default)]
    pub proficiency: i32,
    #[serde(default)]
    pub armor_score: i32,
    #[serde(default)]
    pub major_threshold: i32,
    #[serde(default)]
    pub severe_threshold: i32,
    #[serde(default)]
    pub attack_rolls: i32,
    #[serde(default)]
    pub spellcast_rolls: i32,
    #[serde(default)]
    pub traits: TraitBonuses,
}

/// A single equipment item as the app layer supplies it
///
/// Armor, weapons and accessory gear all share this shape; which optional
/// fields are present decides how the item is normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub features: Vec<ItemFeature>,
    /// Explicit numeric overrides; suppresses feature-text parsing
    #[serde(default)]
    pub stat_modifiers: Option<ExplicitModifiers>,
    /// Armor base field, already applied once in the armor term of the engine
    #[serde(default)]
    pub evasion_modifier: Option<i32>,
    /// Armor base field, already applied once in the armor term of the engine
    #[serde(default)]
    pub agility_modifier: Option<i32>,
    /// Weapon handedness; a Two-Handed primary occupies the secondary slot
    #[serde(default)]
    pub burden: Option<Burden>,
}

impl EquipmentItem {
    /// Check whether this item carries armor-specific base fields
    pub fn is_legacy_armor(&self) -> bool {
        self.evasion_modifier.is_some() || self.agility_modifier.is_some()
    }

    /// Check whether this item is a Two-Handed weapon
    pub fn is_two_handed(&self) -> bool {
        matches!(self.burden, Some(Burden::TwoHanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_item_deserializes() {
        let item: EquipmentItem = serde_json::from_str(
            r#"{"name": "Longsword", "burden": "One-Handed"}"#,
        )
        .unwrap();
        assert_eq!(item.name, "Longsword");
        assert!(item.features.is_empty());
        assert!(item.stat_modifiers.is_none());
        assert!(!item.is_legacy_armor());
        assert!(!item.is_two_handed());
    }

    #[test]
    fn test_legacy_armor_detection() {
        let armor = EquipmentItem {
            name: "Gambeson Armor".to_string(),
            evasion_modifier: Some(1),
            ..Default::default()
        };
        assert!(armor.is_legacy_armor());

        let negative_only = EquipmentItem {
            agility_modifier: Some(-1),
            ..Default::default()
        };
        assert!(negative_only.is_legacy_armor());
    }

    #[test]
    fn test_explicit_modifiers_partial_json() {
        let mods: ExplicitModifiers =
            serde_json::from_str(r#"{"evasion": 3, "traits": {"agility": 1}}"#).unwrap();
        assert_eq!(mods.evasion, 3);
        assert_eq!(mods.proficiency, 0);
        assert_eq!(mods.traits.agility, 1);
        assert_eq!(mods.traits.knowledge, 0);
    }

    #[test]
    fn test_two_handed_burden() {
        let item: EquipmentItem =
            serde_json::from_str(r#"{"name": "Greatsword", "burden": "Two-Handed"}"#).unwrap();
        assert!(item.is_two_handed());
    }
}
