//! Per-feature parsing into structured effects

use crate::equipment::ItemFeature;
use crate::parser::extract_modifiers;
use crate::types::StatModifier;
use serde::{Deserialize, Serialize};

/// Structured effect extracted from one equipment feature
///
/// Produced fresh on every call and immutable afterwards; nothing is cached
/// between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFeatureEffect {
    pub feature_name: String,
    pub description: String,
    pub modifiers: Vec<StatModifier>,
}

/// Parse a single feature's description into a structured effect
pub fn parse_feature(feature: &ItemFeature) -> ParsedFeatureEffect {
    ParsedFeatureEffect {
        feature_name: feature.name.clone(),
        description: feature.description.clone(),
        modifiers: extract_modifiers(&feature.description),
    }
}

/// Parse every feature on an equipment item
pub fn parse_features(features: &[ItemFeature]) -> Vec<ParsedFeatureEffect> {
    features.iter().map(parse_feature).collect()
}

/// Check whether a feature's text carries any recognizable modifier
pub fn has_stat_modifiers(feature: &ItemFeature) -> bool {
    !extract_modifiers(&feature.description).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CharacterTrait, ModifiableStat};

    #[test]
    fn test_parse_feature_agility_bonus() {
        let feature = ItemFeature::new("Reliable", "You gain a +1 bonus to your Agility.");
        let effect = parse_feature(&feature);
        assert_eq!(effect.feature_name, "Reliable");
        assert_eq!(effect.modifiers.len(), 1);
        assert_eq!(
            effect.modifiers[0].stat,
            ModifiableStat::Trait(CharacterTrait::Agility)
        );
        assert_eq!(effect.modifiers[0].value, 1);
    }

    #[test]
    fn test_parse_feature_no_modifiers() {
        let feature = ItemFeature::new("Sharp", "This blade never dulls.");
        let effect = parse_feature(&feature);
        assert!(effect.modifiers.is_empty());
        assert!(!has_stat_modifiers(&feature));
    }

    #[test]
    fn test_parse_features_keeps_order() {
        let features = vec![
            ItemFeature::new("Heavy", "\u{2212}1 to Evasion"),
            ItemFeature::new("Sturdy", "+1 to Armor Score"),
        ];
        let effects = parse_features(&features);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].modifiers[0].stat, ModifiableStat::Evasion);
        assert_eq!(effects[1].modifiers[0].stat, ModifiableStat::ArmorScore);
    }

    #[test]
    fn test_has_stat_modifiers() {
        let feature = ItemFeature::new("Quick", "+1 Evasion");
        assert!(has_stat_modifiers(&feature));
    }
}
