//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Burden, CharacterTrait, ModifiableStat, StatModifier, TraitBonuses};

// Equipment inputs
pub use crate::equipment::{EquipmentItem, ExplicitModifiers, ItemFeature};

// Parsing
pub use crate::parser::{extract_modifiers, has_stat_modifiers, parse_feature, ParsedFeatureEffect};

// Normalization and aggregation
pub use crate::source::{normalize_item, ModifierSource, NormalizedModifiers};
pub use crate::stat_block::{aggregate, aggregate_loadout, EquipmentBonuses, Loadout};

// Derivation
pub use crate::stat_block::{
    derive_stats, ArmorStats, ClassStats, DamageThresholds, DerivedStats, Progression, StatsInput,
    TraitScore, TraitState,
};

// Config
pub use crate::config::{default_constants, tier_for_level, EngineConstants};
