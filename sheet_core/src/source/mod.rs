//! Modifier provenance - one canonical record per equipment item

mod normalize;

pub use normalize::{normalize_item, NormalizedModifiers};

use serde::{Deserialize, Serialize};

/// Where an item's normalized modifiers came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModifierSource {
    /// Armor base fields; the record stays empty because the engine applies
    /// those fields once in its armor term
    LegacyArmor,
    /// Structured `stat_modifiers` block on user-authored items
    Explicit,
    /// Modifiers recovered from feature text
    Parsed,
    /// Missing item, or feature text with nothing to extract
    #[default]
    None,
}
