//! Engine constants configuration

use serde::{Deserialize, Serialize};

/// Proficiency base when the caller supplies no override
pub const DEFAULT_PROFICIENCY_BASE: i32 = 2;

/// Highest level in each tier band, lowest tier first
const DEFAULT_TIER_CAPS: [u32; 4] = [1, 4, 7, 10];

/// Tunable engine constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConstants {
    pub proficiency: ProficiencyConstants,
    pub tiers: TierConstants,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            proficiency: ProficiencyConstants::default(),
            tiers: TierConstants::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProficiencyConstants {
    /// Starting proficiency before equipment modifiers
    #[serde(default = "default_proficiency_base")]
    pub base: i32,
}

impl Default for ProficiencyConstants {
    fn default() -> Self {
        ProficiencyConstants {
            base: DEFAULT_PROFICIENCY_BASE,
        }
    }
}

fn default_proficiency_base() -> i32 {
    DEFAULT_PROFICIENCY_BASE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConstants {
    /// Highest level in each tier band, lowest tier first
    #[serde(default = "default_tier_caps")]
    pub level_caps: Vec<u32>,
}

impl Default for TierConstants {
    fn default() -> Self {
        TierConstants {
            level_caps: DEFAULT_TIER_CAPS.to_vec(),
        }
    }
}

fn default_tier_caps() -> Vec<u32> {
    DEFAULT_TIER_CAPS.to_vec()
}

impl TierConstants {
    /// Derive the tier band for a character level
    ///
    /// Levels past the last cap stay in the highest band.
    pub fn tier_for_level(&self, level: u32) -> u8 {
        match self.level_caps.iter().position(|cap| level <= *cap) {
            Some(band) => (band + 1) as u8,
            None => self.level_caps.len().max(1) as u8,
        }
    }
}

/// Derive the tier band for a level using the default bands
pub fn tier_for_level(level: u32) -> u8 {
    match DEFAULT_TIER_CAPS.iter().position(|cap| level <= *cap) {
        Some(band) => (band + 1) as u8,
        None => DEFAULT_TIER_CAPS.len() as u8,
    }
}

/// Engine constants from the bundled config, falling back to built-ins
pub fn default_constants() -> EngineConstants {
    let toml = include_str!("../../config/engine.toml");
    super::parse_toml(toml).unwrap_or_default()
}
