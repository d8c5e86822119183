//! Feature-text parsing - pattern matching and per-feature effects

mod feature;
mod patterns;

pub use feature::{has_stat_modifiers, parse_feature, parse_features, ParsedFeatureEffect};
pub use patterns::extract_modifiers;
