//! Sentence-shape matchers for numeric modifiers in feature text
//!
//! Feature descriptions use a constrained natural-language style
//! ("+1 to Evasion", "You gain a +1 bonus to your Agility."). Each shape is
//! an independent matcher; `extract_modifiers` runs them in a fixed
//! precedence order and deduplicates by stat.

use crate::types::{CharacterTrait, ModifiableStat, StatModifier};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Alternation of display names, longest first so multi-word names win
fn name_alternation<F>(filter: F) -> String
where
    F: Fn(ModifiableStat) -> bool,
{
    let mut names: Vec<&str> = ModifiableStat::name_table()
        .iter()
        .filter(|(_, stat)| filter(*stat))
        .map(|(name, _)| *name)
        .collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

fn is_terse_target(stat: ModifiableStat) -> bool {
    matches!(
        stat,
        ModifiableStat::Evasion | ModifiableStat::Proficiency | ModifiableStat::Trait(_)
    )
}

/// "<±N> to all character traits[ and Evasion]"
static ALL_TRAITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([+-]?\d+)\s+to\s+all\s+character\s+traits(\s+and\s+Evasion)?")
        .expect("all-traits pattern is invalid")
});

/// "<±N> to <Stat Name>"
static STAT_CLAUSE_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = name_alternation(|_| true);
    Regex::new(&format!(r"(?i)([+-]?\d+)\s+to\s+({alternation})\b"))
        .expect("stat-clause pattern is invalid")
});

/// "gain a <±N> bonus to your <Trait or Evasion/Proficiency>"
static GAIN_BONUS_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = name_alternation(is_terse_target);
    Regex::new(&format!(
        r"(?i)gain\s+a\s+([+-]?\d+)\s+bonus\s+to\s+your\s+({alternation})\b"
    ))
    .expect("gain-bonus pattern is invalid")
});

/// "<±N> <Stat>" with no connective; the sign must be explicit
static TERSE_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = name_alternation(is_terse_target);
    Regex::new(&format!(r"(?i)([+-]\d+)\s+({alternation})\b"))
        .expect("terse pattern is invalid")
});

/// Normalize the typographic minus (U+2212) to ASCII before matching
fn normalize_signs(text: &str) -> String {
    text.replace('\u{2212}', "-")
}

/// Guarded numeric parse; a failed capture contributes a zero value
fn parse_value(token: &str) -> i32 {
    token.parse().unwrap_or(0)
}

fn match_all_traits(text: &str) -> Vec<StatModifier> {
    let mut out = Vec::new();
    for caps in ALL_TRAITS_RE.captures_iter(text) {
        let value = parse_value(&caps[1]);
        for t in CharacterTrait::all() {
            out.push(StatModifier {
                stat: ModifiableStat::Trait(*t),
                value,
                applies_to_all_traits: true,
            });
        }
        if caps.get(2).is_some() {
            out.push(StatModifier::new(ModifiableStat::Evasion, value));
        }
    }
    out
}

fn match_stat_clause(text: &str) -> Vec<StatModifier> {
    STAT_CLAUSE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let stat = ModifiableStat::from_name(&caps[2])?;
            Some(StatModifier::new(stat, parse_value(&caps[1])))
        })
        .collect()
}

fn match_gain_bonus(text: &str) -> Vec<StatModifier> {
    GAIN_BONUS_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let stat = ModifiableStat::from_name(&caps[2])?;
            Some(StatModifier::new(stat, parse_value(&caps[1])))
        })
        .collect()
}

fn match_terse(text: &str) -> Vec<StatModifier> {
    TERSE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let stat = ModifiableStat::from_name(&caps[2])?;
            Some(StatModifier::new(stat, parse_value(&caps[1])))
        })
        .collect()
}

/// Keep the first modifier discovered for each stat, drop the rest
fn dedup_by_stat(modifiers: Vec<StatModifier>) -> Vec<StatModifier> {
    let mut seen: Vec<ModifiableStat> = Vec::new();
    let mut out = Vec::new();
    for modifier in modifiers {
        if !seen.contains(&modifier.stat) {
            seen.push(modifier.stat);
            out.push(modifier);
        }
    }
    out
}

/// Extract every recognized modifier from one description
///
/// The all-traits shape is checked first; when it matches, the remaining
/// shapes are skipped so the same clause is not re-read as per-trait text
/// and as a standalone number. Within one description the first modifier
/// found for a stat wins; later mentions of the same stat are dropped
/// rather than summed. Unrecognized phrasing yields an empty list.
pub fn extract_modifiers(description: &str) -> Vec<StatModifier> {
    let text = normalize_signs(description);

    let mut found = match_all_traits(&text);
    if found.is_empty() {
        found.extend(match_stat_clause(&text));
        found.extend(match_gain_bonus(&text));
        found.extend(match_terse(&text));
    }

    let deduped = dedup_by_stat(found);
    if !deduped.is_empty() {
        trace!(count = deduped.len(), "extracted stat modifiers");
    }
    deduped
}
