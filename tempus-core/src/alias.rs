use std::str::FromStr;

use crate::error::OptionsError;
use crate::units::UnitName;

/// Surface spellings accepted for each unit. Every entry maps to exactly one unit.
pub const ALIASES: &[(&str, UnitName)] = &[
    ("seconds", UnitName::Seconds),
    ("second", UnitName::Seconds),
    ("secs", UnitName::Seconds),
    ("sec", UnitName::Seconds),
    ("s", UnitName::Seconds),
    ("minutes", UnitName::Minutes),
    ("minute", UnitName::Minutes),
    ("mins", UnitName::Minutes),
    ("min", UnitName::Minutes),
    ("m", UnitName::Minutes),
    ("hours", UnitName::Hours),
    ("hour", UnitName::Hours),
    ("hrs", UnitName::Hours),
    ("hr", UnitName::Hours),
    ("h", UnitName::Hours),
    ("days", UnitName::Days),
    ("day", UnitName::Days),
    ("dy", UnitName::Days),
    ("d", UnitName::Days),
    ("weeks", UnitName::Weeks),
    ("week", UnitName::Weeks),
    ("wks", UnitName::Weeks),
    ("wk", UnitName::Weeks),
    ("w", UnitName::Weeks),
    ("months", UnitName::Months),
    ("month", UnitName::Months),
    ("mos", UnitName::Months),
    ("mo", UnitName::Months),
    ("years", UnitName::Years),
    ("year", UnitName::Years),
    ("yrs", UnitName::Years),
    ("yr", UnitName::Years),
    ("y", UnitName::Years),
];

/// Connectives that may sit between components ("1 hour and 5 minutes").
pub const JOIN_WORDS: &[&str] = &["and", "with", "plus"];

fn strip_commas(word: &str) -> &str {
    let word = word.trim();
    let word = word.strip_prefix(',').unwrap_or(word);
    word.strip_suffix(',').unwrap_or(word)
}

/// Resolve a surface word (e.g. `"Hrs"`, `"min,"`) to its canonical unit.
pub fn resolve_alias(word: &str) -> Option<UnitName> {
    let normalized = strip_commas(word).to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, unit)| *unit)
}

pub fn is_join_word(word: &str) -> bool {
    let normalized = strip_commas(word).to_lowercase();
    JOIN_WORDS.contains(&normalized.as_str())
}

pub fn aliases_for(unit: UnitName) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|(_, target)| *target == unit)
        .map(|(alias, _)| *alias)
        .collect()
}

impl FromStr for UnitName {
    type Err = OptionsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        resolve_alias(raw).ok_or_else(|| OptionsError::UnknownUnit(raw.trim().to_owned()))
    }
}
