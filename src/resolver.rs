//! Resolver
//!
//! Maps free-text names onto lookup table targets. Unknown names are an
//! ordinary outcome, not an error.

use crate::tables::{normalize, LookupTable, LANGUAGES};
use strsim::normalized_levenshtein;

/// Minimum similarity for a "did you mean" hint
const SUGGESTION_CUTOFF: f64 = 0.7;

/// Result of looking a name up in a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a str),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn target(self) -> Option<&'a str> {
        match self {
            Resolution::Found(target) => Some(target),
            Resolution::NotFound => None,
        }
    }
}

/// Resolve a raw name by exact match after trim + lowercase
pub fn resolve<'a>(table: &'a LookupTable, raw_name: &str) -> Resolution<'a> {
    match table.get(&normalize(raw_name)) {
        Some(target) => Resolution::Found(target),
        None => Resolution::NotFound,
    }
}

/// Closest table key to an unresolved name, if any is close enough
pub fn suggest<'a>(table: &'a LookupTable, raw_name: &str) -> Option<&'a str> {
    let needle = normalize(raw_name);
    if needle.is_empty() {
        return None;
    }

    table
        .keys()
        .map(|key| (key, normalized_levenshtein(&needle, key)))
        .filter(|(_, score)| *score >= SUGGESTION_CUTOFF)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key)
}

/// Accept a language name ("Spanish") or pass a code ("es") through as typed
pub fn resolve_language(code_or_name: &str) -> String {
    match resolve(&LANGUAGES, code_or_name) {
        Resolution::Found(code) => code.to_string(),
        Resolution::NotFound => code_or_name.trim().to_string(),
    }
}
