//! Lookup Tables
//!
//! Static name → target mappings for websites, music platforms and languages.

use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashMap};

/// Read-only mapping from a normalized name to its canonical target.
///
/// Keys are always trimmed and lowercase; inserting two names that normalize
/// to the same key keeps the later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTable {
    entries: BTreeMap<String, String>,
}

impl LookupTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::default();
        for (name, target) in pairs {
            table.insert(name, target);
        }
        table
    }

    /// Copy of this table with extra entries layered on top
    pub fn with_overrides(&self, extra: &HashMap<String, String>) -> Self {
        let mut table = self.clone();
        for (name, target) in extra {
            table.insert(name, target);
        }
        table
    }

    fn insert(&mut self, name: &str, target: &str) {
        let key = normalize(name);
        if !key.is_empty() {
            self.entries.insert(key, target.trim().to_string());
        }
    }

    /// Exact lookup on an already-normalized key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim and lowercase, the only normalization lookups ever apply
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

lazy_static! {
    /// Common website names
    pub static ref WEBSITES: LookupTable = LookupTable::from_pairs(&[
        ("google", "https://www.google.com"),
        ("youtube", "https://www.youtube.com"),
        ("facebook", "https://www.facebook.com"),
        ("twitter", "https://www.twitter.com"),
        ("github", "https://www.github.com"),
        ("linkedin", "https://www.linkedin.com"),
        ("instagram", "https://www.instagram.com"),
        ("reddit", "https://www.reddit.com"),
    ]);

    /// Music platforms and their search URL prefixes
    pub static ref MUSIC_PLATFORMS: LookupTable = LookupTable::from_pairs(&[
        ("spotify", "https://open.spotify.com/search/"),
        ("youtube", "https://www.youtube.com/results?search_query="),
        ("apple music", "https://music.apple.com/search?term="),
    ]);

    /// Language names accepted in place of ISO-639-1 codes
    pub static ref LANGUAGES: LookupTable = LookupTable::from_pairs(&[
        ("arabic", "ar"),
        ("chinese", "zh-CN"),
        ("czech", "cs"),
        ("danish", "da"),
        ("dutch", "nl"),
        ("english", "en"),
        ("finnish", "fi"),
        ("french", "fr"),
        ("german", "de"),
        ("greek", "el"),
        ("hebrew", "iw"),
        ("hindi", "hi"),
        ("hungarian", "hu"),
        ("indonesian", "id"),
        ("italian", "it"),
        ("japanese", "ja"),
        ("korean", "ko"),
        ("norwegian", "no"),
        ("polish", "pl"),
        ("portuguese", "pt"),
        ("romanian", "ro"),
        ("russian", "ru"),
        ("spanish", "es"),
        ("swedish", "sv"),
        ("thai", "th"),
        ("turkish", "tr"),
        ("ukrainian", "uk"),
        ("vietnamese", "vi"),
    ]);
}
