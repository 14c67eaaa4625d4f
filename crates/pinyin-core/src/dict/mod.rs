//! Romanization → candidate dictionary.
//!
//! `CandidateDictionary` holds two independent lookup tiers: single syllables
//! and multi-syllable words. A lookup tries the syllable tier first and falls
//! back to the word tier. The table is built once and never mutated.

mod table;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::settings::{settings, DataPolicy};

pub const DEFAULT_DICT_TOML: &str = include_str!("default_dict.toml");

/// Returns the embedded dictionary TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_DICT_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("[syllables] table is empty")]
    Empty,

    #[error("empty candidate list for {tier} key {key:?}")]
    EmptyCandidates { tier: Tier, key: String },
}

/// Which table a key resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Syllable,
    Word,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syllable => "syllable",
            Self::Word => "word",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CandidateDictionary {
    syllables: HashMap<String, Vec<String>>,
    words: HashMap<String, Vec<String>>,
}

impl CandidateDictionary {
    /// Build from already-validated entries. A repeated key keeps the last
    /// list; empty lists are skipped.
    pub fn from_entries(
        syllables: Vec<(String, Vec<String>)>,
        words: Vec<(String, Vec<String>)>,
    ) -> Self {
        fn to_map(tier: Tier, entries: Vec<(String, Vec<String>)>) -> HashMap<String, Vec<String>> {
            let mut map = HashMap::with_capacity(entries.len());
            for (key, candidates) in entries {
                if candidates.is_empty() {
                    warn!(%tier, %key, "skipping key with no candidates");
                    continue;
                }
                map.insert(key, candidates);
            }
            map
        }
        Self {
            syllables: to_map(Tier::Syllable, syllables),
            words: to_map(Tier::Word, words),
        }
    }

    /// Parse a `[syllables]` / `[words]` TOML table, applying `policy` to
    /// malformed entries.
    pub fn from_toml(toml_str: &str, policy: DataPolicy) -> Result<Self, DictError> {
        let (syllables, words) = table::parse_table(toml_str, policy)?;
        Ok(Self { syllables, words })
    }

    /// Process-wide dictionary built from the embedded table with the
    /// configured data policy.
    pub fn global() -> Arc<Self> {
        static INSTANCE: OnceLock<Arc<CandidateDictionary>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                let policy = settings().dictionary.policy;
                let dict = Self::from_toml(DEFAULT_DICT_TOML, policy)
                    .expect("embedded dictionary TOML must be valid");
                Arc::new(dict)
            })
            .clone()
    }

    /// Dual-tier lookup. Absent keys yield an empty slice.
    pub fn lookup(&self, key: &str) -> &[String] {
        self.lookup_tier(key).map(|(_, c)| c).unwrap_or(&[])
    }

    /// Dual-tier lookup reporting which tier matched.
    pub fn lookup_tier(&self, key: &str) -> Option<(Tier, &[String])> {
        if let Some(c) = self.syllables.get(key) {
            return Some((Tier::Syllable, c.as_slice()));
        }
        self.words.get(key).map(|c| (Tier::Word, c.as_slice()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.syllables.contains_key(key) || self.words.contains_key(key)
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of keys across both tiers (word keys shadowed by a syllable
    /// key are counted once per tier).
    pub fn len(&self) -> usize {
        self.syllables.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, syllable tier first, keys sorted within each tier.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &str, &[String])> {
        let mut entries: Vec<(Tier, &str, &[String])> = self
            .syllables
            .iter()
            .map(|(k, v)| (Tier::Syllable, k.as_str(), v.as_slice()))
            .chain(
                self.words
                    .iter()
                    .map(|(k, v)| (Tier::Word, k.as_str(), v.as_slice())),
            )
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        entries.into_iter()
    }
}
