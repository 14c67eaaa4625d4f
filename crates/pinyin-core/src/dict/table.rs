use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;
use tracing::warn;

use super::{DictError, Tier};
use crate::settings::DataPolicy;
use crate::unicode::{fold_tone_marks, is_hanzi_word, is_romanization_key};

type TierMap = HashMap<String, Vec<String>>;

#[derive(Deserialize)]
struct RawTable {
    syllables: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    words: BTreeMap<String, Vec<String>>,
}

pub(super) fn parse_table(toml_str: &str, policy: DataPolicy) -> Result<(TierMap, TierMap), DictError> {
    let raw: RawTable = toml::from_str(toml_str).map_err(|e| DictError::Parse(e.to_string()))?;

    if raw.syllables.is_empty() {
        return Err(DictError::Empty);
    }

    let syllables = build_tier(Tier::Syllable, raw.syllables, policy)?;
    let words = build_tier(Tier::Word, raw.words, policy)?;

    for key in words.keys() {
        if syllables.contains_key(key) {
            warn!(%key, "word key is shadowed by a syllable key and can never match");
        }
    }

    Ok((syllables, words))
}

fn build_tier(
    tier: Tier,
    raw: BTreeMap<String, Vec<String>>,
    policy: DataPolicy,
) -> Result<TierMap, DictError> {
    let mut map = TierMap::with_capacity(raw.len());
    // BTreeMap order puts plain ASCII keys ahead of keys carrying diacritics,
    // so a folded key never displaces a key that was typed correctly.
    for (key, candidates) in raw {
        if candidates.is_empty() {
            return Err(DictError::EmptyCandidates { tier, key });
        }
        let entry = match policy {
            DataPolicy::Preserve => Some((key, candidates)),
            DataPolicy::Sanitize => sanitize_entry(tier, key, candidates),
        };
        let Some((key, candidates)) = entry else {
            continue;
        };
        if map.contains_key(&key) {
            warn!(%tier, %key, "folded key collides with an existing key; keeping the first");
            continue;
        }
        map.insert(key, candidates);
    }
    Ok(map)
}

fn sanitize_entry(tier: Tier, key: String, candidates: Vec<String>) -> Option<(String, Vec<String>)> {
    let key = if is_romanization_key(&key) {
        key
    } else {
        let folded = fold_tone_marks(&key).to_ascii_lowercase();
        if !is_romanization_key(&folded) {
            warn!(%tier, %key, "dropping key that cannot be typed");
            return None;
        }
        warn!(%tier, from = %key, to = %folded, "folded tone marks out of key");
        folded
    };

    let mut seen = HashSet::with_capacity(candidates.len());
    let mut kept = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !is_hanzi_word(&candidate) {
            warn!(%tier, %key, token = %candidate, "stripped non-ideograph candidate");
            continue;
        }
        if !seen.insert(candidate.clone()) {
            warn!(%tier, %key, token = %candidate, "dropped repeated candidate");
            continue;
        }
        kept.push(candidate);
    }

    if kept.is_empty() {
        warn!(%tier, %key, "no well-formed candidates left; dropping key");
        return None;
    }
    Some((key, kept))
}
