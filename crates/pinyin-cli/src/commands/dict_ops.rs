use serde::Serialize;

use pinyin_core::unicode::display_width;
use pinyin_core::CandidateDictionary;

#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub key: String,
    pub tier: Option<&'static str>,
    pub candidates: Vec<String>,
}

pub fn lookup_report(dict: &CandidateDictionary, key: &str) -> LookupReport {
    let (tier, candidates) = match dict.lookup_tier(key) {
        Some((tier, c)) => (Some(tier.as_str()), c.to_vec()),
        None => (None, Vec::new()),
    };
    LookupReport {
        key: key.to_string(),
        tier,
        candidates,
    }
}

pub fn lookup(key: &str, json: bool) {
    let report = lookup_report(&CandidateDictionary::global(), key);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }
    let Some(tier) = report.tier else {
        println!("{key}: no match");
        return;
    };
    println!("{key} ({tier}, {} candidates)", report.candidates.len());
    for (i, c) in report.candidates.iter().enumerate() {
        println!("  #{:<2} {c}  [{} cols]", i + 1, display_width(c));
    }
}
