use pinyin_core::settings::{self, DataPolicy, Settings};
use pinyin_core::unicode::display_width;
use pinyin_core::{dict, CandidateDictionary, Tier};

use super::{read_file, CliError};

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn load_settings(file: &str) -> Result<Settings, CliError> {
    let content = read_file(file)?;
    Ok(settings::parse_settings_toml(&content)?)
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: candidates.max_results={}, dictionary.policy={:?}",
        s.candidates.max_results, s.dictionary.policy
    );
}

pub fn dict_export() {
    print!("{}", dict::default_toml());
}

/// Outcome of checking a dictionary source under both data policies.
#[derive(Debug)]
pub struct DictCheck {
    pub preserved: usize,
    pub sanitized: usize,
}

pub fn check_dict(file: &str) -> Result<DictCheck, CliError> {
    let content = read_file(file)?;
    let preserved = CandidateDictionary::from_toml(&content, DataPolicy::Preserve)?;
    let sanitized = CandidateDictionary::from_toml(&content, DataPolicy::Sanitize)?;
    Ok(DictCheck {
        preserved: preserved.len(),
        sanitized: sanitized.len(),
    })
}

pub fn dict_validate(file: &str) {
    let check = die!(check_dict(file), "Error: {}");
    println!("OK: {} keys", check.preserved);
    if check.sanitized != check.preserved {
        println!(
            "note: sanitize policy keeps {} of {} keys",
            check.sanitized, check.preserved
        );
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DictStats {
    pub syllables: usize,
    pub words: usize,
    pub candidates: usize,
    pub longest_list: usize,
    pub widest_candidate: usize,
}

pub fn stats(dict: &CandidateDictionary) -> DictStats {
    let mut s = DictStats::default();
    for (tier, _, candidates) in dict.iter() {
        match tier {
            Tier::Syllable => s.syllables += 1,
            Tier::Word => s.words += 1,
        }
        s.candidates += candidates.len();
        s.longest_list = s.longest_list.max(candidates.len());
        for c in candidates {
            s.widest_candidate = s.widest_candidate.max(display_width(c));
        }
    }
    s
}

pub fn dict_stats() {
    let s = stats(&CandidateDictionary::global());
    println!("syllable keys:     {}", s.syllables);
    println!("word keys:         {}", s.words);
    println!("candidates:        {}", s.candidates);
    println!("longest list:      {}", s.longest_list);
    println!("widest candidate:  {} cols", s.widest_candidate);
}
