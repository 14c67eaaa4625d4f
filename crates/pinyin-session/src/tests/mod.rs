mod candidates;

use std::sync::Arc;

use pinyin_core::{key, CandidateDictionary};

use super::types::{Action, Language};
use super::KeyRouter;

fn entry(key: &str, candidates: &[&str]) -> (String, Vec<String>) {
    (
        key.to_string(),
        candidates.iter().map(|s| s.to_string()).collect(),
    )
}

/// Small dictionary: no "ni", a few syllables, and a word tier.
pub(super) fn make_test_dict() -> Arc<CandidateDictionary> {
    Arc::new(CandidateDictionary::from_entries(
        vec![
            entry("da", &["大", "打", "答", "达", "搭"]),
            entry("hao", &["好", "号", "浩"]),
            entry("a", &["啊", "阿"]),
            entry("d", &["的"]),
            entry("zhong", &["中", "种", "重"]),
            entry("guo", &["国", "过", "果"]),
        ],
        vec![
            entry("nihao", &["你好"]),
            entry("zhongguo", &["中国"]),
        ],
    ))
}

pub(super) fn chinese_router() -> KeyRouter {
    let mut router = KeyRouter::new(make_test_dict());
    router.set_language(Language::Chinese);
    router
}

/// Tap each character as its own key.
pub(super) fn type_string(router: &mut KeyRouter, s: &str) -> Vec<Action> {
    s.chars()
        .map(|ch| {
            let code = key::for_char(ch).unwrap_or(key::NONE);
            router.handle_tap(code, &ch.to_string())
        })
        .collect()
}

pub(super) fn candidates_of(action: &Action) -> Vec<&str> {
    match action {
        Action::BufferUpdated(Some(s)) => s.candidates().iter().map(String::as_str).collect(),
        other => panic!("expected BufferUpdated(Some), got {other:?}"),
    }
}
