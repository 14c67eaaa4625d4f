use pinyin_core::key;
use pinyin_core::settings::DataPolicy;

use super::*;

#[test]
fn test_da_session() {
    let mut router = chinese_router();
    let responses = type_string(&mut router, "da");
    assert_eq!(
        candidates_of(&responses[1]),
        vec!["da", "大", "打", "答", "达", "搭"]
    );
    let session = router.session().unwrap();
    assert_eq!(session.query(), "da");
    assert_eq!(session.matches(), ["大", "打", "答", "达", "搭"]);
}

#[test]
fn test_absent_key_offers_only_raw_buffer() {
    let mut router = chinese_router();
    let responses = type_string(&mut router, "ni");
    assert_eq!(candidates_of(&responses[1]), vec!["ni"]);
    assert!(router.session().unwrap().matches().is_empty());
}

#[test]
fn test_word_tier_uses_whole_buffer() {
    let mut router = chinese_router();
    let responses = type_string(&mut router, "nihao");
    // Intermediate buffers resolve on their own: "n", "ni", "nih", "niha" miss.
    for resp in &responses[..4] {
        assert_eq!(candidates_of(resp).len(), 1);
    }
    assert_eq!(candidates_of(&responses[4]), vec!["nihao", "你好"]);
}

#[test]
fn test_syllable_prefix_then_word() {
    let mut router = chinese_router();
    let responses = type_string(&mut router, "zhongguo");
    assert_eq!(candidates_of(&responses[4]), vec!["zhong", "中", "种", "重"]);
    assert_eq!(candidates_of(&responses[7]), vec!["zhongguo", "中国"]);
}

#[test]
fn test_backspace_recomputes_session() {
    let mut router = chinese_router();
    type_string(&mut router, "dax");
    assert_eq!(router.session().unwrap().len(), 1);
    let resp = router.handle_tap(key::BACKSPACE, "←");
    assert_eq!(candidates_of(&resp), vec!["da", "大", "打", "答", "达", "搭"]);
}

#[test]
fn test_commit_then_retype_is_deterministic() {
    let mut router = chinese_router();
    type_string(&mut router, "hao");
    let first = router.session().cloned().unwrap();

    assert_eq!(router.handle_tap(key::RETURN, "↵"), Action::Commit("hao".into()));
    assert!(router.session().is_none());

    type_string(&mut router, "hao");
    assert_eq!(router.session().cloned().unwrap(), first);
}

#[test]
fn test_max_candidates_caps_matches_not_query() {
    let mut router = chinese_router();
    router.set_max_candidates(2);
    let responses = type_string(&mut router, "da");
    assert_eq!(candidates_of(&responses[1]), vec!["da", "大", "打"]);
}

#[test]
fn test_display_widths() {
    let mut router = chinese_router();
    type_string(&mut router, "nihao");
    assert_eq!(router.session().unwrap().display_widths(), vec![5, 4]);
}

#[test]
fn test_sessions_share_dictionary() {
    let dict = make_test_dict();
    let mut a = KeyRouter::new(dict.clone());
    let mut b = KeyRouter::new(dict.clone());
    a.set_language(Language::Chinese);
    b.set_language(Language::Chinese);

    type_string(&mut a, "da");
    type_string(&mut b, "hao");
    assert_eq!(a.buffer(), "da");
    assert_eq!(b.buffer(), "hao");
    assert!(Arc::ptr_eq(a.dictionary(), b.dictionary()));
}

#[test]
fn test_embedded_dictionary_lookups() {
    let dict = Arc::new(
        CandidateDictionary::from_toml(pinyin_core::dict::DEFAULT_DICT_TOML, DataPolicy::Sanitize)
            .unwrap(),
    );
    let mut router = KeyRouter::new(dict);
    router.set_language(Language::Chinese);

    let responses = type_string(&mut router, "duo");
    assert_eq!(
        candidates_of(&responses[2]),
        vec!["duo", "多", "夺", "朵", "躲", "垛", "堕", "惰"]
    );
    router.cancel();

    let responses = type_string(&mut router, "xiexie");
    assert_eq!(candidates_of(&responses[5]), vec!["xiexie", "谢谢"]);
}
