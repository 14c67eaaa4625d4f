//! Character-level classification for pinyin keys and Chinese candidates.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthStr;

/// CJK Unified Ideographs, Extension A and Extension B.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// A well-formed candidate is a non-empty run of ideographs.
pub fn is_hanzi_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hanzi)
}

/// A typeable romanization key: non-empty, lowercase ASCII letters only.
pub fn is_romanization_key(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Single ASCII letter label, either case (`^[a-zA-Z]$`).
pub fn single_letter(label: &str) -> Option<char> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Terminal column width; ideographs count as two columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Strip tone diacritics: "xièxiè" → "xiexie", "lǚ" → "lu".
///
/// Decomposes to NFD and drops combining marks. Characters without an ASCII
/// base are kept as-is, so the result is not guaranteed to be a valid key.
pub fn fold_tone_marks(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
