//! Tap scripts: a whitespace-separated shorthand for key sequences.
//!
//! ```text
//! <lang> nihao #1 da <enter>
//! ```
//!
//! A bare word taps each of its characters. `<name>` taps a named key,
//! `<esc>` cancels the pending buffer and `#N` picks candidate `N`.

use pinyin_core::key;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key <{0}>")]
    UnknownKey(String),
    #[error("invalid candidate index '{0}'")]
    InvalidIndex(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Tap { key_code: u32, label: String },
    Cancel,
    Select(usize),
}

impl Step {
    fn tap(key_code: u32, label: &str) -> Self {
        Step::Tap {
            key_code,
            label: label.to_string(),
        }
    }
}

fn named_key(name: &str) -> Result<Step, ScriptError> {
    let step = match name {
        "space" => Step::tap(key::SPACE, "Space"),
        "bs" => Step::tap(key::BACKSPACE, "⌫"),
        "enter" => Step::tap(key::RETURN, "Enter"),
        "caps" => Step::tap(key::CAPS_LOCK, "Caps"),
        "123" => Step::tap(key::TAB, "123"),
        "lang" => Step::tap(key::MODE_SWITCH, "中/英"),
        "esc" => Step::Cancel,
        _ => return Err(ScriptError::UnknownKey(name.to_string())),
    };
    Ok(step)
}

pub fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for token in script.split_whitespace() {
        if let Some(name) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            steps.push(named_key(name)?);
        } else if let Some(index) = token.strip_prefix('#') {
            let index = index
                .parse()
                .map_err(|_| ScriptError::InvalidIndex(index.to_string()))?;
            steps.push(Step::Select(index));
        } else {
            steps.extend(token.chars().map(|ch| {
                let mut buf = [0u8; 4];
                Step::tap(key::for_char(ch).unwrap_or(key::NONE), ch.encode_utf8(&mut buf))
            }));
        }
    }
    Ok(steps)
}
