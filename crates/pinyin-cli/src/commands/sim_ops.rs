use serde::Serialize;
use tracing::debug;

use pinyin_keyboard::{EventLog, KeyboardEvent, Language, ModeIndicator, VirtualKeyboard};

use super::CliError;
use crate::script::{parse_script, Step};

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    PassThrough { key_code: u32, text: String },
    Commit { text: String },
    Candidates { candidates: Vec<String> },
    Mode { language: String, shape: String, caps_lock: bool },
}

impl From<KeyboardEvent> for EventRecord {
    fn from(event: KeyboardEvent) -> Self {
        match event {
            KeyboardEvent::PassThrough { key_code, text } => Self::PassThrough { key_code, text },
            KeyboardEvent::Commit(text) => Self::Commit { text },
            KeyboardEvent::Candidates(candidates) => Self::Candidates { candidates },
            KeyboardEvent::Mode(ModeIndicator {
                language,
                keyboard_shape,
                caps_lock,
            }) => Self::Mode {
                language: format!("{language:?}"),
                shape: format!("{keyboard_shape:?}"),
                caps_lock,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimReport {
    pub events: Vec<EventRecord>,
    /// What the focused target would contain afterwards.
    pub text: String,
    /// Romanization still pending when the script ended.
    pub buffer: String,
}

pub fn simulate_script(script: &str, chinese: bool) -> Result<SimReport, CliError> {
    let steps = parse_script(script)?;
    debug!(steps = steps.len(), chinese, "simulate");
    let mut kb = VirtualKeyboard::new(EventLog::new());
    if chinese {
        kb.set_language(Language::Chinese);
        kb.listener_mut().take();
    }

    for step in steps {
        match step {
            Step::Tap { key_code, label } => kb.tap(key_code, &label),
            Step::Cancel => kb.cancel(),
            Step::Select(index) => kb.select_candidate_at(index),
        }
    }

    let buffer = kb.router().buffer().to_string();
    let log = kb.into_listener();
    let text = log.target_text();
    Ok(SimReport {
        events: log.events.into_iter().map(EventRecord::from).collect(),
        text,
        buffer,
    })
}

pub fn simulate(script: &str, chinese: bool, json: bool) {
    let report = die!(simulate_script(script, chinese), "Error: {}");
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }
    for event in &report.events {
        match event {
            EventRecord::PassThrough { key_code, text } => {
                println!("pass   0x{key_code:08x} {text:?}")
            }
            EventRecord::Commit { text } => println!("commit {text:?}"),
            EventRecord::Candidates { candidates } if candidates.is_empty() => {
                println!("panel  (hidden)")
            }
            EventRecord::Candidates { candidates } => {
                println!("panel  {}", candidates.join(" "))
            }
            EventRecord::Mode {
                language,
                shape,
                caps_lock,
            } => println!("mode   {language} {shape} caps={caps_lock}"),
        }
    }
    println!("text:   {:?}", report.text);
    if !report.buffer.is_empty() {
        println!("buffer: {:?}", report.buffer);
    }
}
