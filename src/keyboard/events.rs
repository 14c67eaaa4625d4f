use pinyin_session::ModeIndicator;

use super::KeyboardListener;

/// A recorded listener call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardEvent {
    PassThrough { key_code: u32, text: String },
    Commit(String),
    Candidates(Vec<String>),
    Mode(ModeIndicator),
}

/// Listener that records every call, in order.
///
/// Commits are recorded whole rather than split into per-character key
/// events. Used by tooling and tests.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<KeyboardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<KeyboardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Concatenation of everything sent to the target, applying backspaces.
    pub fn target_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                KeyboardEvent::PassThrough { key_code, .. }
                    if *key_code == pinyin_core::key::BACKSPACE =>
                {
                    out.pop();
                }
                KeyboardEvent::PassThrough { text, .. } | KeyboardEvent::Commit(text) => {
                    out.push_str(text)
                }
                KeyboardEvent::Candidates(_) | KeyboardEvent::Mode(_) => {}
            }
        }
        out
    }
}

impl KeyboardListener for EventLog {
    fn on_pass_through(&mut self, key_code: u32, text: &str) {
        self.events.push(KeyboardEvent::PassThrough {
            key_code,
            text: text.to_string(),
        });
    }

    fn on_candidates_changed(&mut self, candidates: &[String]) {
        self.events
            .push(KeyboardEvent::Candidates(candidates.to_vec()));
    }

    fn on_mode_indicator_changed(&mut self, mode: ModeIndicator) {
        self.events.push(KeyboardEvent::Mode(mode));
    }

    fn on_commit(&mut self, text: &str) {
        self.events.push(KeyboardEvent::Commit(text.to_string()));
    }
}
