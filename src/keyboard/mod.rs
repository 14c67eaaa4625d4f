//! Listener-based facade over [`KeyRouter`].

mod events;

use std::sync::Arc;

use pinyin_core::{key, CandidateDictionary};
use pinyin_session::{Action, DisplayState, KeyRouter, KeyboardShape, Language, ModeIndicator};
use tracing::trace;

pub use events::{EventLog, KeyboardEvent};

/// Receiver for everything the keyboard asks the presentation layer to do.
pub trait KeyboardListener {
    /// Forward a key to the focused target.
    fn on_pass_through(&mut self, key_code: u32, text: &str);

    /// Replace the candidate panel contents. Empty means hide.
    fn on_candidates_changed(&mut self, candidates: &[String]);

    fn on_mode_indicator_changed(&mut self, mode: ModeIndicator);

    /// Deliver committed text. Defaults to one key event per character.
    fn on_commit(&mut self, text: &str) {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.on_pass_through(key::NONE, ch.encode_utf8(&mut buf));
        }
    }
}

/// One on-screen keyboard: a router plus the listener it reports to.
pub struct VirtualKeyboard<L: KeyboardListener> {
    router: KeyRouter,
    listener: L,
}

impl<L: KeyboardListener> VirtualKeyboard<L> {
    /// Keyboard backed by the shared embedded dictionary.
    pub fn new(listener: L) -> Self {
        Self::with_dictionary(CandidateDictionary::global(), listener)
    }

    pub fn with_dictionary(dict: Arc<CandidateDictionary>, listener: L) -> Self {
        Self {
            router: KeyRouter::new(dict),
            listener,
        }
    }

    pub fn tap(&mut self, key_code: u32, label: &str) {
        self.run(|r| r.handle_tap(key_code, label));
    }

    pub fn select_candidate(&mut self, text: &str) {
        self.run(|r| r.select_candidate(text));
    }

    pub fn select_candidate_at(&mut self, index: usize) {
        self.run(|r| r.select_candidate_at(index));
    }

    pub fn cancel(&mut self) {
        self.run(KeyRouter::cancel);
    }

    pub fn set_language(&mut self, language: Language) {
        self.run(|r| r.set_language(language));
    }

    pub fn toggle_language(&mut self) {
        self.run(KeyRouter::toggle_language);
    }

    pub fn set_keyboard_shape(&mut self, shape: KeyboardShape) {
        self.run(|r| r.set_keyboard_shape(shape));
    }

    pub fn toggle_keyboard_shape(&mut self) {
        self.run(KeyRouter::toggle_keyboard_shape);
    }

    pub fn toggle_caps_lock(&mut self) {
        self.run(KeyRouter::toggle_caps_lock);
    }

    pub fn router(&self) -> &KeyRouter {
        &self.router
    }

    pub fn display(&self) -> DisplayState {
        self.router.display()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    fn run(&mut self, f: impl FnOnce(&mut KeyRouter) -> Action) {
        let mode_before = self.router.mode();
        let panel_shown = self.router.session().is_some();

        let action = f(&mut self.router);
        self.dispatch(action, panel_shown);

        let mode_after = self.router.mode();
        if mode_after != mode_before {
            self.listener.on_mode_indicator_changed(mode_after);
        }
    }

    fn dispatch(&mut self, action: Action, panel_shown: bool) {
        trace!(?action, "dispatch");
        match action {
            Action::PassThrough { key_code, text } => {
                self.listener.on_pass_through(key_code, &text);
            }
            Action::BufferUpdated(Some(session)) => {
                self.listener.on_candidates_changed(session.candidates());
            }
            Action::BufferUpdated(None) => self.listener.on_candidates_changed(&[]),
            Action::Commit(text) => {
                self.listener.on_commit(&text);
                if panel_shown {
                    self.listener.on_candidates_changed(&[]);
                }
            }
            Action::NoOp => {}
        }
    }
}
