//! Tap routing and input-mode state for a pinyin soft keyboard.
//!
//! `KeyRouter` owns one keyboard's mode flags and romanization buffer and
//! turns each tap into an [`Action`] for the presentation layer to carry out.

mod candidate_gen;
mod commit;
mod controller;
mod display;
mod key_handlers;
mod modes;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use pinyin_core::settings::settings;
use pinyin_core::CandidateDictionary;

pub use controller::InputModeController;
pub use display::{DisplayState, LetterCase};
pub use types::{Action, CandidateSession, KeyboardShape, Language, ModeIndicator};

/// Per-keyboard input engine. Several routers may share one dictionary.
pub struct KeyRouter {
    dict: Arc<CandidateDictionary>,
    controller: InputModeController,
    session: Option<CandidateSession>,
    max_candidates: usize,
}

impl KeyRouter {
    pub fn new(dict: Arc<CandidateDictionary>) -> Self {
        Self {
            dict,
            controller: InputModeController::new(),
            session: None,
            max_candidates: settings().candidates.max_results,
        }
    }

    /// Cap on dictionary matches listed after the raw query.
    pub fn set_max_candidates(&mut self, max: usize) {
        self.max_candidates = max;
    }

    pub fn controller(&self) -> &InputModeController {
        &self.controller
    }

    pub fn mode(&self) -> ModeIndicator {
        self.controller.mode()
    }

    pub fn buffer(&self) -> &str {
        self.controller.buffer()
    }

    pub fn is_composing(&self) -> bool {
        !self.controller.buffer().is_empty()
    }

    /// Current candidates; `None` while the buffer is empty.
    pub fn session(&self) -> Option<&CandidateSession> {
        self.session.as_ref()
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::resolve(&self.controller)
    }

    pub fn dictionary(&self) -> &Arc<CandidateDictionary> {
        &self.dict
    }
}
