use tracing::debug;

use super::types::{Action, KeyboardShape, Language};
use super::KeyRouter;

impl KeyRouter {
    /// Returns `BufferUpdated(None)` when a switch to Latin abandons a
    /// pending buffer, `NoOp` otherwise.
    pub fn set_language(&mut self, language: Language) -> Action {
        let discarding = language == Language::Latin && !self.controller.buffer().is_empty();
        self.controller.set_language(language);
        debug!(?language, discarding, "set language");
        if discarding {
            self.session = None;
            Action::BufferUpdated(None)
        } else {
            Action::NoOp
        }
    }

    pub fn toggle_language(&mut self) -> Action {
        self.set_language(self.controller.language().toggled())
    }

    pub fn set_keyboard_shape(&mut self, shape: KeyboardShape) -> Action {
        self.controller.set_keyboard_shape(shape);
        debug!(?shape, "set keyboard shape");
        Action::NoOp
    }

    pub fn toggle_keyboard_shape(&mut self) -> Action {
        self.controller.toggle_keyboard_shape();
        debug!(shape = ?self.controller.keyboard_shape(), "toggle keyboard shape");
        Action::NoOp
    }

    pub fn toggle_caps_lock(&mut self) -> Action {
        self.controller.toggle_caps_lock();
        debug!(caps_lock = self.controller.caps_lock(), "toggle caps lock");
        Action::NoOp
    }
}
