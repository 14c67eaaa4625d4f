use tracing::debug_span;

use pinyin_core::key;
use pinyin_core::unicode::single_letter;

use super::types::{Action, Language};
use super::KeyRouter;

impl KeyRouter {
    /// Route one tap. Total over its input: unknown key codes pass through.
    pub fn handle_tap(&mut self, key_code: u32, label: &str) -> Action {
        let _span = debug_span!("handle_tap", key_code, label).entered();

        // Letters in Chinese mode are the only input that grows the buffer.
        if self.controller.language() == Language::Chinese {
            if let Some(letter) = single_letter(label) {
                self.controller.append_to_buffer(letter);
                self.update_session();
                return self.buffer_updated();
            }
        }

        match key_code {
            // The button label ("Space") is never forwarded as text.
            key::SPACE => Action::pass_through(key::SPACE, " "),
            key::BACKSPACE => self.handle_backspace(),
            code if key::is_return(code) => self.handle_return(),
            key::MODE_SWITCH => self.toggle_language(),
            key::CAPS_LOCK => self.toggle_caps_lock(),
            key::TAB => self.toggle_keyboard_shape(),
            _ => Action::pass_through(key_code, label),
        }
    }

    fn handle_backspace(&mut self) -> Action {
        if !self.controller.remove_last_from_buffer() {
            return Action::pass_through(key::BACKSPACE, "");
        }
        self.update_session();
        self.buffer_updated()
    }

    fn handle_return(&mut self) -> Action {
        if self.controller.buffer().is_empty() {
            return Action::pass_through(key::RETURN, "\n");
        }
        // Enter commits the romanization itself, never a candidate.
        self.commit_buffer()
    }
}
