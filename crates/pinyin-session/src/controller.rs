use tracing::debug;

use super::types::{KeyboardShape, Language, ModeIndicator};

/// Mode flags and the romanization buffer for one keyboard.
///
/// The buffer only ever holds lowercase ASCII letters and is non-empty only
/// while the language is Chinese.
#[derive(Debug, Clone, Default)]
pub struct InputModeController {
    keyboard_shape: KeyboardShape,
    language: Language,
    caps_lock: bool,
    buffer: String,
}

impl InputModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyboard_shape(&self) -> KeyboardShape {
        self.keyboard_shape
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn mode(&self) -> ModeIndicator {
        ModeIndicator {
            language: self.language,
            keyboard_shape: self.keyboard_shape,
            caps_lock: self.caps_lock,
        }
    }

    /// Append a letter (lowercased). Returns false, leaving the buffer
    /// untouched, for non-letters or while in Latin mode.
    pub fn append_to_buffer(&mut self, ch: char) -> bool {
        if self.language != Language::Chinese || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.buffer.push(ch.to_ascii_lowercase());
        true
    }

    /// Pop the last letter. False means the buffer was already empty and the
    /// key should be handled as a raw key instead.
    pub fn remove_last_from_buffer(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn reset_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Switching to Latin abandons any pending buffer.
    pub fn set_language(&mut self, language: Language) {
        if language == Language::Latin && !self.buffer.is_empty() {
            debug!(buffer = %self.buffer, "discarding unconverted buffer");
            self.buffer.clear();
        }
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Does not touch the caps lock flag.
    pub fn set_keyboard_shape(&mut self, shape: KeyboardShape) {
        self.keyboard_shape = shape;
    }

    /// Number pad ↔ letters. Leaving the number pad always lands on
    /// LowerCase, whatever the shape was before the detour.
    pub fn toggle_keyboard_shape(&mut self) {
        self.keyboard_shape = match self.keyboard_shape {
            KeyboardShape::NumberSymbol => KeyboardShape::LowerCase,
            KeyboardShape::LowerCase | KeyboardShape::UpperCase => KeyboardShape::NumberSymbol,
        };
    }

    pub fn toggle_caps_lock(&mut self) {
        self.caps_lock = !self.caps_lock;
        self.keyboard_shape = if self.caps_lock {
            KeyboardShape::UpperCase
        } else {
            KeyboardShape::LowerCase
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chinese() -> InputModeController {
        let mut c = InputModeController::new();
        c.set_language(Language::Chinese);
        c
    }

    #[test]
    fn initial_state() {
        let c = InputModeController::new();
        assert_eq!(c.language(), Language::Latin);
        assert_eq!(c.keyboard_shape(), KeyboardShape::LowerCase);
        assert!(!c.caps_lock());
        assert!(c.buffer().is_empty());
    }

    #[test]
    fn append_lowercases_letters() {
        let mut c = chinese();
        assert!(c.append_to_buffer('N'));
        assert!(c.append_to_buffer('i'));
        assert_eq!(c.buffer(), "ni");
    }

    #[test]
    fn append_rejects_non_letters_and_latin_mode() {
        let mut c = chinese();
        assert!(!c.append_to_buffer('1'));
        assert!(!c.append_to_buffer(' '));
        assert!(!c.append_to_buffer('ü'));
        assert!(c.buffer().is_empty());

        let mut latin = InputModeController::new();
        assert!(!latin.append_to_buffer('a'));
        assert!(latin.buffer().is_empty());
    }

    #[test]
    fn remove_last_shrinks_by_one() {
        let mut c = chinese();
        for ch in "hao".chars() {
            c.append_to_buffer(ch);
        }
        assert!(c.remove_last_from_buffer());
        assert_eq!(c.buffer(), "ha");
        assert!(c.remove_last_from_buffer());
        assert!(c.remove_last_from_buffer());
        assert!(c.buffer().is_empty());
        assert!(!c.remove_last_from_buffer());
        assert!(c.buffer().is_empty());
    }

    #[test]
    fn switching_to_latin_discards_buffer() {
        let mut c = chinese();
        c.append_to_buffer('d');
        c.append_to_buffer('a');
        c.set_language(Language::Latin);
        assert!(c.buffer().is_empty());
        assert_eq!(c.language(), Language::Latin);
    }

    #[test]
    fn set_chinese_is_idempotent() {
        let mut c = chinese();
        c.append_to_buffer('d');
        c.set_language(Language::Chinese);
        c.set_language(Language::Chinese);
        assert_eq!(c.buffer(), "d");
        assert_eq!(c.language(), Language::Chinese);
    }

    #[test]
    fn toggle_language_round_trip() {
        let mut c = InputModeController::new();
        c.toggle_language();
        assert_eq!(c.language(), Language::Chinese);
        c.append_to_buffer('a');
        c.toggle_language();
        assert_eq!(c.language(), Language::Latin);
        assert!(c.buffer().is_empty());
    }

    #[test]
    fn caps_lock_drives_shape() {
        let mut c = InputModeController::new();
        c.toggle_caps_lock();
        assert!(c.caps_lock());
        assert_eq!(c.keyboard_shape(), KeyboardShape::UpperCase);
        c.toggle_caps_lock();
        assert!(!c.caps_lock());
        assert_eq!(c.keyboard_shape(), KeyboardShape::LowerCase);
    }

    #[test]
    fn caps_lock_twice_restores_shape() {
        let mut c = InputModeController::new();
        let before = c.keyboard_shape();
        c.toggle_caps_lock();
        c.toggle_caps_lock();
        assert_eq!(c.keyboard_shape(), before);
    }

    #[test]
    fn caps_lock_overrides_number_pad() {
        let mut c = InputModeController::new();
        c.toggle_keyboard_shape();
        assert_eq!(c.keyboard_shape(), KeyboardShape::NumberSymbol);
        c.toggle_caps_lock();
        assert_eq!(c.keyboard_shape(), KeyboardShape::UpperCase);
    }

    #[test]
    fn number_detour_forgets_uppercase_shape() {
        let mut c = InputModeController::new();
        c.toggle_caps_lock();
        c.toggle_keyboard_shape();
        assert_eq!(c.keyboard_shape(), KeyboardShape::NumberSymbol);
        assert!(c.caps_lock());
        c.toggle_keyboard_shape();
        assert_eq!(c.keyboard_shape(), KeyboardShape::LowerCase);
        // The flag survives; only the stored shape is reset.
        assert!(c.caps_lock());
    }

    #[test]
    fn shape_changes_leave_buffer_alone() {
        let mut c = chinese();
        c.append_to_buffer('a');
        c.toggle_keyboard_shape();
        c.toggle_caps_lock();
        c.set_keyboard_shape(KeyboardShape::UpperCase);
        assert_eq!(c.buffer(), "a");
    }

    #[test]
    fn mode_snapshot() {
        let mut c = chinese();
        c.toggle_caps_lock();
        assert_eq!(
            c.mode(),
            ModeIndicator {
                language: Language::Chinese,
                keyboard_shape: KeyboardShape::UpperCase,
                caps_lock: true,
            }
        );
    }
}
