use super::controller::InputModeController;
use super::types::{KeyboardShape, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

impl LetterCase {
    /// Render a letter key cap in this case.
    pub fn apply(&self, label: &str) -> String {
        match self {
            Self::Lower => label.to_lowercase(),
            Self::Upper => label.to_uppercase(),
        }
    }
}

/// What the presentation layer should show.
///
/// The candidate panel sits above the key panel; the keys stay live while it
/// is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Letter panel and its casing; `None` while the number pad is shown.
    pub letter_panel: Option<LetterCase>,
    pub number_panel: bool,
    pub candidates_visible: bool,
}

impl DisplayState {
    pub fn resolve(controller: &InputModeController) -> Self {
        let candidates_visible =
            controller.language() == Language::Chinese && !controller.buffer().is_empty();

        let letter_panel = match controller.keyboard_shape() {
            KeyboardShape::NumberSymbol => None,
            KeyboardShape::UpperCase => Some(LetterCase::Upper),
            KeyboardShape::LowerCase if controller.caps_lock() => Some(LetterCase::Upper),
            KeyboardShape::LowerCase => Some(LetterCase::Lower),
        };

        Self {
            letter_panel,
            number_panel: letter_panel.is_none(),
            candidates_visible,
        }
    }
}
