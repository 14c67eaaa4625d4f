//! Soft-keyboard input engine with pinyin candidate lookup.
//!
//! `VirtualKeyboard` is the boundary with the presentation layer: taps and
//! candidate picks come in, and a [`KeyboardListener`] receives text to
//! forward, candidate lists to show, and mode changes.

pub mod keyboard;
mod trace_init;

pub use keyboard::{EventLog, KeyboardEvent, KeyboardListener, VirtualKeyboard};
pub use pinyin_core::dict::{CandidateDictionary, DictError, Tier};
pub use pinyin_core::{key, settings};
pub use pinyin_session::{
    Action, CandidateSession, DisplayState, InputModeController, KeyRouter, KeyboardShape,
    Language, LetterCase, ModeIndicator,
};
pub use trace_init::init_tracing;

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
