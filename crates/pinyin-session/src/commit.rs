use tracing::debug;

use super::types::Action;
use super::KeyRouter;

impl KeyRouter {
    pub(super) fn commit_buffer(&mut self) -> Action {
        let text = self.controller.buffer().to_string();
        debug!(%text, "commit raw buffer");
        self.reset_state();
        Action::Commit(text)
    }

    /// Commit a candidate chosen from the panel.
    pub fn select_candidate(&mut self, text: &str) -> Action {
        debug!(%text, query = self.controller.buffer(), "commit candidate");
        self.reset_state();
        Action::Commit(text.to_string())
    }

    /// Commit the candidate at `index` of the current session
    /// (0 is the raw romanization).
    pub fn select_candidate_at(&mut self, index: usize) -> Action {
        let Some(text) = self
            .session
            .as_ref()
            .and_then(|s| s.get(index))
            .map(str::to_owned)
        else {
            return Action::NoOp;
        };
        self.select_candidate(&text)
    }

    /// Drop the pending buffer without committing anything.
    pub fn cancel(&mut self) -> Action {
        if self.controller.buffer().is_empty() {
            return Action::NoOp;
        }
        debug!(buffer = self.controller.buffer(), "cancel");
        self.reset_state();
        Action::BufferUpdated(None)
    }

    pub(super) fn reset_state(&mut self) {
        self.controller.reset_buffer();
        self.session = None;
    }
}
