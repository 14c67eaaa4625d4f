use super::types::{Action, CandidateSession};
use super::KeyRouter;

impl KeyRouter {
    /// Recompute the session from the whole buffer.
    pub(super) fn update_session(&mut self) {
        let buffer = self.controller.buffer();
        self.session = if buffer.is_empty() {
            None
        } else {
            let matches = self.dict.lookup(buffer);
            Some(CandidateSession::new(buffer, matches, self.max_candidates))
        };
    }

    pub(super) fn buffer_updated(&self) -> Action {
        Action::BufferUpdated(self.session.clone())
    }
}
