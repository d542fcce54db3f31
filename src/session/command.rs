//! Commands accepted by a quiz session.
//!
//! Every user interaction becomes one `Command` applied to a
//! `SessionState`. Commands serialize as JSON tagged by `type`.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::models::{OptionKey, QuestionSet};

use super::state::SessionState;

/// A single interaction with a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Replace the session with a fresh run over this set.
    Load { set: QuestionSet },

    /// Answer a question (0-based index).
    Select { index: usize, option: OptionKey },

    /// Move relative to the current question.
    Navigate { delta: isize },

    /// Jump to a question (0-based index).
    GoTo { index: usize },

    /// End the quiz early.
    Finish,

    /// Return from the results to the first unanswered question.
    ReviewUnanswered,

    /// Discard the set and all answers.
    Reset,
}

impl SessionState {
    /// Apply one command to the session.
    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        tracing::debug!(?command, phase = %self.phase(), "applying session command");

        let result = match command {
            Command::Load { set } => {
                self.load(set);
                Ok(())
            }
            Command::Select { index, option } => self.select(index, option).map(|_| ()),
            Command::Navigate { delta } => self.navigate(delta).map(|_| ()),
            Command::GoTo { index } => self.go_to(index).map(|_| ()),
            Command::Finish => self.finish(),
            Command::ReviewUnanswered => self.review_unanswered().map(|_| ()),
            Command::Reset => {
                self.reset();
                Ok(())
            }
        };

        if let Err(e) = &result {
            tracing::debug!(error = %e, "session command rejected");
        }
        result
    }
}
