//! Per-user quiz session: state machine, commands and results.

mod command;
mod results;
mod state;

pub use command::Command;
pub use results::{QuestionOutcome, QuizSummary};
pub use state::{Feedback, SessionPhase, SessionState};
