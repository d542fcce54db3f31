//! Quiz session state machine.
//!
//! A session moves `Empty -> InProgress -> Finished`. `load` and `reset`
//! are accepted from any phase; answering and navigation only while the
//! quiz is in progress.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidSession, SessionError};
use crate::models::{OptionKey, Question, QuestionSet};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No question set loaded.
    #[default]
    Empty,
    /// Answering questions.
    InProgress,
    /// All questions answered, or the user finished early.
    Finished,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Empty => "empty",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Verdict attached to an answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub message: String,
}

impl Feedback {
    fn grade(question: &Question, selected: OptionKey) -> Self {
        if question.is_correct(selected) {
            Self {
                is_correct: true,
                message: format!("Correct! Answer {} is right.", selected),
            }
        } else {
            Self {
                is_correct: false,
                message: format!(
                    "Answer {} is incorrect. The correct answer is {}.",
                    selected, question.correct
                ),
            }
        }
    }
}

/// One user's progress through a question set.
///
/// `answers` and `feedback` always have the same keys: an answer is
/// graded the moment it is recorded. Deserialization checks this and the
/// other phase invariants, so a restored state is always reachable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct SessionState {
    phase: SessionPhase,
    question_set: Option<QuestionSet>,
    current_index: usize,
    answers: BTreeMap<usize, OptionKey>,
    feedback: BTreeMap<usize, Feedback>,
}

/// Unchecked wire form of `SessionState`.
#[derive(Deserialize)]
struct SessionSnapshot {
    phase: SessionPhase,
    question_set: Option<QuestionSet>,
    current_index: usize,
    answers: BTreeMap<usize, OptionKey>,
    feedback: BTreeMap<usize, Feedback>,
}

impl TryFrom<SessionSnapshot> for SessionState {
    type Error = InvalidSession;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        let SessionSnapshot {
            phase,
            question_set,
            current_index,
            answers,
            feedback,
        } = snapshot;

        let Some(set) = &question_set else {
            return match phase {
                SessionPhase::Empty
                    if current_index == 0 && answers.is_empty() && feedback.is_empty() =>
                {
                    Ok(Self::default())
                }
                SessionPhase::Empty => Err(InvalidSession::EmptyWithData),
                phase => Err(InvalidSession::MissingQuestionSet { phase }),
            };
        };

        if phase == SessionPhase::Empty {
            return Err(InvalidSession::EmptyWithData);
        }

        let len = set.len();
        if current_index >= len.max(1) {
            return Err(InvalidSession::IndexOutOfRange {
                index: current_index,
                len,
            });
        }

        if answers.len() != feedback.len() {
            let index = answers
                .keys()
                .chain(feedback.keys())
                .find(|i| !answers.contains_key(i) || !feedback.contains_key(i))
                .copied()
                .unwrap_or_default();
            return Err(InvalidSession::FeedbackMismatch { index });
        }

        for (&index, &answer) in &answers {
            let question = set.get(index).ok_or(InvalidSession::IndexOutOfRange { index, len })?;
            if feedback.get(&index) != Some(&Feedback::grade(question, answer)) {
                return Err(InvalidSession::FeedbackMismatch { index });
            }
        }

        let all_answered = answers.len() == len;
        if phase == SessionPhase::InProgress && all_answered {
            return Err(InvalidSession::PhaseMismatch {
                phase,
                answered: answers.len(),
                total: len,
            });
        }

        Ok(Self {
            phase,
            question_set,
            current_index,
            answers,
            feedback,
        })
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session over `set`, discarding any previous progress.
    pub fn load(&mut self, set: QuestionSet) {
        let phase = if set.is_empty() {
            SessionPhase::Finished
        } else {
            SessionPhase::InProgress
        };

        *self = Self {
            phase,
            question_set: Some(set),
            ..Self::default()
        };
    }

    /// Record `option` for question `index` and grade it immediately.
    ///
    /// A later selection for the same question replaces the earlier one.
    /// Answering the last unanswered question finishes the session.
    pub fn select(&mut self, index: usize, option: OptionKey) -> Result<&Feedback, SessionError> {
        self.require_in_progress()?;
        let set = self.question_set.as_ref().ok_or(SessionError::NoQuestionSet)?;
        let question = set.get(index).ok_or(SessionError::QuestionOutOfRange {
            index,
            len: set.len(),
        })?;

        let feedback = Feedback::grade(question, option);
        self.answers.insert(index, option);
        self.feedback.insert(index, feedback);

        if self.answered_count() == self.total() {
            self.phase = SessionPhase::Finished;
        }

        Ok(&self.feedback[&index])
    }

    /// Move by `delta` questions, clamped to the set's bounds.
    pub fn navigate(&mut self, delta: isize) -> Result<usize, SessionError> {
        self.require_in_progress()?;
        let target = self.current_index.saturating_add_signed(delta);
        self.go_to(target)
    }

    /// Jump to `index`, clamped to the set's bounds.
    pub fn go_to(&mut self, index: usize) -> Result<usize, SessionError> {
        self.require_in_progress()?;
        let last = self.total().saturating_sub(1);
        self.current_index = index.min(last);
        Ok(self.current_index)
    }

    /// End the quiz now, however many questions are answered.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Empty => Err(SessionError::NoQuestionSet),
            SessionPhase::InProgress | SessionPhase::Finished => {
                self.phase = SessionPhase::Finished;
                Ok(())
            }
        }
    }

    /// Reopen a finished quiz at its first unanswered question.
    pub fn review_unanswered(&mut self) -> Result<usize, SessionError> {
        if self.phase != SessionPhase::Finished {
            return Err(SessionError::NotFinished);
        }

        let first = (0..self.total())
            .find(|i| !self.answers.contains_key(i))
            .ok_or(SessionError::NothingUnanswered)?;

        self.phase = SessionPhase::InProgress;
        self.current_index = first;
        Ok(first)
    }

    /// Drop the question set and all recorded answers.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn require_in_progress(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::InProgress {
            Ok(())
        } else {
            Err(SessionError::NotInProgress { phase: self.phase })
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn question_set(&self) -> Option<&QuestionSet> {
        self.question_set.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.question_set.as_ref()?.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.question_set.as_ref().map_or(0, QuestionSet::len)
    }

    pub fn answer_for(&self, index: usize) -> Option<OptionKey> {
        self.answers.get(&index).copied()
    }

    pub fn feedback_for(&self, index: usize) -> Option<&Feedback> {
        self.feedback.get(&index)
    }

    pub fn answered_count(&self) -> usize {
        self.feedback.len()
    }

    pub fn correct_count(&self) -> usize {
        self.feedback.values().filter(|f| f.is_correct).count()
    }

    /// 1-based numbers of the questions without an answer.
    pub fn unanswered(&self) -> Vec<usize> {
        (0..self.total())
            .filter(|i| !self.answers.contains_key(i))
            .map(|i| i + 1)
            .collect()
    }

    /// Position of the current question as a fraction of the set.
    pub fn progress(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.current_index + 1) as f64 / total as f64,
        }
    }
}
