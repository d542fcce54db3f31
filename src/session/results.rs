use serde::{Deserialize, Serialize};

use crate::models::OptionKey;

use super::state::SessionState;

/// How one question ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    /// 1-based question number.
    pub number: usize,
    pub prompt: String,
    pub selected: Option<OptionKey>,
    pub correct: OptionKey,
    pub is_correct: bool,
}

/// Aggregated result of a session. Rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub set_name: String,
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub completion_rate: f64,
    pub accuracy_rate: f64,
    pub score_rate: f64,
    pub unanswered: Vec<usize>,
    pub breakdown: Vec<QuestionOutcome>,
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

impl QuizSummary {
    pub fn from_session(session: &SessionState) -> Self {
        let total = session.total();
        let answered = session.answered_count();
        let correct = session.correct_count();

        let breakdown = session
            .question_set()
            .map(|set| {
                set.iter()
                    .enumerate()
                    .map(|(index, question)| QuestionOutcome {
                        number: index + 1,
                        prompt: question.prompt.clone(),
                        selected: session.answer_for(index),
                        correct: question.correct,
                        is_correct: session.feedback_for(index).is_some_and(|f| f.is_correct),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            set_name: session
                .question_set()
                .map(|set| set.name.clone())
                .unwrap_or_default(),
            total,
            answered,
            correct,
            completion_rate: percentage(answered, total),
            accuracy_rate: percentage(correct, answered),
            score_rate: percentage(correct, total),
            unanswered: session.unanswered(),
            breakdown,
        }
    }

    pub fn has_unanswered(&self) -> bool {
        !self.unanswered.is_empty()
    }
}

impl SessionState {
    pub fn summary(&self) -> QuizSummary {
        QuizSummary::from_session(self)
    }
}
