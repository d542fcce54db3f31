//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionPhase;

/// Error loading a question set or scanning the questions folder.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The questions folder does not exist.
    #[error("questions folder {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// The CSV data itself is corrupt (bad quoting, invalid UTF-8, ...).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row did not have exactly six columns.
    #[error("line {line}: expected 6 columns, found {found}")]
    FieldCount { line: u64, found: usize },

    /// Parsing succeeded but no usable question was left.
    #[error("no usable questions found in {0}")]
    NoQuestions(String),
}

/// A session command that is not valid in the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no question set is loaded")]
    NoQuestionSet,

    #[error("the quiz is not in progress (currently {phase})")]
    NotInProgress { phase: SessionPhase },

    #[error("the quiz has not been finished yet")]
    NotFinished,

    #[error("question {index} does not exist (the set has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("every question has already been answered")]
    NothingUnanswered,
}

/// A deserialized session that could not have been produced by the
/// state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSession {
    #[error("an empty session cannot hold questions, answers or a position")]
    EmptyWithData,

    #[error("a {phase} session needs a question set")]
    MissingQuestionSet { phase: SessionPhase },

    #[error("current question {index} is outside a set of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("answer and feedback for question {index} do not agree")]
    FeedbackMismatch { index: usize },

    #[error("a {phase} session cannot have {answered} of {total} questions answered")]
    PhaseMismatch {
        phase: SessionPhase,
        answered: usize,
        total: usize,
    },
}

/// Error reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error for running the quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}
