mod loader;

pub use loader::{
    FORMAT_HELP, QuestionSource, list_question_sets, load_question_set, parse_questions,
};
