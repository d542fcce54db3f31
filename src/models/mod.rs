mod page;
mod question;

pub use page::Page;
pub use question::{InvalidOptionKey, OptionKey, Question, QuestionSet};
