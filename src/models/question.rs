use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Position of this option in `Question::options`.
    pub fn index(self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Maps a key press to an option, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(OptionKey::A),
            'b' => Some(OptionKey::B),
            'c' => Some(OptionKey::C),
            'd' => Some(OptionKey::D),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            OptionKey::A => 'A',
            OptionKey::B => 'B',
            OptionKey::C => 'C',
            OptionKey::D => 'D',
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The text was not a single letter between A and D.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not one of a, b, c, d")]
pub struct InvalidOptionKey(pub String);

impl FromStr for OptionKey {
    type Err = InvalidOptionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| InvalidOptionKey(s.to_string())),
            _ => Err(InvalidOptionKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for OptionKey {
    type Error = InvalidOptionKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionKey> for String {
    fn from(key: OptionKey) -> Self {
        key.letter().to_ascii_lowercase().to_string()
    }
}

/// A multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub correct: OptionKey,
}

impl Question {
    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.correct == key
    }
}

/// Ordered questions loaded from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub name: String,
    pub questions: Vec<Question>,
    /// Rows the loader discarded (empty fields or an unknown answer letter).
    #[serde(default)]
    pub skipped_rows: usize,
}

impl QuestionSet {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
            skipped_rows: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_key_parse_ignores_case_and_whitespace() {
        assert_eq!("a".parse::<OptionKey>(), Ok(OptionKey::A));
        assert_eq!(" B ".parse::<OptionKey>(), Ok(OptionKey::B));
        assert_eq!("d".parse::<OptionKey>(), Ok(OptionKey::D));
        assert!("e".parse::<OptionKey>().is_err());
        assert!("ab".parse::<OptionKey>().is_err());
        assert!("".parse::<OptionKey>().is_err());
    }

    #[test]
    fn test_invalid_option_key_message() {
        let err = "z".parse::<OptionKey>().unwrap_err();
        assert_eq!(err.to_string(), "'z' is not one of a, b, c, d");
    }

    #[test]
    fn test_option_key_serde_accepts_either_case() {
        let upper: OptionKey = serde_json::from_str("\"C\"").unwrap();
        let lower: OptionKey = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(upper, OptionKey::C);
        assert_eq!(lower, OptionKey::C);
        assert_eq!(serde_json::to_string(&OptionKey::C).unwrap(), "\"c\"");
        assert!(serde_json::from_str::<OptionKey>("\"x\"").is_err());
    }

    #[test]
    fn test_option_lookup() {
        let question = Question {
            prompt: "2+2=?".to_string(),
            options: ["3".into(), "4".into(), "5".into(), "6".into()],
            correct: OptionKey::B,
        };
        assert_eq!(question.option(OptionKey::B), "4");
        assert!(question.is_correct(OptionKey::B));
        assert!(!question.is_correct(OptionKey::A));
    }
}
