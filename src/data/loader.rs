use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;
use crate::models::{OptionKey, Question, QuestionSet};

const COLUMN_COUNT: usize = 6;

/// Layout of an accepted question file, for display to the user.
pub const FORMAT_HELP: &str = "\
CSV file without a header row, one question per line, six columns:
  \"Question?\",\"Option A\",\"Option B\",\"Option C\",\"Option D\",\"a\"
The last column is the letter of the correct option (a, b, c or d).";

/// A question file offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSource {
    pub name: String,
    pub path: PathBuf,
}

/// Parse headerless six-column CSV into a question set.
///
/// Rows with a missing or empty field, or with an answer letter outside
/// a-d, are dropped and counted in `skipped_rows`. A row with too many
/// columns fails the whole load.
pub fn parse_questions<R: Read>(reader: R, name: &str) -> Result<QuestionSet, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut questions = Vec::new();
    let mut skipped_rows = 0;

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() > COLUMN_COUNT {
            return Err(LoadError::FieldCount {
                line,
                found: record.len(),
            });
        }

        match parse_record(&record) {
            Some(question) => questions.push(question),
            None => {
                tracing::warn!(set = name, line, "skipping incomplete or invalid question row");
                skipped_rows += 1;
            }
        }
    }

    if questions.is_empty() {
        return Err(LoadError::NoQuestions(name.to_string()));
    }

    Ok(QuestionSet {
        name: name.to_string(),
        questions,
        skipped_rows,
    })
}

fn parse_record(record: &StringRecord) -> Option<Question> {
    if record.len() < COLUMN_COUNT || record.iter().any(str::is_empty) {
        return None;
    }

    let correct: OptionKey = record[5].parse().ok()?;
    Some(Question {
        prompt: record[0].to_string(),
        options: [
            record[1].to_string(),
            record[2].to_string(),
            record[3].to_string(),
            record[4].to_string(),
        ],
        correct,
    })
}

/// Load a question set from a CSV file, named after the file stem.
pub fn load_question_set<P: AsRef<Path>>(path: P) -> Result<QuestionSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let set = parse_questions(file, &name)?;
    tracing::info!(
        path = %path.display(),
        questions = set.len(),
        skipped = set.skipped_rows,
        "loaded question set"
    );
    Ok(set)
}

/// List the `.csv` files directly inside `dir`, sorted by name.
pub fn list_question_sets<P: AsRef<Path>>(dir: P) -> Result<Vec<QuestionSource>, LoadError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }

    let read_error = |source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv && path.is_file() {
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            sources.push(QuestionSource { name, path });
        }
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = sources.len(), "scanned questions folder");
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "study-quiz-{}-{}",
            label,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_preserves_order_and_trims() {
        let data = "  What is 2+2? , 3 , 4 ,5,6, b \n\"Capital of France?\",Rome,Paris,Berlin,Madrid,B\n";
        let set = parse_questions(data.as_bytes(), "math").unwrap();

        assert_eq!(set.name, "math");
        assert_eq!(set.len(), 2);
        assert_eq!(set.skipped_rows, 0);

        let first = set.get(0).unwrap();
        assert_eq!(first.prompt, "What is 2+2?");
        assert_eq!(first.options, ["3", "4", "5", "6"].map(String::from));
        assert_eq!(first.correct, OptionKey::B);

        assert_eq!(set.get(1).unwrap().prompt, "Capital of France?");
    }

    #[test]
    fn test_parse_drops_incomplete_rows() {
        let data = "\
Q1,a1,b1,c1,d1,a
Q2,,b2,c2,d2,b
Q3,a3,b3,c3,d3,c
Q4,a4,b4,c4
Q5,a5,b5,c5,d5,
";
        let set = parse_questions(data.as_bytes(), "partial").unwrap();
        let prompts: Vec<_> = set.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, ["Q1", "Q3"]);
        assert_eq!(set.skipped_rows, 3);
    }

    #[test]
    fn test_parse_rejects_unknown_answer_letter() {
        let data = "Q1,a,b,c,d,e\nQ2,a,b,c,d,D\n";
        let set = parse_questions(data.as_bytes(), "letters").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().correct, OptionKey::D);
        assert_eq!(set.skipped_rows, 1);
    }

    #[test]
    fn test_parse_too_many_columns_fails_whole_load() {
        let data = "Q1,a,b,c,d,a\nQ2,a,b,c,d,b,extra\n";
        let err = parse_questions(data.as_bytes(), "wide").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 2, found: 7 }));
    }

    #[test]
    fn test_parse_empty_input_is_an_error() {
        let err = parse_questions("".as_bytes(), "empty").unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions(ref name) if name == "empty"));

        let err = parse_questions(",,,,,\n".as_bytes(), "blank").unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_question_set("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_list_and_load_from_folder() {
        let dir = temp_dir("list");
        fs::write(dir.join("zoology.csv"), "Q,a,b,c,d,a\n").unwrap();
        fs::write(dir.join("algebra.CSV"), "Q,a,b,c,d,b\n").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        fs::create_dir_all(dir.join("nested.csv")).unwrap();

        let sources = list_question_sets(&dir).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["algebra.CSV", "zoology.csv"]);

        let set = load_question_set(&sources[1].path).unwrap();
        assert_eq!(set.name, "zoology");
        assert_eq!(set.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_list_empty_and_missing_folder() {
        let dir = temp_dir("empty");
        assert!(list_question_sets(&dir).unwrap().is_empty());
        fs::remove_dir_all(&dir).unwrap();

        let err = list_question_sets(dir.join("gone")).unwrap_err();
        assert!(matches!(err, LoadError::MissingDirectory(_)));
    }
}
