use std::path::{Path, PathBuf};

use crate::data::{QuestionSource, list_question_sets, load_question_set};
use crate::error::LoadError;
use crate::models::{OptionKey, Page, QuestionSet};
use crate::session::{Command, QuizSummary, SessionPhase, SessionState};

/// What the main area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    /// Question sets from the questions folder.
    Picker,
    /// Path entry for a custom question file.
    Upload,
    Quiz,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-line status message shown under the main area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Contents of the questions folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    Missing,
    Unreadable(String),
    Ready(Vec<QuestionSource>),
}

/// UI state for a single user, wrapping their quiz session.
pub struct App {
    page: Page,
    questions_dir: PathBuf,
    catalog: Catalog,
    catalog_cursor: usize,
    path_input: String,
    session: SessionState,
    /// Page the running session was started from.
    session_page: Option<Page>,
    option_cursor: usize,
    result_scroll: usize,
    notice: Option<Notice>,
    last_summary: Option<QuizSummary>,
}

impl App {
    pub fn new<P: Into<PathBuf>>(questions_dir: P) -> Self {
        let mut app = Self {
            page: Page::Home,
            questions_dir: questions_dir.into(),
            catalog: Catalog::Ready(Vec::new()),
            catalog_cursor: 0,
            path_input: String::new(),
            session: SessionState::new(),
            session_page: None,
            option_cursor: 0,
            result_scroll: 0,
            notice: None,
            last_summary: None,
        };
        app.rescan_catalog();
        app
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_cursor(&self) -> usize {
        self.catalog_cursor
    }

    pub fn questions_dir(&self) -> &Path {
        &self.questions_dir
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn screen(&self) -> Screen {
        let session_here = self.session_page == Some(self.page);
        match (self.page, self.session.phase()) {
            (Page::Home, _) => Screen::Home,
            (_, SessionPhase::InProgress) if session_here => Screen::Quiz,
            (_, SessionPhase::Finished) if session_here => Screen::Results,
            (Page::Quiz, _) => Screen::Picker,
            (Page::CustomStudy, _) => Screen::Upload,
        }
    }

    /// Whether key presses currently go into the path input.
    pub fn is_editing(&self) -> bool {
        self.screen() == Screen::Upload
    }

    /// Summary of the current quiz, or of the last one that was discarded.
    pub fn final_summary(&self) -> Option<QuizSummary> {
        if self.session.question_set().is_some() {
            Some(self.session.summary())
        } else {
            self.last_summary.clone()
        }
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        if page == Page::Quiz && self.screen() == Screen::Picker {
            self.rescan_catalog();
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.previous());
    }

    fn set_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }

    fn dispatch(&mut self, command: Command) -> bool {
        match self.session.apply(command) {
            Ok(()) => true,
            Err(e) => {
                self.set_notice(NoticeLevel::Warning, e.to_string());
                false
            }
        }
    }

    // --- question set selection ---

    pub fn rescan_catalog(&mut self) {
        self.catalog = match list_question_sets(&self.questions_dir) {
            Ok(sources) => Catalog::Ready(sources),
            Err(LoadError::MissingDirectory(_)) => Catalog::Missing,
            Err(e) => {
                tracing::warn!(error = %e, "failed to scan questions folder");
                Catalog::Unreadable(e.to_string())
            }
        };

        let len = match &self.catalog {
            Catalog::Ready(sources) => sources.len(),
            _ => 0,
        };
        self.catalog_cursor = self.catalog_cursor.min(len.saturating_sub(1));
    }

    pub fn catalog_next(&mut self) {
        if let Catalog::Ready(sources) = &self.catalog {
            if !sources.is_empty() {
                self.catalog_cursor = (self.catalog_cursor + 1) % sources.len();
            }
        }
    }

    pub fn catalog_previous(&mut self) {
        if let Catalog::Ready(sources) = &self.catalog {
            if !sources.is_empty() {
                self.catalog_cursor = (self.catalog_cursor + sources.len() - 1) % sources.len();
            }
        }
    }

    pub fn load_selected_source(&mut self) {
        let source = match &self.catalog {
            Catalog::Ready(sources) => sources.get(self.catalog_cursor).cloned(),
            _ => None,
        };

        match source {
            Some(source) => self.load_from_path(&source.path, Page::Quiz),
            None => self.set_notice(
                NoticeLevel::Warning,
                format!(
                    "No CSV files found in '{}'.",
                    self.questions_dir.display()
                ),
            ),
        }
    }

    pub fn path_input_push(&mut self, c: char) {
        self.path_input.push(c);
    }

    pub fn path_input_pop(&mut self) {
        self.path_input.pop();
    }

    pub fn clear_path_input(&mut self) {
        self.path_input.clear();
    }

    pub fn load_custom_file(&mut self) {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            self.set_notice(NoticeLevel::Warning, "Enter the path of a CSV file first.");
            return;
        }

        let path = PathBuf::from(trimmed);
        self.load_from_path(&path, Page::CustomStudy);
    }

    /// Open a question file straight into Custom Study.
    pub fn open_custom_file(&mut self, path: &Path) {
        self.page = Page::CustomStudy;
        self.path_input = path.display().to_string();
        self.load_from_path(path, Page::CustomStudy);
    }

    fn load_from_path(&mut self, path: &Path, page: Page) {
        match load_question_set(path) {
            Ok(set) => self.start_session(set, page),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load question set");
                let level = match e {
                    LoadError::NoQuestions(_) => NoticeLevel::Warning,
                    _ => NoticeLevel::Error,
                };
                self.set_notice(level, format!("Error loading questions: {}", e));
            }
        }
    }

    fn start_session(&mut self, set: QuestionSet, page: Page) {
        self.remember_summary();

        let mut message = format!("Quiz '{}' loaded with {} questions!", set.name, set.len());
        if set.skipped_rows > 0 {
            message.push_str(&format!(" ({} invalid rows skipped)", set.skipped_rows));
        }

        self.dispatch(Command::Load { set });
        self.session_page = Some(page);
        self.option_cursor = 0;
        self.result_scroll = 0;
        self.set_notice(NoticeLevel::Success, message);
    }

    // --- answering ---

    pub fn next_option(&mut self) {
        self.option_cursor = (self.option_cursor + 1) % OptionKey::ALL.len();
    }

    pub fn previous_option(&mut self) {
        self.option_cursor = (self.option_cursor + OptionKey::ALL.len() - 1) % OptionKey::ALL.len();
    }

    pub fn select_cursor_option(&mut self) {
        if let Some(key) = OptionKey::from_index(self.option_cursor) {
            self.select_option(key);
        }
    }

    pub fn select_option(&mut self, key: OptionKey) {
        let index = self.session.current_index();
        self.option_cursor = key.index();

        if !self.dispatch(Command::Select { index, option: key }) {
            return;
        }

        let message = self
            .session
            .feedback_for(index)
            .map(|f| f.message.clone())
            .unwrap_or_default();

        if self.session.phase() == SessionPhase::Finished {
            self.result_scroll = 0;
            self.set_notice(
                NoticeLevel::Info,
                format!("All questions answered. Question {}: {}", index + 1, message),
            );
        } else {
            self.notice = None;
        }
    }

    pub fn previous_question(&mut self) {
        self.move_question(-1);
    }

    pub fn next_question(&mut self) {
        self.move_question(1);
    }

    fn move_question(&mut self, delta: isize) {
        if self.dispatch(Command::Navigate { delta }) {
            self.sync_option_cursor();
        }
    }

    fn sync_option_cursor(&mut self) {
        self.option_cursor = self
            .session
            .answer_for(self.session.current_index())
            .map_or(0, OptionKey::index);
    }

    pub fn finish_quiz(&mut self) {
        if self.dispatch(Command::Finish) {
            self.result_scroll = 0;
            self.notice = None;
        }
    }

    /// Drop the running quiz and go back to choosing a set.
    pub fn abandon_quiz(&mut self) {
        self.remember_summary();
        self.dispatch(Command::Reset);
        self.session_page = None;
        self.option_cursor = 0;
        self.set_notice(NoticeLevel::Info, "Quiz discarded.");
        if self.page == Page::Quiz {
            self.rescan_catalog();
        }
    }

    // --- results ---

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn review_unanswered(&mut self) {
        if self.dispatch(Command::ReviewUnanswered) {
            self.sync_option_cursor();
            self.notice = None;
        }
    }

    pub fn restart(&mut self) {
        self.remember_summary();
        self.dispatch(Command::Reset);
        self.session_page = None;
        self.option_cursor = 0;
        self.result_scroll = 0;
        self.notice = None;
        if self.page == Page::Quiz {
            self.rescan_catalog();
        }
    }

    fn remember_summary(&mut self) {
        if self.session.question_set().is_some() {
            self.last_summary = Some(self.session.summary());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn fixture_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "study-quiz-app-{}-{}",
            label,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("math.csv"),
            "2+2=?,3,4,5,6,b\n3+3=?,5,6,7,8,B\n1+1=?,1,2,3,4,b\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_missing_folder_is_reported() {
        let mut app = App::new("/no/such/questions/folder");
        assert_eq!(app.catalog(), &Catalog::Missing);

        app.set_page(Page::Quiz);
        assert_eq!(app.screen(), Screen::Picker);
        app.load_selected_source();
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Warning);
        assert_eq!(app.session().phase(), SessionPhase::Empty);
    }

    #[test]
    fn test_quiz_flow_from_folder() {
        let dir = fixture_dir("flow");
        let mut app = App::new(&dir);
        app.set_page(Page::Quiz);
        app.load_selected_source();

        assert_eq!(app.screen(), Screen::Quiz);
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Success);
        assert_eq!(app.session().total(), 3);

        app.select_option(OptionKey::B);
        assert!(app.session().feedback_for(0).unwrap().is_correct);

        app.next_question();
        app.next_question();
        app.next_question();
        assert_eq!(app.session().current_index(), 2);

        app.previous_question();
        app.finish_quiz();
        assert_eq!(app.screen(), Screen::Results);

        let summary = app.final_summary().unwrap();
        assert_eq!(summary.unanswered, vec![2, 3]);

        app.review_unanswered();
        assert_eq!(app.screen(), Screen::Quiz);
        assert_eq!(app.session().current_index(), 1);

        app.restart();
        assert_eq!(app.screen(), Screen::Picker);
        assert_eq!(app.final_summary().unwrap().answered, 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_answering_all_questions_shows_results() {
        let dir = fixture_dir("all");
        let mut app = App::new(&dir);
        app.open_custom_file(&dir.join("math.csv"));
        assert_eq!(app.page(), Page::CustomStudy);

        for i in 0..3 {
            if i > 0 {
                app.next_question();
            }
            app.next_option();
            app.select_cursor_option();
        }

        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.session().correct_count(), 3);
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Info);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_session_is_shown_only_on_its_page() {
        let dir = fixture_dir("pages");
        let mut app = App::new(&dir);
        app.open_custom_file(&dir.join("math.csv"));
        assert_eq!(app.screen(), Screen::Quiz);

        app.set_page(Page::Quiz);
        assert_eq!(app.screen(), Screen::Picker);

        app.set_page(Page::CustomStudy);
        assert_eq!(app.screen(), Screen::Quiz);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_custom_file_errors_keep_session() {
        let dir = fixture_dir("errors");
        let bad = dir.join("bad.csv");
        fs::write(&bad, "only,three,columns\n").unwrap();

        let mut app = App::new(&dir);
        app.set_page(Page::CustomStudy);
        assert!(app.is_editing());

        app.load_custom_file();
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Warning);

        for c in bad.display().to_string().chars() {
            app.path_input_push(c);
        }
        app.load_custom_file();
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Warning);
        assert_eq!(app.session().phase(), SessionPhase::Empty);

        app.clear_path_input();
        for c in dir.join("missing.csv").display().to_string().chars() {
            app.path_input_push(c);
        }
        app.load_custom_file();
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Error);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_picker_load_failure_keeps_running_session() {
        let dir = fixture_dir("picker-errors");
        fs::write(dir.join("bad.csv"), "2+2=?,3,4,5,6,b,extra
").unwrap();

        let mut app = App::new(&dir);
        app.open_custom_file(&dir.join("math.csv"));
        app.select_option(OptionKey::B);

        app.set_page(Page::Quiz);
        assert_eq!(app.screen(), Screen::Picker);
        let Catalog::Ready(sources) = app.catalog() else {
            panic!("expected a readable catalog");
        };
        let bad = sources.iter().position(|s| s.name == "bad.csv").unwrap();
        while app.catalog_cursor() != bad {
            app.catalog_next();
        }

        app.load_selected_source();
        assert_eq!(app.notice().unwrap().level, NoticeLevel::Error);

        let session = app.session();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.question_set().unwrap().name, "math");
        assert_eq!(session.total(), 3);
        assert_eq!(session.answer_for(0), Some(OptionKey::B));
        assert!(session.feedback_for(0).unwrap().is_correct);

        app.set_page(Page::CustomStudy);
        assert_eq!(app.screen(), Screen::Quiz);

        fs::remove_dir_all(&dir).unwrap();
    }
}
