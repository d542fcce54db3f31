//! # study-quiz
//!
//! A terminal quiz runner for multiple-choice question sets stored as
//! headerless CSV files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use study_quiz::{Config, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(&Config::default());
//!
//!     // Run the quiz in the terminal
//!     let summary = quiz.run()?;
//!     if let Some(summary) = summary {
//!         println!("{} / {}", summary.correct, summary.total);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
mod error;
pub mod logging;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use app::{App, Catalog, Notice, NoticeLevel, Screen};
pub use config::Config;
pub use data::{FORMAT_HELP, QuestionSource, list_question_sets, load_question_set, parse_questions};
pub use error::{ConfigError, InvalidSession, LoadError, QuizError, SessionError};
pub use models::{InvalidOptionKey, OptionKey, Page, Question, QuestionSet};
pub use session::{Command, Feedback, QuizSummary, SessionPhase, SessionState};

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz that offers the question sets in `config.questions_dir`.
    pub fn new(config: &Config) -> Self {
        Self {
            app: App::new(config.questions_dir.clone()),
        }
    }

    /// Start directly on the Custom Study page with `path` loaded.
    pub fn with_custom_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.app.open_custom_file(path.as_ref());
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits. The result is the summary of the last quiz
    /// taken, if any.
    pub fn run(mut self) -> Result<Option<QuizSummary>, QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result?;
        Ok(self.app.final_summary())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_page();
            return false;
        }
        KeyCode::BackTab => {
            app.previous_page();
            return false;
        }
        _ => {}
    }

    if app.is_editing() {
        handle_path_input(app, key);
        return false;
    }

    if let KeyCode::Char(c @ '1'..='3') = key.code {
        let position = c as usize - '1' as usize;
        app.set_page(Page::ALL[position]);
        return false;
    }

    match app.screen() {
        Screen::Home => handle_home_input(app, key.code),
        Screen::Picker => handle_picker_input(app, key.code),
        Screen::Upload => false,
        Screen::Quiz => handle_quiz_input(app, key.code),
        Screen::Results => handle_result_input(app, key.code),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.set_page(Page::Quiz);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_picker_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.catalog_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.catalog_next();
            false
        }
        KeyCode::Enter => {
            app.load_selected_source();
            false
        }
        KeyCode::F(5) | KeyCode::Char('r') => {
            app.rescan_catalog();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_path_input(app: &mut App, key: KeyEvent) {
    let typed = matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char(c) if typed => app.path_input_push(c),
        KeyCode::Backspace => app.path_input_pop(),
        KeyCode::Esc => app.clear_path_input(),
        KeyCode::Enter => app.load_custom_file(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor_option(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => app.next_question(),
        KeyCode::Char('f') | KeyCode::Char('F') => app.finish_quiz(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.abandon_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(c) => {
            if let Some(option) = OptionKey::from_char(c) {
                app.select_option(option);
            }
        }
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('u') | KeyCode::Char('U') => {
            app.review_unanswered();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn write_set(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("study-quiz-keys-{}-{}", label, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("geo.csv"), "Capital of Peru?,Lima,Quito,Bogota,Caracas,a\nLongest river?,Amazon,Nile,Danube,Volga,b\n").unwrap();
        dir
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = App::new("/no/such/dir");
        app.set_page(Page::CustomStudy);
        let quit = handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(quit);
    }

    #[test]
    fn test_q_is_typed_while_editing_path() {
        let mut app = App::new("/no/such/dir");
        assert!(!press(&mut app, KeyCode::Char('3')));
        assert_eq!(app.page(), Page::CustomStudy);

        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!press(&mut app, KeyCode::Char('1')));
        assert_eq!(app.path_input(), "q1");
        assert_eq!(app.page(), Page::CustomStudy);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.path_input(), "");
    }

    #[test]
    fn test_control_chords_are_not_typed_into_path() {
        let mut app = App::new("/no/such/dir");
        app.set_page(Page::CustomStudy);

        handle_input(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        handle_input(&mut app, KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT));
        assert_eq!(app.path_input(), "");

        handle_input(&mut app, KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.path_input(), "Q/");
    }

    #[test]
    fn test_keyboard_quiz_round_trip() {
        let dir = write_set("round");
        let mut app = App::new(&dir);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Picker);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Quiz);

        press(&mut app, KeyCode::Char('A'));
        assert!(app.session().feedback_for(0).unwrap().is_correct);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.screen(), Screen::Results);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.screen(), Screen::Quiz);
        assert_eq!(app.session().current_index(), 1);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.session().correct_count(), 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen(), Screen::Picker);
        assert!(press(&mut app, KeyCode::Char('q')));

        fs::remove_dir_all(&dir).unwrap();
    }
}
