//! Runtime configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags or environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "quiz.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder scanned for `.csv` question sets.
    pub questions_dir: PathBuf,
    /// Where log output goes. No logging when unset.
    pub log_file: Option<PathBuf>,
    /// Default filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_dir: PathBuf::from("questions"),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `path`, or `quiz.toml` if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides given on the command line.
    pub fn with_overrides(
        mut self,
        questions_dir: Option<PathBuf>,
        log_file: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(dir) = questions_dir {
            self.questions_dir = dir;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("questions_dir = \"exams\"").unwrap();
        assert_eq!(config.questions_dir, PathBuf::from("exams"));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            questions_dir = "sets"
            log_file = "quiz.log"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("quiz.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(Config::from_toml("questions_dir = [").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/quiz.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().with_overrides(
            Some(PathBuf::from("other")),
            None,
            Some("warn".to_string()),
        );
        assert_eq!(config.questions_dir, PathBuf::from("other"));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, "warn");
    }
}
