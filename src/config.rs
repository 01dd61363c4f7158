use std::path::PathBuf;

use crate::quiz::error::QuizError;

pub const DEFAULT_QUIZ_FILE: &str = "quiz.yaml";

/// Settings for a quiz sitting, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `QUIZ_FILE`
    pub quiz_file: PathBuf,
    /// `QUIZ_SEED`: replays the same choice orderings when set.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let quiz_file: PathBuf = lookup("QUIZ_FILE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_QUIZ_FILE.to_string())
            .into();

        let seed = match lookup("QUIZ_SEED") {
            Some(value) if !value.trim().is_empty() => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|err| QuizError::Config(format!("QUIZ_SEED={value:?}: {err}")))?,
            ),
            _ => None,
        };

        Ok(Self { quiz_file, seed })
    }
}
