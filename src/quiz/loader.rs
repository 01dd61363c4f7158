use std::fs;
use std::path::Path;

use crate::quiz::error::QuizError;
use crate::quiz::QuestionSet;

/// Loads a question set from a YAML file.
pub fn load_question_set<P: AsRef<Path>>(path: P) -> Result<QuestionSet, QuizError> {
    let path = path.as_ref();
    log::info!("Loading question set from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_question_set(&content)
}

/// Parses YAML text into a question set. Invalid questions fail the whole set.
pub fn parse_question_set(content: &str) -> Result<QuestionSet, QuizError> {
    let set: QuestionSet = serde_yaml::from_str(content)?;
    log::debug!(
        "Parsed question set {:?} with {} questions",
        set.name(),
        set.questions().len()
    );
    Ok(set)
}
