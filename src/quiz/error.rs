//! Error types for the quiz model and the choice-swap engine.

/// A quiz value was constructed in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a multiple choice question needs at least 2 choices, got {count}")]
    TooFewChoices { count: usize },

    #[error("answer {0:?} appears more than once")]
    DuplicateAnswer(String),

    #[error("correct choice index {index} is out of range for {len} choices")]
    CorrectChoiceOutOfRange { index: usize, len: usize },

    #[error("question set name must not be blank")]
    EmptyName,

    #[error("question set has no questions")]
    NoQuestions,
}

/// Drawing from a candidate set failed. Both variants mean a caller broke a
/// precondition, so they are never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DrawError {
    #[error("cannot draw from an empty set")]
    EmptySet,

    #[error("random source returned {0}, expected a value in [0, 1)")]
    SourceOutOfRange(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid quiz data: {0}")]
    Validation(#[from] ValidationError),

    #[error("draw failed: {0}")]
    Draw(#[from] DrawError),

    #[error("the quiz is already finished")]
    Finished,

    #[error("choice {index} does not exist, the question has {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("failed to read question set: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question set: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
