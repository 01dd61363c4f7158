pub mod config;
pub mod quiz;

pub use quiz::swap::{compute_significant_swaps, ChoiceSwapEngine};
pub use quiz::{Choice, MultipleChoice, Question, QuestionSet, Quiz};
