pub mod draw;
pub mod error;
pub mod loader;
pub mod permutation;
pub mod significant;
pub mod swap;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use error::{QuizError, ValidationError};
use swap::ChoiceSwapEngine;

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub answer: String,
    /// Fixed choices keep their slot whenever the choices get swapped,
    /// e.g. "None of the above".
    #[serde(rename = "fixed_position", default)]
    pub is_fixed_position: bool,
}

impl Choice {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            is_fixed_position: false,
        }
    }

    pub fn fixed(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            is_fixed_position: true,
        }
    }
}

/// A validated set of choices together with the index of the correct one.
///
/// Immutable once built: every way in, including deserialization, goes
/// through [`MultipleChoice::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMultipleChoice")]
pub struct MultipleChoice {
    choices: Vec<Choice>,
    correct_choice_index: usize,
}

#[derive(Deserialize)]
struct RawMultipleChoice {
    choices: Vec<Choice>,
    correct_choice_index: usize,
}

impl TryFrom<RawMultipleChoice> for MultipleChoice {
    type Error = ValidationError;

    fn try_from(raw: RawMultipleChoice) -> Result<Self, Self::Error> {
        Self::new(raw.choices, raw.correct_choice_index)
    }
}

impl MultipleChoice {
    pub fn new(choices: Vec<Choice>, correct_choice_index: usize) -> Result<Self, ValidationError> {
        if choices.len() < 2 {
            return Err(ValidationError::TooFewChoices {
                count: choices.len(),
            });
        }

        let mut seen = HashSet::with_capacity(choices.len());
        for choice in &choices {
            if !seen.insert(choice.answer.as_str()) {
                return Err(ValidationError::DuplicateAnswer(choice.answer.clone()));
            }
        }

        if correct_choice_index >= choices.len() {
            return Err(ValidationError::CorrectChoiceOutOfRange {
                index: correct_choice_index,
                len: choices.len(),
            });
        }

        Ok(Self {
            choices,
            correct_choice_index,
        })
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn correct_choice_index(&self) -> usize {
        self.correct_choice_index
    }

    pub fn correct_choice(&self) -> &Choice {
        // The index is range-checked in `new`.
        &self.choices[self.correct_choice_index]
    }

    pub fn is_correct(&self, choice_index: usize) -> bool {
        choice_index == self.correct_choice_index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub multiple_choice: MultipleChoice,
}

impl Question {
    pub fn new(text: impl Into<String>, multiple_choice: MultipleChoice) -> Self {
        Self {
            text: text.into(),
            multiple_choice,
        }
    }
}

/// A named, non-empty collection of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionSet")]
pub struct QuestionSet {
    name: String,
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct RawQuestionSet {
    name: String,
    questions: Vec<Question>,
}

impl TryFrom<RawQuestionSet> for QuestionSet {
    type Error = ValidationError;

    fn try_from(raw: RawQuestionSet) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.questions)
    }
}

impl QuestionSet {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        Ok(Self { name, questions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// One sitting: questions are asked in order and correct answers are counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub score: u32,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_question: 0,
            score: 0,
        }
    }

    /// Starts a sitting over a copy of `set` whose choices have been swapped.
    pub fn from_question_set<R: draw::RandomSource>(
        set: &QuestionSet,
        engine: &mut ChoiceSwapEngine<R>,
    ) -> Self {
        let swapped = engine.swap_question_set(set);
        log::info!(
            "Starting quiz {:?} with {} questions",
            swapped.name(),
            swapped.questions().len()
        );
        Self::new(swapped.questions)
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    /// 1-based number of the question being asked.
    pub fn question_number(&self) -> usize {
        self.current_question + 1
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.current_question >= self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Answers the current question and moves on to the next one.
    ///
    /// Returns whether the answer was correct. An out-of-range choice leaves
    /// the quiz on the same question.
    pub fn answer(&mut self, choice_index: usize) -> Result<bool, QuizError> {
        let question = self.current().ok_or(QuizError::Finished)?;
        let len = question.multiple_choice.choices().len();
        if choice_index >= len {
            return Err(QuizError::ChoiceOutOfRange {
                index: choice_index,
                len,
            });
        }

        let correct = question.multiple_choice.is_correct(choice_index);
        if correct {
            self.score += 1;
        }
        log::debug!(
            "Question #{} answered with choice {}: {}",
            self.question_number(),
            choice_index,
            if correct { "correct" } else { "wrong" }
        );
        self.current_question += 1;
        Ok(correct)
    }
}
