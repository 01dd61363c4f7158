use indexmap::IndexSet;

use crate::quiz::draw::{RandomSource, SystemRandom, UniformSetDrawer};
use crate::quiz::error::DrawError;
use crate::quiz::permutation::permutations;
use crate::quiz::significant::SignificantSwapFilter;
use crate::quiz::{MultipleChoice, Question, QuestionSet};

/// Every significantly swapped variant of `mc`, in permutation order.
///
/// The correct choice is followed by value, so each variant's
/// `correct_choice_index` points at the same answer as the original.
/// When every choice is fixed the result is `{mc}`; with exactly one free
/// choice it is empty, since that choice has nowhere else to go.
pub fn compute_significant_swaps(mc: &MultipleChoice) -> IndexSet<MultipleChoice> {
    let original_choices = mc.choices();
    let correct_choice = mc.correct_choice();
    let filter = SignificantSwapFilter::new(original_choices);

    let swaps: IndexSet<MultipleChoice> = permutations(original_choices)
        .into_iter()
        .filter(|candidate| filter.is_significant(candidate))
        .filter_map(|choices| {
            let correct_choice_index = choices.iter().position(|c| c == correct_choice)?;
            Some(MultipleChoice {
                choices,
                correct_choice_index,
            })
        })
        .collect();

    log::debug!(
        "{} significant swaps for {} choices",
        swaps.len(),
        original_choices.len()
    );
    swaps
}

/// Picks swapped choice orderings for quiz sittings.
pub struct ChoiceSwapEngine<R> {
    drawer: UniformSetDrawer<R>,
}

impl ChoiceSwapEngine<SystemRandom> {
    pub fn system() -> Self {
        Self::new(SystemRandom::new())
    }
}

impl<R: RandomSource> ChoiceSwapEngine<R> {
    pub fn new(source: R) -> Self {
        Self {
            drawer: UniformSetDrawer::new(source),
        }
    }

    /// Draws one of [`compute_significant_swaps`] uniformly.
    ///
    /// Fails with [`DrawError::EmptySet`] when the question has no
    /// significant swap.
    pub fn pick_one_significant_swap(&mut self, mc: &MultipleChoice) -> Result<MultipleChoice, DrawError> {
        let swaps = compute_significant_swaps(mc);
        self.drawer.draw(&swaps).cloned()
    }

    /// Derives a new question set with the choices of every question swapped.
    ///
    /// Questions without a significant swap keep their original order.
    pub fn swap_question_set(&mut self, set: &QuestionSet) -> QuestionSet {
        let questions = set
            .questions()
            .iter()
            .map(|question| {
                let multiple_choice = match self.pick_one_significant_swap(&question.multiple_choice) {
                    Ok(swapped) => swapped,
                    Err(err) => {
                        log::warn!(
                            "Keeping original choice order for {:?}: {}",
                            question.text,
                            err
                        );
                        question.multiple_choice.clone()
                    }
                };
                Question {
                    text: question.text.clone(),
                    multiple_choice,
                }
            })
            .collect();

        QuestionSet {
            name: set.name().to_owned(),
            questions,
        }
    }
}
