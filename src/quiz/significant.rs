use std::collections::HashMap;

use crate::quiz::Choice;

/// Decides whether a reordering of `original` counts as a significant swap:
/// every fixed choice is back in its original slot and every free choice
/// left the slot it started in.
pub struct SignificantSwapFilter<'a> {
    original: &'a [Choice],
    fixed_positions: HashMap<&'a Choice, usize>,
}

impl<'a> SignificantSwapFilter<'a> {
    pub fn new(original: &'a [Choice]) -> Self {
        let fixed_positions = original
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.is_fixed_position)
            .map(|(i, choice)| (choice, i))
            .collect();

        Self {
            original,
            fixed_positions,
        }
    }

    pub fn is_significant(&self, candidate: &[Choice]) -> bool {
        if candidate.len() != self.original.len() {
            return false;
        }

        candidate
            .iter()
            .zip(self.original)
            .enumerate()
            .all(|(i, (choice, was_here))| match self.fixed_positions.get(choice) {
                Some(&slot) => slot == i,
                None => choice != was_here,
            })
    }
}

/// One-off form of [`SignificantSwapFilter::is_significant`].
pub fn is_significant_swap(candidate: &[Choice], original: &[Choice]) -> bool {
    SignificantSwapFilter::new(original).is_significant(candidate)
}
