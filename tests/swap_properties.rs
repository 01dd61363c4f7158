use proptest::prelude::*;
use quiz_swap::quiz::draw::SeededRandom;
use quiz_swap::quiz::permutation::permutations;
use quiz_swap::{compute_significant_swaps, ChoiceSwapEngine, Choice, MultipleChoice};

fn question() -> impl Strategy<Value = MultipleChoice> {
    prop::collection::vec(any::<bool>(), 2..=6).prop_flat_map(|fixed| {
        let len = fixed.len();
        (Just(fixed), 0..len).prop_map(|(fixed, correct)| {
            let choices = fixed
                .iter()
                .enumerate()
                .map(|(i, &is_fixed_position)| Choice {
                    answer: format!("choice {i}"),
                    is_fixed_position,
                })
                .collect();
            MultipleChoice::new(choices, correct).unwrap()
        })
    })
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[test]
fn test_two_choice_swap() {
    let mc = MultipleChoice::new(vec![Choice::new("a"), Choice::new("b")], 0).unwrap();
    let swaps: Vec<_> = compute_significant_swaps(&mc).into_iter().collect();
    assert_eq!(
        swaps,
        vec![MultipleChoice::new(vec![Choice::new("b"), Choice::new("a")], 1).unwrap()]
    );
}

proptest! {
    #[test]
    fn prop_permutation_count_is_factorial(items in prop::collection::vec(any::<u16>(), 1..=6)) {
        let mut distinct = items.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assume!(distinct.len() == items.len());

        let result = permutations(&items);
        prop_assert_eq!(result.len(), factorial(items.len()));
        prop_assert!(result.contains(&items));

        for ordering in &result {
            let mut sorted = ordering.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &distinct);
        }
    }

    #[test]
    fn prop_swaps_respect_fixed_and_free_slots(mc in question()) {
        let original = mc.choices();
        let swaps = compute_significant_swaps(&mc);
        let all_fixed = original.iter().all(|c| c.is_fixed_position);

        prop_assert_eq!(swaps.contains(&mc), all_fixed);

        for swap in &swaps {
            prop_assert_eq!(swap.correct_choice(), mc.correct_choice());
            for (i, choice) in swap.choices().iter().enumerate() {
                if choice.is_fixed_position {
                    prop_assert_eq!(choice, &original[i]);
                } else {
                    prop_assert_ne!(choice, &original[i]);
                }
            }
        }
    }

    #[test]
    fn prop_single_free_choice_has_no_swaps(len in 2usize..=6, free in 0usize..6) {
        let free = free % len;
        let choices = (0..len)
            .map(|i| Choice {
                answer: format!("choice {i}"),
                is_fixed_position: i != free,
            })
            .collect();
        let mc = MultipleChoice::new(choices, 0).unwrap();

        prop_assert!(compute_significant_swaps(&mc).is_empty());
    }

    #[test]
    fn prop_seeded_picks_are_reproducible(mc in question(), seed in any::<u64>()) {
        let mut left = ChoiceSwapEngine::new(SeededRandom::new(seed));
        let mut right = ChoiceSwapEngine::new(SeededRandom::new(seed));

        let picked = left.pick_one_significant_swap(&mc);
        prop_assert_eq!(&picked, &right.pick_one_significant_swap(&mc));
        if let Ok(swap) = picked {
            prop_assert!(compute_significant_swaps(&mc).contains(&swap));
        }
    }
}
