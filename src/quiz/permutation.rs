use std::hash::Hash;

use indexmap::IndexSet;

/// Returns every ordering of `items`.
///
/// The set iterates in generation order, so the identity ordering is always
/// first. An empty input gives an empty set rather than a set holding one
/// empty ordering. Orderings that come out identical (only possible with
/// duplicate items) collapse into one entry.
///
/// The result grows as `n!`; that is fine for the handful of choices a quiz
/// question carries.
pub fn permutations<T: Clone + Eq + Hash>(items: &[T]) -> IndexSet<Vec<T>> {
    match items {
        [] => IndexSet::new(),
        [single] => IndexSet::from([vec![single.clone()]]),
        _ => {
            let mut result = IndexSet::new();
            for (i, head) in items.iter().enumerate() {
                let mut rest = items.to_vec();
                rest.remove(i);

                for tail in permutations(&rest) {
                    let mut ordering = Vec::with_capacity(items.len());
                    ordering.push(head.clone());
                    ordering.extend(tail);
                    result.insert(ordering);
                }
            }
            result
        }
    }
}
