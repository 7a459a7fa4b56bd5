use std::hash::Hash;

use itertools::Itertools;
use log::debug;

/// All orderings of `items`, in lexicographic index order, keeping only the
/// first occurrence of each distinct sequence.
pub fn distinct_permutations<T: Clone + Eq + Hash>(items: &[T]) -> Vec<Vec<T>> {
    let result: Vec<Vec<T>> = items
        .iter()
        .cloned()
        .permutations(items.len())
        .unique()
        .collect();

    debug!(
        "Generated {} distinct permutations of {} items",
        result.len(),
        items.len()
    );
    result
}
