//! Fisher–Yates shuffle over a [`RandomSource`]

use super::random::RandomSource;

/// Return a uniformly permuted copy of `items`, leaving the input untouched.
///
/// Walks from the last index down to 1, swapping position `i` with
/// `j = floor(rand·(i+1))`.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    for i in (1..copy.len()).rev() {
        let j = rng.next_index(i + 1);
        copy.swap(i, j);
    }
    copy
}
