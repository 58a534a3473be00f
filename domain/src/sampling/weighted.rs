//! Weighted selection

use super::random::RandomSource;

/// Pick one item with probability proportional to its weight.
///
/// Returns `None` only when `items` is empty. A non-positive total weight
/// falls back to a uniform pick. If float rounding leaves the remainder
/// positive after the walk, the last item is returned.
///
/// `weights` must have the same length as `items`.
pub fn weighted_pick<'a, T, R: RandomSource + ?Sized>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut R,
) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return items.get(rng.next_index(items.len()));
    }

    let mut r = rng.next_f64() * total;
    for (item, weight) in items.iter().zip(weights) {
        r -= weight;
        if r <= 0.0 {
            return Some(item);
        }
    }
    items.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_empty_returns_none() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(weighted_pick::<u8, _>(&[], &[], &mut rng), None);
    }

    #[test]
    fn test_walks_cumulative_weights() {
        let items = ["a", "b", "c"];
        let weights = [1.0, 2.0, 1.0];
        // total 4: a covers (0,1], b covers (1,3], c covers (3,4]
        let mut rng = ScriptedRandom::new(vec![0.05, 0.5, 0.9]);
        assert_eq!(weighted_pick(&items, &weights, &mut rng), Some(&"a"));
        assert_eq!(weighted_pick(&items, &weights, &mut rng), Some(&"b"));
        assert_eq!(weighted_pick(&items, &weights, &mut rng), Some(&"c"));
    }

    #[test]
    fn test_zero_total_falls_back_to_uniform() {
        let items = [10, 20, 30, 40];
        let weights = [0.0; 4];
        let mut rng = ScriptedRandom::new(vec![0.6]);
        assert_eq!(weighted_pick(&items, &weights, &mut rng), Some(&30));
    }

    #[test]
    fn test_negative_total_falls_back_to_uniform() {
        let items = [1, 2];
        let weights = [-1.0, -2.0];
        let mut rng = ScriptedRandom::new(vec![0.1]);
        assert_eq!(weighted_pick(&items, &weights, &mut rng), Some(&1));
    }

    #[test]
    fn test_zero_weight_item_never_picked() {
        let items = ["never", "always"];
        let weights = [0.0, 1.0];
        let mut rng = SeededRandom::new(77);
        for _ in 0..500 {
            assert_eq!(weighted_pick(&items, &weights, &mut rng), Some(&"always"));
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let items = [0usize, 1];
        let weights = [1.0, 3.0];
        let mut rng = SeededRandom::new(2024);
        let mut counts = [0usize; 2];
        for _ in 0..8000 {
            let picked = weighted_pick(&items, &weights, &mut rng).unwrap();
            counts[*picked] += 1;
        }
        let share = counts[1] as f64 / 8000.0;
        assert!((share - 0.75).abs() < 0.03, "share was {share}");
    }
}
