//! Shuffle module - unbiased Fisher-Yates permutation
//!
//! Walks the slice from the last index down to the first, swapping each
//! element with a uniformly random earlier-or-equal index. `gen_range` keeps
//! the draw unbiased (no modulo truncation).

use rand::Rng;

/// Shuffle a slice in place.
pub fn shuffle_in_place<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of the input, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut result = items.to_vec();
    shuffle_in_place(rng, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_shuffled_preserves_multiset() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();

        let mut output = shuffled(&mut rng, &input);
        output.sort_unstable();

        assert_eq!(output, input);
    }

    #[test]
    fn test_shuffled_does_not_mutate_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let input = vec!["a", "b", "c", "d", "e"];
        let before = input.clone();

        let _ = shuffled(&mut rng, &input);

        assert_eq!(input, before);
    }

    #[test]
    fn test_shuffled_deterministic_per_seed() {
        let input: Vec<u32> = (0..20).collect();

        let mut rng1 = ChaCha8Rng::seed_from_u64(99);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99);

        assert_eq!(shuffled(&mut rng1, &input), shuffled(&mut rng2, &input));
    }

    #[test]
    fn test_shuffled_trivial_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let empty: Vec<u32> = Vec::new();
        assert!(shuffled(&mut rng, &empty).is_empty());

        let single = vec![42u32];
        assert_eq!(shuffled(&mut rng, &single), single);
    }

    #[test]
    fn test_shuffle_eventually_reorders() {
        // With 20 elements the identity permutation is vanishingly unlikely
        // across 10 seeds; at least one shuffle must differ from the input.
        let input: Vec<u32> = (0..20).collect();
        let mut any_reordered = false;

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            if shuffled(&mut rng, &input) != input {
                any_reordered = true;
                break;
            }
        }

        assert!(any_reordered);
    }
}
