//! Uniform random subset selection.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Draws up to `k` distinct entries from `pool`, uniformly at random and
/// without replacement. When `k` meets or exceeds the pool size the whole
/// pool comes back.
pub fn sample<T, R>(rng: &mut R, pool: &[T], k: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, k).cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pool() -> Vec<String> {
        ["a", "b", "c", "d", "e"].map(String::from).to_vec()
    }

    #[test]
    fn draws_exactly_k_distinct_elements() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample(&mut rng, &pool(), 3);
        assert_eq!(picked.len(), 3);

        let distinct: HashSet<&String> = picked.iter().collect();
        assert_eq!(distinct.len(), 3, "picks must not repeat: {picked:?}");
        for pick in &picked {
            assert!(pool().contains(pick), "pick not from pool: {pick}");
        }
    }

    #[test]
    fn oversized_k_returns_the_whole_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let small = vec!["x".to_string(), "y".to_string()];
        let picked = sample(&mut rng, &small, 3);

        assert_eq!(picked.len(), 2);
        let distinct: HashSet<&String> = picked.iter().collect();
        assert_eq!(distinct.len(), 2, "picks must not repeat: {picked:?}");
    }

    #[test]
    fn zero_k_returns_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(&mut rng, &pool(), 0).is_empty());
    }

    #[test]
    fn empty_pool_returns_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = Vec::new();
        assert!(sample(&mut rng, &empty, 3).is_empty());
    }

    #[test]
    fn same_seed_draws_same_subset() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(sample(&mut a, &pool(), 2), sample(&mut b, &pool(), 2));
    }
}
