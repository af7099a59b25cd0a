//! List-level randomized sampling
//!
//! Used by non-paginated relationships that support a `sample` size:
//! the full result set is shuffled and truncated. This never goes
//! through the connection builder.

use rand::seq::SliceRandom;
use rand::Rng;

/// Randomly sample `size` items, or return the list unchanged when no
/// size is given
pub fn sample<T>(items: Vec<T>, size: Option<usize>) -> Vec<T> {
    sample_with_rng(items, size, &mut rand::thread_rng())
}

/// Sampling with an injected RNG, for deterministic tests
pub fn sample_with_rng<T, R: Rng>(mut items: Vec<T>, size: Option<usize>, rng: &mut R) -> Vec<T> {
    match size {
        Some(size) => {
            items.shuffle(rng);
            items.truncate(size);
            items
        }
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_draws_from_source() {
        let source = vec![1, 2, 3, 4, 5];
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_with_rng(source.clone(), Some(2), &mut rng);

        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|item| source.contains(item)));
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn test_sample_larger_than_source_returns_everything() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_with_rng(vec![1, 2, 3], Some(10), &mut rng);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_no_sample_preserves_order() {
        let source = vec![1, 2, 3, 4, 5];
        assert_eq!(sample(source.clone(), None), source);
    }
}
