//! Uniform candidate selection.

use crate::Candidate;
use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one candidate uniformly at random.
///
/// Generic over the randomness source so tests can pass a seeded RNG and get
/// deterministic picks; production callers pass an entropy-seeded generator.
/// Returns `None` only for an empty pool, which validation rules out before
/// selection runs.
///
/// # Examples
///
/// ```
/// use warble_core::{Candidate, select};
///
/// let pool = vec![Candidate::new("only one")];
/// let choice = select::pick(&pool, &mut rand::thread_rng());
/// assert_eq!(choice.map(|c| c.as_str()), Some("only one"));
/// ```
pub fn pick<'a, R: Rng + ?Sized>(pool: &'a [Candidate], rng: &mut R) -> Option<&'a Candidate> {
    pool.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().map(|text| Candidate::new(*text)).collect()
    }

    #[test]
    fn test_pick_empty_pool_is_none() {
        assert!(pick(&[], &mut rand::thread_rng()).is_none());
    }

    #[test]
    fn test_pick_is_deterministic_under_seeded_rng() {
        let candidates = pool(&["a", "b", "c", "d", "e"]);
        let first = pick(&candidates, &mut StdRng::seed_from_u64(7)).cloned();
        let second = pick(&candidates, &mut StdRng::seed_from_u64(7)).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_stays_within_pool() {
        let candidates = pool(&["x", "y"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let choice = pick(&candidates, &mut rng).expect("non-empty pool");
            assert!(candidates.contains(choice));
        }
    }
}
