//! Individual value generators.
//!
//! Every generator takes the caller's RNG so that a whole run draws from a
//! single seeded stream.

pub mod locale;
pub mod numeric;
pub mod pattern;
pub mod person;
pub mod text;
pub mod timestamp;

use rand::Rng;

/// Pick one element of a non-empty static pool uniformly.
///
/// Panics on an empty pool; only use with the constant pools of this crate.
pub fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

/// Pick one element uniformly, or `None` if the pool is empty.
pub fn try_pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> Option<&'a T> {
    if pool.is_empty() {
        None
    } else {
        Some(pick(rng, pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_covers_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["a", "b", "c"];
        let mut seen = [false; 3];

        for _ in 0..200 {
            let value = pick(&mut rng, &pool);
            let idx = pool.iter().position(|p| p == value).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_try_pick_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: [u32; 0] = [];
        assert!(try_pick(&mut rng, &pool).is_none());
    }
}
