//! Numeric value generators.

use rand::distr::uniform::SampleUniform;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng,
{
    rng.random_range(min..=max)
}

/// Generate a random float in the given range (inclusive), rounded to `decimals` places.
pub fn generate_rounded_float<R: Rng>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    let value = rng.random_range(min..=max);
    round_to(value, decimals).clamp(min, max)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v: u64 = generate_int_range(&mut rng, 100_000, 15_000_000);
            assert!((100_000..=15_000_000).contains(&v));
        }
    }

    #[test]
    fn test_generate_rounded_float() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = generate_rounded_float(&mut rng, 3.0, 5.0, 2);
            assert!((3.0..=5.0).contains(&v));
            let cents = v * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.567, 2), 4.57);
        assert_eq!(round_to(3.001, 2), 3.0);
        assert_eq!(round_to(4.5, 0), 5.0);
    }
}
