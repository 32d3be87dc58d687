//! Digit placeholder patterns.
//!
//! Supports placeholders:
//! - `#` - any digit 0-9
//! - `%` - non-zero digit 1-9
//! - `!` - any digit, or nothing (50/50)
//! - `@` - non-zero digit, or nothing (50/50)
//!
//! All other characters are copied verbatim.

use rand::Rng;

/// Replace every digit placeholder in `pattern` with a random digit.
pub fn numerify<R: Rng>(pattern: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(pattern.len());

    for c in pattern.chars() {
        match c {
            '#' => result.push(random_digit(rng, 0)),
            '%' => result.push(random_digit(rng, 1)),
            '!' => {
                if rng.random_bool(0.5) {
                    result.push(random_digit(rng, 0));
                }
            }
            '@' => {
                if rng.random_bool(0.5) {
                    result.push(random_digit(rng, 1));
                }
            }
            other => result.push(other),
        }
    }

    result
}

fn random_digit<R: Rng>(rng: &mut R, min: u8) -> char {
    char::from(b'0' + rng.random_range(min..=9))
}
