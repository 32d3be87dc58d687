//! Lorem text generators.

use super::locale::LOREM_WORDS;
use super::pick;
use rand::Rng;

/// Generate a single lorem word.
pub fn word<R: Rng>(rng: &mut R) -> &'static str {
    *pick(rng, LOREM_WORDS)
}

/// Generate a sentence of about `nb_words` words.
///
/// The actual length varies between 60% and 140% of `nb_words` (at least one
/// word). The first word is capitalized and the sentence ends with a period.
pub fn sentence<R: Rng>(rng: &mut R, nb_words: usize) -> String {
    let count = vary_word_count(rng, nb_words);

    let mut sentence = String::new();
    for i in 0..count {
        let w = word(rng);
        if i == 0 {
            sentence.push_str(&capitalize(w));
        } else {
            sentence.push(' ');
            sentence.push_str(w);
        }
    }
    sentence.push('.');
    sentence
}

fn vary_word_count<R: Rng>(rng: &mut R, nb_words: usize) -> usize {
    let low = (nb_words * 6 / 10).max(1);
    let high = (nb_words * 14 / 10).max(low);
    rng.random_range(low..=high)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let s = sentence(&mut rng, 6);
            assert!(s.ends_with('.'));
            assert!(s.chars().next().unwrap().is_uppercase());

            let words = s.trim_end_matches('.').split(' ').count();
            assert!((3..=8).contains(&words), "unexpected length: {s}");
        }
    }

    #[test]
    fn test_sentence_minimum_one_word() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = sentence(&mut rng, 0);
        assert_eq!(s.trim_end_matches('.').split(' ').count(), 1);
    }

    #[test]
    fn test_word_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(LOREM_WORDS.contains(&word(&mut rng)));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("surat"), "Surat");
        assert_eq!(capitalize(""), "");
    }
}
