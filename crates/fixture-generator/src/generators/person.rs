//! Person names, e-mail addresses and phone numbers.

use super::locale::{
    FEMALE_FIRST_NAMES, FREE_EMAIL_DOMAINS, LAST_NAMES, MALE_FIRST_NAMES, NAME_PREFIXES,
    NAME_SUFFIXES, PHONE_FORMATS,
};
use super::pattern::numerify;
use super::pick;
use rand::Rng;

fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    if rng.random_bool(0.5) {
        *pick(rng, MALE_FIRST_NAMES)
    } else {
        *pick(rng, FEMALE_FIRST_NAMES)
    }
}

/// Generate a full person name.
///
/// Mostly `First Last`; occasionally with a title prefix, a degree suffix, or
/// two given names.
pub fn name<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..10) {
        0 => format!(
            "{} {} {}",
            pick(rng, NAME_PREFIXES),
            first_name(rng),
            pick(rng, LAST_NAMES)
        ),
        1 => format!(
            "{} {}, {}",
            first_name(rng),
            pick(rng, LAST_NAMES),
            pick(rng, NAME_SUFFIXES)
        ),
        2 => format!("{} {}", first_name(rng), first_name(rng)),
        _ => format!("{} {}", first_name(rng), pick(rng, LAST_NAMES)),
    }
}

/// Generate an e-mail address on a free mail domain.
pub fn email<R: Rng>(rng: &mut R) -> String {
    let first = first_name(rng).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();

    let local = match rng.random_range(0..4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{last}"),
        2 => format!("{last}_{first}"),
        _ => format!("{first}{}", numerify("##", rng)),
    };

    format!("{local}@{}", pick(rng, FREE_EMAIL_DOMAINS))
}

/// Generate an Indonesian phone number.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let format = pick(rng, PHONE_FORMATS);
    numerify(format, rng)
}
