//! Date and timestamp generators over windows relative to a reference instant.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use fixture_core::RelativeWindow;
use rand::Rng;

/// Generate a random date in the window, uniform over whole days (inclusive).
pub fn date_between<R: Rng>(
    rng: &mut R,
    window: &RelativeWindow,
    reference: NaiveDateTime,
) -> NaiveDate {
    let (start, end) = window.resolve(reference);
    let (start, end) = (start.date(), end.date());
    let span_days = (end - start).num_days();
    start + TimeDelta::days(rng.random_range(0..=span_days))
}

/// Generate a random timestamp in the window, uniform over whole seconds (inclusive).
pub fn datetime_between<R: Rng>(
    rng: &mut R,
    window: &RelativeWindow,
    reference: NaiveDateTime,
) -> NaiveDateTime {
    let (start, end) = window.resolve(reference);
    let start = start.with_nanosecond(0).unwrap_or(start);
    let span_secs = (end - start).num_seconds().max(0);
    start + TimeDelta::seconds(rng.random_range(0..=span_secs))
}

/// Shift `from` forward by a random whole number of hours in `min_hours..=max_hours`.
pub fn hours_after<R: Rng>(
    rng: &mut R,
    from: NaiveDateTime,
    min_hours: i64,
    max_hours: i64,
) -> NaiveDateTime {
    from + TimeDelta::hours(rng.random_range(min_hours..=max_hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use fixture_core::RelativeOffset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_date_between_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = RelativeWindow::new(RelativeOffset::years(-10), RelativeOffset::years(-1));
        let (start, end) = window.resolve(reference());

        for _ in 0..500 {
            let date = date_between(&mut rng, &window, reference());
            assert!(date >= start.date() && date <= end.date());
        }
    }

    #[test]
    fn test_date_between_collapsed_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = RelativeWindow::new(RelativeOffset::ZERO, RelativeOffset::ZERO);

        let date = date_between(&mut rng, &window, reference());
        assert_eq!(date, reference().date());
    }

    #[test]
    fn test_datetime_between_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = RelativeWindow::new(RelativeOffset::years(-1), RelativeOffset::ZERO);

        for _ in 0..500 {
            let ts = datetime_between(&mut rng, &window, reference());
            assert!(ts <= reference());
            assert!(ts.year() >= 2024);
            assert_eq!(ts.nanosecond(), 0);
        }
    }

    #[test]
    fn test_hours_after() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let later = hours_after(&mut rng, reference(), 2, 72);
            let diff = later - reference();
            assert!(diff >= TimeDelta::hours(2) && diff <= TimeDelta::hours(72));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let window = RelativeWindow::new(RelativeOffset::years(-2), RelativeOffset::ZERO);

        assert_eq!(
            date_between(&mut rng1, &window, reference()),
            date_between(&mut rng2, &window, reference())
        );
    }
}
