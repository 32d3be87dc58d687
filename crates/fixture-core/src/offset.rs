//! Date offsets relative to a reference instant.
//!
//! Offsets are written as `today`/`now`, or as one or more signed terms such as
//! `-10y`, `-1M`, `+2w3d`. Units: `y` years (365.24 days), `M` months
//! (30.42 days), `w` weeks, `d` days, `h` hours, `m` minutes, `s` seconds.
//!
//! Offsets (de)serialize as these strings, so windows can be set in YAML:
//!
//! ```yaml
//! start: -10y
//! end: -1y
//! ```

use crate::config::ConfigError;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_DAY: i64 = 86_400;
/// 365.24 days.
const SECONDS_PER_YEAR: i64 = 31_556_736;
/// 30.42 days.
const SECONDS_PER_MONTH: i64 = 2_628_288;

/// Signed offset from the reference instant, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativeOffset {
    seconds: i64,
}

impl RelativeOffset {
    /// The reference instant itself.
    pub const ZERO: RelativeOffset = RelativeOffset { seconds: 0 };

    pub const fn seconds(seconds: i64) -> Self {
        Self { seconds }
    }

    pub const fn days(days: i64) -> Self {
        Self::seconds(days * SECONDS_PER_DAY)
    }

    pub const fn months(months: i64) -> Self {
        Self::seconds(months * SECONDS_PER_MONTH)
    }

    pub const fn years(years: i64) -> Self {
        Self::seconds(years * SECONDS_PER_YEAR)
    }

    /// Shift the reference instant by this offset.
    pub fn apply(&self, reference: NaiveDateTime) -> NaiveDateTime {
        reference + TimeDelta::seconds(self.seconds)
    }
}

impl FromStr for RelativeOffset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("today") || s.eq_ignore_ascii_case("now") {
            return Ok(Self::ZERO);
        }
        if s.is_empty() {
            return Err(ConfigError::InvalidOffset(s.to_string()));
        }

        let invalid = || ConfigError::InvalidOffset(s.to_string());
        let mut total: i64 = 0;
        let mut rest = s;

        while !rest.is_empty() {
            let (negative, unsigned) = match rest.as_bytes()[0] {
                b'-' => (true, &rest[1..]),
                b'+' => (false, &rest[1..]),
                _ => (false, rest),
            };

            let digits_len = unsigned
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(invalid)?;
            if digits_len == 0 {
                return Err(invalid());
            }
            let amount: i64 = unsigned[..digits_len].parse().map_err(|_| invalid())?;

            let unit = unsigned[digits_len..].chars().next().ok_or_else(invalid)?;
            let scale = match unit {
                'y' => SECONDS_PER_YEAR,
                'M' => SECONDS_PER_MONTH,
                'w' => 7 * SECONDS_PER_DAY,
                'd' => SECONDS_PER_DAY,
                'h' => 3_600,
                'm' => 60,
                's' => 1,
                _ => return Err(invalid()),
            };

            let term = amount.checked_mul(scale).ok_or_else(invalid)?;
            total = if negative {
                total.checked_sub(term)
            } else {
                total.checked_add(term)
            }
            .ok_or_else(invalid)?;

            rest = &unsigned[digits_len + unit.len_utf8()..];
        }

        Ok(Self::seconds(total))
    }
}

impl TryFrom<String> for RelativeOffset {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RelativeOffset> for String {
    fn from(offset: RelativeOffset) -> Self {
        offset.to_string()
    }
}

impl fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            f.write_str("now")
        } else {
            write!(f, "{:+}s", self.seconds)
        }
    }
}

/// Inclusive window between two offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelativeWindow {
    pub start: RelativeOffset,
    pub end: RelativeOffset,
}

impl RelativeWindow {
    pub const fn new(start: RelativeOffset, end: RelativeOffset) -> Self {
        Self { start, end }
    }

    /// Resolve the window to absolute instants. A reversed window collapses to its start.
    pub fn resolve(&self, reference: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.start.apply(reference);
        let end = self.end.apply(reference);
        (start, end.max(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("today".parse::<RelativeOffset>().unwrap(), RelativeOffset::ZERO);
        assert_eq!("now".parse::<RelativeOffset>().unwrap(), RelativeOffset::ZERO);
    }

    #[test]
    fn test_parse_single_terms() {
        assert_eq!(
            "-10y".parse::<RelativeOffset>().unwrap(),
            RelativeOffset::years(-10)
        );
        assert_eq!(
            "-1M".parse::<RelativeOffset>().unwrap(),
            RelativeOffset::months(-1)
        );
        assert_eq!(
            "+3d".parse::<RelativeOffset>().unwrap(),
            RelativeOffset::days(3)
        );
        assert_eq!(
            "-30m".parse::<RelativeOffset>().unwrap(),
            RelativeOffset::seconds(-1_800)
        );
    }

    #[test]
    fn test_parse_compound() {
        let offset: RelativeOffset = "-1w2d".parse().unwrap();
        assert_eq!(offset, RelativeOffset::days(-7 + 2));

        let offset: RelativeOffset = "-1w-2d".parse().unwrap();
        assert_eq!(offset, RelativeOffset::days(-9));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "-", "10", "-x", "-5q", "y"] {
            assert!(
                matches!(
                    input.parse::<RelativeOffset>(),
                    Err(ConfigError::InvalidOffset(_))
                ),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_year_is_365_24_days() {
        let shifted = RelativeOffset::years(-1).apply(reference());
        let expected = reference() - TimeDelta::seconds(365 * 86_400 + 20_736);
        assert_eq!(shifted, expected);
    }

    #[test]
    fn test_window_resolve() {
        let window = RelativeWindow::new("-2y".parse().unwrap(), "today".parse().unwrap());
        let (start, end) = window.resolve(reference());
        assert!(start < end);
        assert_eq!(end, reference());

        let reversed = RelativeWindow::new(RelativeOffset::ZERO, RelativeOffset::days(-1));
        let (start, end) = reversed.resolve(reference());
        assert_eq!(start, end);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for offset in [
            RelativeOffset::ZERO,
            RelativeOffset::years(-10),
            RelativeOffset::months(-1),
            RelativeOffset::days(3),
        ] {
            assert_eq!(offset.to_string().parse::<RelativeOffset>().unwrap(), offset);
        }
        assert_eq!(RelativeOffset::days(-1).to_string(), "-86400s");
    }

    #[test]
    fn test_window_from_yaml() {
        let window: RelativeWindow = serde_yaml::from_str("start: -5y
end: -1M
").unwrap();
        assert_eq!(
            window,
            RelativeWindow::new(RelativeOffset::years(-5), RelativeOffset::months(-1))
        );

        let result: Result<RelativeWindow, _> = serde_yaml::from_str("start: -5q
end: now
");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid relative offset"), "{message}");
    }
}
