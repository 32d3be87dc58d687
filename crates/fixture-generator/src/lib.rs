//! Record generator for the stg-fixtures staging data.
//!
//! This crate provides the [`FixtureGenerator`] which produces the five
//! staging datasets from a seeded RNG. Given the same seed and reference
//! instant, the generator produces the same records on every run.
//!
//! # Architecture
//!
//! ```text
//! FixtureConfig (seed, counts)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ FixtureGenerator │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - reference     │
//! └────────┬─────────┘
//!          │  units → employees → mail → service requests → inventory
//!          ▼
//!    FixtureSet { units, employees, mail, service_requests, inventory }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fixture_core::FixtureCounts;
//! use fixture_generator::FixtureGenerator;
//!
//! let reference = NaiveDate::from_ymd_opt(2025, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let mut generator = FixtureGenerator::new(19, reference);
//! let set = generator.generate_all(&FixtureCounts::default()).unwrap();
//! assert_eq!(set.units.len(), 15);
//! assert_eq!(set.units[0].code, "REK");
//! ```
//!
//! # Value generators
//!
//! - `person` - Indonesian person names, e-mail addresses, phone numbers
//! - `pattern` - Digit placeholders (`#`, `%`, `!`, `@`)
//! - `text` - Lorem sentences and words
//! - `timestamp` - Dates and timestamps within a relative window
//! - `numeric` - Integer ranges and rounded float ranges

pub mod generator;
pub mod generators;
pub mod units;

// Re-exports for convenience
pub use generator::{FixtureGenerator, FixtureSet, GeneratorError};
pub use units::{build_units, HAND_AUTHORED_UNITS};
