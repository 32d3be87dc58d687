//! Core types for the stg-fixtures generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the CSV exporter:
//!
//! - [`Dataset`] - Identity of each staging table (file name, display name)
//! - [`FixtureRecord`] - Column layout and CSV rendering of one record type
//! - [`Unit`], [`Employee`], [`MailRecord`], [`ServiceRequest`], [`InventoryItem`]
//! - [`FixtureConfig`] - Seed, reference date, per-dataset counts and date windows (YAML)
//! - [`RelativeOffset`] / [`RelativeWindow`] - Date windows relative to "now"
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator     (produces records from a seeded RNG)
//!    │
//!    └─── fixture-populate-csv  (writes records as CSV)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Dataset, FixtureConfig};
//!
//! let config = FixtureConfig::from_yaml("seed: 7\ncounts:\n  mail: 10\n").unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.counts.get(Dataset::Mail), 10);
//! assert_eq!(config.counts.get(Dataset::Units), 15);
//! ```

pub mod config;
pub mod offset;
pub mod records;

// Re-exports for convenience
pub use config::{
    ConfigError, FixtureConfig, FixtureCounts, FixtureWindows, ACQUISITION_WINDOW, HIRE_WINDOW,
    MAIL_WINDOW, REQUEST_WINDOW,
};
pub use offset::{RelativeOffset, RelativeWindow};
pub use records::{
    AssetCategory, AssetCondition, Dataset, Employee, EmploymentStatus, FixtureRecord,
    InventoryItem, JobTitle, MailRecord, MailStatus, RequestStatus, ServiceRequest, Unit,
    DATETIME_FORMAT, DATE_FORMAT, ROOT_UNIT_ID, UNIT_EMAIL_DOMAIN,
};
