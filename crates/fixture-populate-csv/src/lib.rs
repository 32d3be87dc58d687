//! CSV file populator for the staging fixtures.
//!
//! This crate writes generated records to CSV files, one file per dataset,
//! named after [`fixture_core::Dataset::file_name`].
//!
//! # Example
//!
//! ```ignore
//! use fixture_populate_csv::CsvPopulator;
//!
//! let populator = CsvPopulator::new("out");
//! let metrics = populator.populate(&set.units)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::CsvOutputArgs;
pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
