//! stg-fixtures library
//!
//! Generates fake staging fixtures for the downstream data pipeline: five
//! independent CSV datasets (organizational units, employees, incoming mail,
//! service requests, inventory) produced from a fixed random seed.
//!
//! # Crates
//!
//! - `fixture_core` - Record types, dataset identities, configuration
//! - `fixture_generator` - Seeded record generator
//! - `fixture_populate_csv` - CSV export
//!
//! # CLI Usage
//!
//! ```bash
//! # Default run: seed 19, 15/50/2000/1000/500 records, current directory
//! stg-fixtures generate
//!
//! # Reproducible across days, custom output directory
//! stg-fixtures generate --reference-date 2025-01-15 -o staging/
//!
//! # Counts from a YAML file, one override on the command line
//! stg-fixtures generate --config fixtures.yaml --mail 500
//! ```

use chrono::NaiveDate;
use clap::Args;
use fixture_populate_csv::CsvOutputArgs;
use std::path::PathBuf;

pub mod generate;

pub use generate::{resolve_config, run_generate, GenerateReport, GenerationPlan, WrittenFile};

/// Options of the `generate` command.
///
/// Every count and the seed override the value from `--config` (or the
/// built-in default when no file is given).
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Path to a YAML run configuration (seed, reference_date, counts)
    #[arg(long, short = 'c', value_name = "PATH", env = "STG_FIXTURES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pin "now" to midnight of this date (YYYY-MM-DD) for reproducible date windows
    #[arg(long, value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Number of organizational units (at least 10)
    #[arg(long)]
    pub units: Option<u64>,

    /// Number of employees
    #[arg(long)]
    pub employees: Option<u64>,

    /// Number of incoming mail records
    #[arg(long)]
    pub mail: Option<u64>,

    /// Number of service requests
    #[arg(long)]
    pub service_requests: Option<u64>,

    /// Number of inventory items
    #[arg(long)]
    pub inventory: Option<u64>,

    /// Dry-run mode: validate configuration and print the plan without writing files
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub output: CsvOutputArgs,
}
