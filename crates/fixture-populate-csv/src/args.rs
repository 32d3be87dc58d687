//! CLI argument definitions for CSV output.

use clap::Args;
use std::path::PathBuf;

/// CSV output arguments.
#[derive(Args, Clone, Debug)]
pub struct CsvOutputArgs {
    /// Output directory for CSV files (one file per dataset)
    #[arg(long, short = 'o', default_value = ".", env = "STG_FIXTURES_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Omit the header row from every file
    #[arg(long)]
    pub no_header: bool,
}

impl Default for CsvOutputArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            no_header: false,
        }
    }
}
