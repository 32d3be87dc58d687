//! Command-line interface for stg-fixtures
//!
//! # Usage Examples
//!
//! ```bash
//! # Write the five staging files into the current directory
//! stg-fixtures generate
//!
//! # Byte-identical output on every run
//! stg-fixtures generate --seed 19 --reference-date 2025-01-15 --output-dir staging
//!
//! # Validate a configuration file and print the plan
//! stg-fixtures generate --config fixtures.yaml --dry-run
//! ```
//!
//! Log verbosity follows `RUST_LOG`, e.g. `RUST_LOG=info`.

use clap::{Parser, Subcommand};
use stg_fixtures::{run_generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "stg-fixtures")]
#[command(about = "Generate fake staging CSV fixtures for the data pipeline")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate units, employees, mail, service requests and inventory CSV files
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let report = run_generate(&args)?;
            for file in &report.files {
                tracing::debug!(
                    "{} -> {} ({} rows, {} bytes, {:?})",
                    file.dataset,
                    file.path.display(),
                    file.rows,
                    file.bytes,
                    file.duration
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "stg-fixtures",
            "generate",
            "--seed",
            "7",
            "--reference-date",
            "2025-01-15",
            "--units",
            "12",
            "-o",
            "out",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Generate { args } = cli.command;
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.units, Some(12));
        assert_eq!(args.reference_date.unwrap().to_string(), "2025-01-15");
        assert_eq!(args.output.output_dir, std::path::PathBuf::from("out"));
        assert!(args.dry_run);
        assert!(!args.output.no_header);
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from(["stg-fixtures", "generate", "--reference-date", "15/01/2025"]);
        assert!(result.is_err());
    }
}
