//! Generate command handler.

use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use fixture_core::{Dataset, FixtureConfig, FixtureRecord, FixtureWindows};
use fixture_generator::FixtureGenerator;
use fixture_populate_csv::CsvPopulator;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::GenerateArgs;

/// Resolved plan of a run, printed as JSON in dry-run mode.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationPlan {
    pub seed: u64,
    pub reference: NaiveDateTime,
    pub output_dir: PathBuf,
    pub include_header: bool,
    pub windows: FixtureWindows,
    pub datasets: Vec<PlannedDataset>,
}

/// One dataset of the plan.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlannedDataset {
    pub dataset: Dataset,
    pub file: PathBuf,
    pub rows: u64,
}

/// A file written by the run.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub dataset: Dataset,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
    pub duration: Duration,
}

/// Outcome of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub plan: GenerationPlan,
    /// Empty in dry-run mode.
    pub files: Vec<WrittenFile>,
}

/// Build the run configuration: file (or defaults), then CLI overrides, then validation.
pub fn resolve_config(args: &GenerateArgs) -> anyhow::Result<FixtureConfig> {
    let mut config = match &args.config {
        Some(path) => FixtureConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => FixtureConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(date) = args.reference_date {
        config.reference_date = Some(date);
    }

    let counts = &mut config.counts;
    let overrides = [
        (&mut counts.units, args.units),
        (&mut counts.employees, args.employees),
        (&mut counts.mail, args.mail),
        (&mut counts.service_requests, args.service_requests),
        (&mut counts.inventory, args.inventory),
    ];
    for (count, value) in overrides {
        if let Some(value) = value {
            *count = value;
        }
    }

    config.validate().context("Invalid fixture configuration")?;
    Ok(config)
}

/// Run the generate command: resolve configuration, generate every dataset,
/// and export each to its CSV file.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateReport> {
    let config = resolve_config(args)?;
    let reference = config.reference_instant(Utc::now().date_naive());
    tracing::debug!("Resolved configuration: {:?}", config);

    let output_dir = args.output.output_dir.clone();
    let populator = CsvPopulator::new(&output_dir).with_header(!args.output.no_header);

    let plan = GenerationPlan {
        seed: config.seed,
        reference,
        output_dir: output_dir.clone(),
        include_header: !args.output.no_header,
        windows: config.windows,
        datasets: Dataset::ALL
            .iter()
            .map(|dataset| PlannedDataset {
                dataset: *dataset,
                file: output_dir.join(dataset.file_name()),
                rows: config.counts.get(*dataset),
            })
            .collect(),
    };

    if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would generate {} records (seed={}, reference={})",
            config.counts.total(),
            config.seed,
            reference
        );
        for planned in &plan.datasets {
            tracing::info!(
                "[DRY-RUN] {}: {} rows -> {}",
                planned.dataset,
                planned.rows,
                planned.file.display()
            );
        }
        println!("{}", serde_json::to_string(&plan)?);
        return Ok(GenerateReport {
            plan,
            files: Vec::new(),
        });
    }

    tracing::info!(
        "Generating {} records (seed={}, reference={})",
        config.counts.total(),
        config.seed,
        reference
    );

    let mut generator = FixtureGenerator::new(config.seed, reference).with_windows(config.windows);
    let set = generator
        .generate_all(&config.counts)
        .context("Failed to generate fixture records")?;

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {output_dir:?}"))?;

    let files = vec![
        export(&populator, &set.units)?,
        export(&populator, &set.employees)?,
        export(&populator, &set.mail)?,
        export(&populator, &set.service_requests)?,
        export(&populator, &set.inventory)?,
    ];

    let total_rows: u64 = files.iter().map(|f| f.rows).sum();
    let total_bytes: u64 = files.iter().map(|f| f.bytes).sum();
    tracing::info!(
        "Fixture generation complete: {} files, {} rows, {} bytes in {}",
        files.len(),
        total_rows,
        total_bytes,
        output_dir.display()
    );

    Ok(GenerateReport { plan, files })
}

fn export<R: FixtureRecord>(
    populator: &CsvPopulator,
    records: &[R],
) -> anyhow::Result<WrittenFile> {
    let path = populator.output_path::<R>();
    let metrics = populator
        .populate(records)
        .with_context(|| format!("Failed to write {} to {}", R::DATASET, path.display()))?;

    tracing::info!(
        "Exported {}: {} rows in {:?}",
        R::DATASET,
        metrics.rows_written,
        metrics.total_duration
    );

    Ok(WrittenFile {
        dataset: R::DATASET,
        path,
        rows: metrics.rows_written,
        bytes: metrics.file_size_bytes,
        duration: metrics.total_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&GenerateArgs::default()).unwrap();
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: 5\ncounts:\n  units: 11\n  mail: 7").unwrap();

        let args = GenerateArgs {
            config: Some(file.path().to_path_buf()),
            mail: Some(3),
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.seed, 5);
        assert_eq!(config.counts.units, 11);
        assert_eq!(config.counts.mail, 3);
        assert_eq!(config.counts.employees, 50);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2025, 1, 15));
    }

    #[test]
    fn test_invalid_counts_rejected() {
        let args = GenerateArgs {
            units: Some(4),
            ..Default::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("hand-authored"));
    }

    #[test]
    fn test_count_overflow_rejected() {
        let args = GenerateArgs {
            mail: Some(u64::MAX),
            inventory: Some(1),
            dry_run: true,
            ..Default::default()
        };
        let err = run_generate(&args).unwrap_err();
        assert!(format!("{err:#}").contains("overflows"));
    }

    #[test]
    fn test_missing_config_file() {
        let args = GenerateArgs {
            config: Some(PathBuf::from("/nonexistent/fixtures.yaml")),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = GenerateArgs {
            dry_run: true,
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Default::default()
        };
        args.output.output_dir = temp_dir.path().join("out");

        let report = run_generate(&args).unwrap();

        assert!(report.files.is_empty());
        assert_eq!(report.plan.datasets.len(), 5);
        assert_eq!(report.plan.datasets[2].rows, 2000);
        assert_eq!(report.plan.windows, FixtureWindows::default());
        assert_eq!(
            serde_json::to_value(&report.plan).unwrap()["windows"]["hire"]["end"],
            "-31556736s"
        );
        assert!(!args.output.output_dir.exists());
    }
}
