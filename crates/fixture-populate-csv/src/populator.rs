//! CSV populator for the staging datasets.

use crate::error::CsvPopulatorError;
use csv::Writer;
use fixture_core::FixtureRecord;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written (excluding the header).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that writes one file per dataset into an output directory.
pub struct CsvPopulator {
    output_dir: PathBuf,
    include_header: bool,
}

impl CsvPopulator {
    /// Create a new CSV populator writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Path of the file a record type is written to.
    pub fn output_path<R: FixtureRecord>(&self) -> PathBuf {
        self.output_dir.join(R::DATASET.file_name())
    }

    /// Write `records` to the dataset's file in the output directory.
    pub fn populate<R: FixtureRecord>(
        &self,
        records: &[R],
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let path = self.output_path::<R>();
        self.populate_to(&path, records)
    }

    /// Write `records` to an explicit path, replacing any existing file.
    pub fn populate_to<R: FixtureRecord, P: AsRef<Path>>(
        &self,
        output_path: P,
        records: &[R],
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} rows for dataset '{}'",
            output_path.display(),
            records.len(),
            R::DATASET
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(R::COLUMNS)?;
        }

        for record in records {
            writer.write_record(record.to_csv_record())?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
