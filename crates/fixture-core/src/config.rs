//! Run configuration: seed, reference date and per-dataset record counts.
//!
//! The configuration can be loaded from a YAML file; every key is optional
//! and falls back to the defaults below.
//!
//! ```yaml
//! seed: 19
//! reference_date: 2025-01-15
//! counts:
//!   units: 15
//!   employees: 50
//!   mail: 2000
//!   service_requests: 1000
//!   inventory: 500
//! windows:
//!   hire: { start: -10y, end: -1y }
//!   mail: { start: -2y, end: today }
//!   service_requests: { start: -1y, end: now }
//!   acquisition: { start: -5y, end: -1M }
//! ```

use crate::offset::{RelativeOffset, RelativeWindow};
use crate::records::Dataset;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 19;

/// Number of hand-authored unit rows; the unit count can never be lower.
pub const MIN_UNIT_COUNT: u64 = 10;

/// Hire dates: 10 years ago to 1 year ago.
pub const HIRE_WINDOW: RelativeWindow =
    RelativeWindow::new(RelativeOffset::years(-10), RelativeOffset::years(-1));

/// Mail received dates: 2 years ago to today.
pub const MAIL_WINDOW: RelativeWindow =
    RelativeWindow::new(RelativeOffset::years(-2), RelativeOffset::ZERO);

/// Service request submissions: 1 year ago to now.
pub const REQUEST_WINDOW: RelativeWindow =
    RelativeWindow::new(RelativeOffset::years(-1), RelativeOffset::ZERO);

/// Inventory acquisition dates: 5 years ago to 1 month ago.
pub const ACQUISITION_WINDOW: RelativeWindow =
    RelativeWindow::new(RelativeOffset::years(-5), RelativeOffset::months(-1));

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Malformed relative date offset
    #[error("Invalid relative offset: '{0}'")]
    InvalidOffset(String),

    /// Unit count below the number of hand-authored units
    #[error("Unit count {requested} is below the {minimum} hand-authored units")]
    InsufficientUnits { requested: u64, minimum: u64 },

    /// Service requests need at least one employee to sample requester names from
    #[error("{service_requests} service requests requested but the employee count is 0")]
    EmptyEmployeePool { service_requests: u64 },

    /// Sum of all counts does not fit in a u64
    #[error("Total record count overflows: {counts:?}")]
    CountOverflow { counts: FixtureCounts },
}

/// Target record count of each dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureCounts {
    pub units: u64,
    pub employees: u64,
    pub mail: u64,
    pub service_requests: u64,
    pub inventory: u64,
}

impl Default for FixtureCounts {
    fn default() -> Self {
        Self {
            units: 15,
            employees: 50,
            mail: 2000,
            service_requests: 1000,
            inventory: 500,
        }
    }
}

impl FixtureCounts {
    /// Target count of the given dataset.
    pub fn get(&self, dataset: Dataset) -> u64 {
        match dataset {
            Dataset::Units => self.units,
            Dataset::Employees => self.employees,
            Dataset::Mail => self.mail,
            Dataset::ServiceRequests => self.service_requests,
            Dataset::Inventory => self.inventory,
        }
    }

    /// Total number of records across all datasets, or `None` on overflow.
    pub fn checked_total(&self) -> Option<u64> {
        Dataset::ALL
            .iter()
            .try_fold(0u64, |acc, d| acc.checked_add(self.get(*d)))
    }

    /// Total number of records across all datasets, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.checked_total().unwrap_or(u64::MAX)
    }
}

/// Date window of each dataset's date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureWindows {
    /// `tanggal_masuk` of employees
    pub hire: RelativeWindow,
    /// `tanggal_terima` of mail
    pub mail: RelativeWindow,
    /// `tanggal_pengajuan` of service requests
    pub service_requests: RelativeWindow,
    /// `tanggal_pengadaan` of inventory
    pub acquisition: RelativeWindow,
}

impl Default for FixtureWindows {
    fn default() -> Self {
        Self {
            hire: HIRE_WINDOW,
            mail: MAIL_WINDOW,
            service_requests: REQUEST_WINDOW,
            acquisition: ACQUISITION_WINDOW,
        }
    }
}

/// Full run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    /// Random seed; same seed and reference date = byte-identical output.
    pub seed: u64,

    /// Pin "now" to midnight of this date. `None` uses today's date.
    pub reference_date: Option<NaiveDate>,

    /// Record count per dataset.
    pub counts: FixtureCounts,

    /// Relative date window per dataset.
    pub windows: FixtureWindows,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            reference_date: None,
            counts: FixtureCounts::default(),
            windows: FixtureWindows::default(),
        }
    }
}

impl FixtureConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Check the counts can be generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counts.units < MIN_UNIT_COUNT {
            return Err(ConfigError::InsufficientUnits {
                requested: self.counts.units,
                minimum: MIN_UNIT_COUNT,
            });
        }
        if self.counts.employees == 0 && self.counts.service_requests > 0 {
            return Err(ConfigError::EmptyEmployeePool {
                service_requests: self.counts.service_requests,
            });
        }
        if self.counts.checked_total().is_none() {
            return Err(ConfigError::CountOverflow {
                counts: self.counts,
            });
        }
        Ok(())
    }

    /// Reference instant for relative date windows.
    ///
    /// Midnight of `reference_date` when set, otherwise midnight of `today`,
    /// so reruns on the same day produce the same output.
    pub fn reference_instant(&self, today: NaiveDate) -> NaiveDateTime {
        self.reference_date
            .unwrap_or(today)
            .and_time(NaiveTime::MIN)
    }
}
