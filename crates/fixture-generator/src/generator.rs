//! Main fixture generator producing the five staging datasets.

use crate::generators::pattern::numerify;
use crate::generators::{numeric, person, pick, text, timestamp, try_pick};
use crate::units::build_units;
use chrono::{Datelike, NaiveDateTime};
use fixture_core::{
    AssetCategory, AssetCondition, Dataset, Employee, EmploymentStatus, FixtureCounts,
    FixtureWindows, InventoryItem, JobTitle, MailRecord, MailStatus, RequestStatus,
    ServiceRequest, Unit,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// NIP layout: birth-century prefix, eleven digits, non-zero check digit.
const NIP_PATTERN: &str = "19##########%";

/// Completion delay of a service request, in whole hours.
pub const COMPLETION_HOURS: (i64, i64) = (2, 72);

/// Satisfaction rating bounds.
pub const RATING_RANGE: (f64, f64) = (3.0, 5.0);

/// Acquisition value bounds, in rupiah.
pub const ACQUISITION_VALUE_RANGE: (u64, u64) = (100_000, 15_000_000);

/// First mail identifier number; `id_surat` is `SRT-{MAIL_ID_BASE + i}`.
const MAIL_ID_BASE: u64 = 2023;

/// Nominal word count of a mail subject.
const SUBJECT_WORDS: usize = 6;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A dataset samples from a pool that was generated empty
    #[error("Cannot sample {dataset}: the {pool} pool is empty")]
    EmptyPool {
        dataset: Dataset,
        pool: &'static str,
    },

    /// Unit count below the number of hand-authored units
    #[error("Unit count {requested} is below the 10 hand-authored units")]
    InsufficientUnits { requested: u64 },

    /// Count does not fit the dataset's identifier type
    #[error("Count {count} is too large for {dataset}")]
    CountOverflow { dataset: &'static str, count: u64 },
}

/// All five generated datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub units: Vec<Unit>,
    pub employees: Vec<Employee>,
    pub mail: Vec<MailRecord>,
    pub service_requests: Vec<ServiceRequest>,
    pub inventory: Vec<InventoryItem>,
}

impl FixtureSet {
    /// Number of records generated for the given dataset.
    pub fn len_of(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::Units => self.units.len(),
            Dataset::Employees => self.employees.len(),
            Dataset::Mail => self.mail.len(),
            Dataset::ServiceRequests => self.service_requests.len(),
            Dataset::Inventory => self.inventory.len(),
        }
    }
}

/// Data generator that produces deterministic staging records.
///
/// One seeded RNG is shared by all datasets, so the output of a dataset
/// depends on the counts of the datasets generated before it.
pub struct FixtureGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Instant all relative date windows resolve against
    reference: NaiveDateTime,
    /// Date window per dataset
    windows: FixtureWindows,
}

impl FixtureGenerator {
    /// Create a new generator with the given seed and reference instant,
    /// using the default date windows.
    pub fn new(seed: u64, reference: NaiveDateTime) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reference,
            windows: FixtureWindows::default(),
        }
    }

    /// Replace the date windows.
    pub fn with_windows(mut self, windows: FixtureWindows) -> Self {
        self.windows = windows;
        self
    }

    /// Generate every dataset in order: units, employees, mail, service
    /// requests, inventory.
    pub fn generate_all(&mut self, counts: &FixtureCounts) -> Result<FixtureSet, GeneratorError> {
        let units = self.generate_units(counts.units)?;
        let employees = self.generate_employees(counts.employees, &units)?;
        let mail = self.generate_mail(counts.mail, &units)?;
        let service_requests = self.generate_service_requests(counts.service_requests, &employees)?;
        let inventory = self.generate_inventory(counts.inventory, &units)?;

        Ok(FixtureSet {
            units,
            employees,
            mail,
            service_requests,
            inventory,
        })
    }

    /// Generate `count` organizational units. Consumes no randomness.
    pub fn generate_units(&mut self, count: u64) -> Result<Vec<Unit>, GeneratorError> {
        let units = build_units(count)?;
        debug!("Generated {} units", units.len());
        Ok(units)
    }

    /// Generate `count` employees, each assigned to a random unit.
    pub fn generate_employees(
        &mut self,
        count: u64,
        units: &[Unit],
    ) -> Result<Vec<Employee>, GeneratorError> {
        let mut employees = Vec::with_capacity(capacity(count));

        for _ in 0..count {
            let nip = numerify(NIP_PATTERN, &mut self.rng);
            let unit = try_pick(&mut self.rng, units).ok_or(GeneratorError::EmptyPool {
                dataset: Dataset::Employees,
                pool: "unit",
            })?;

            employees.push(Employee {
                nip,
                name: person::name(&mut self.rng),
                job_title: *pick(&mut self.rng, &JobTitle::ALL),
                unit_id: unit.id,
                hire_date: timestamp::date_between(
                    &mut self.rng,
                    &self.windows.hire,
                    self.reference,
                ),
                status: *pick(&mut self.rng, &EmploymentStatus::ALL),
                email: person::email(&mut self.rng),
                phone: person::phone_number(&mut self.rng),
            });
        }

        debug!("Generated {} employees", employees.len());
        Ok(employees)
    }

    /// Generate `count` incoming mail records sent by random units.
    pub fn generate_mail(
        &mut self,
        count: u64,
        units: &[Unit],
    ) -> Result<Vec<MailRecord>, GeneratorError> {
        let mut mail = Vec::with_capacity(capacity(count));

        for i in 0..count {
            let received_date =
                timestamp::date_between(&mut self.rng, &self.windows.mail, self.reference);
            let sender = try_pick(&mut self.rng, units).ok_or(GeneratorError::EmptyPool {
                dataset: Dataset::Mail,
                pool: "unit",
            })?;

            mail.push(MailRecord {
                id: format!("SRT-{}", MAIL_ID_BASE + i),
                document_number: format!("{}/ITERA/BAU/{}", i + 1, received_date.year()),
                received_date,
                sender: sender.name.clone(),
                subject: text::sentence(&mut self.rng, SUBJECT_WORDS),
                category_id: numeric::generate_int_range(&mut self.rng, 1, 5),
                status: *pick(&mut self.rng, &MailStatus::ALL),
                raw_data: "{}".to_string(),
            });
        }

        debug!("Generated {} mail records", mail.len());
        Ok(mail)
    }

    /// Generate `count` completed service requests.
    ///
    /// Requester names are sampled from `employees` as generated; they are
    /// not keyed to the employee table.
    pub fn generate_service_requests(
        &mut self,
        count: u64,
        employees: &[Employee],
    ) -> Result<Vec<ServiceRequest>, GeneratorError> {
        let mut requests = Vec::with_capacity(capacity(count));
        let (min_hours, max_hours) = COMPLETION_HOURS;
        let (min_rating, max_rating) = RATING_RANGE;

        for i in 0..count {
            let submitted_at =
                timestamp::datetime_between(
                &mut self.rng,
                &self.windows.service_requests,
                self.reference,
            );
            let completed_at =
                timestamp::hours_after(&mut self.rng, submitted_at, min_hours, max_hours);
            let requester = try_pick(&mut self.rng, employees).ok_or(GeneratorError::EmptyPool {
                dataset: Dataset::ServiceRequests,
                pool: "employee",
            })?;

            requests.push(ServiceRequest {
                id: format!("REQ-{i}"),
                ticket_number: format!("TKT-{}-{i:04}", submitted_at.format("%Y%m")),
                requester_name: requester.name.clone(),
                service_category_id: numeric::generate_int_range(&mut self.rng, 1, 5),
                submitted_at,
                completed_at,
                status: RequestStatus::Completed,
                rating: numeric::generate_rounded_float(&mut self.rng, min_rating, max_rating, 2),
            });
        }

        debug!("Generated {} service requests", requests.len());
        Ok(requests)
    }

    /// Generate `count` inventory items owned by random units.
    pub fn generate_inventory(
        &mut self,
        count: u64,
        units: &[Unit],
    ) -> Result<Vec<InventoryItem>, GeneratorError> {
        let mut items = Vec::with_capacity(capacity(count));
        let (min_value, max_value) = ACQUISITION_VALUE_RANGE;

        for i in 0..count {
            let category = *pick(&mut self.rng, &AssetCategory::ALL);
            let acquired_on =
                timestamp::date_between(
                &mut self.rng,
                &self.windows.acquisition,
                self.reference,
            );
            let name = format!("{} - {}", category.as_str(), text::word(&mut self.rng));
            let acquisition_value =
                numeric::generate_int_range(&mut self.rng, min_value, max_value);
            let condition = *pick(&mut self.rng, &AssetCondition::ALL);
            let location_id = numeric::generate_int_range(&mut self.rng, 1, 10);
            let unit = try_pick(&mut self.rng, units).ok_or(GeneratorError::EmptyPool {
                dataset: Dataset::Inventory,
                pool: "unit",
            })?;

            items.push(InventoryItem {
                id: format!("INV-{i}"),
                item_code: format!("BRG-{}-{i:03}", category.code_prefix()),
                name,
                category,
                acquired_on,
                acquisition_value,
                condition,
                location_id,
                unit_id: unit.id,
            });
        }

        debug!("Generated {} inventory items", items.len());
        Ok(items)
    }
}

/// Pre-allocation hint; counts beyond the address space just grow on demand.
fn capacity(count: u64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
