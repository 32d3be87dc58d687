//! Record types for the five staging datasets.
//!
//! Column names and file names are the staging contract of the downstream
//! pipeline and are written verbatim.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Date column format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp column format.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Every unit reports to the root unit (Rektorat).
pub const ROOT_UNIT_ID: u32 = 1;

/// Domain appended to the lower-cased unit code to build the unit e-mail.
pub const UNIT_EMAIL_DOMAIN: &str = "itera.ac.id";

// ============================================================================
// Dataset identity
// ============================================================================

/// One of the five staging datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Units,
    Employees,
    Mail,
    ServiceRequests,
    Inventory,
}

impl Dataset {
    /// All datasets in generation order.
    pub const ALL: [Dataset; 5] = [
        Dataset::Units,
        Dataset::Employees,
        Dataset::Mail,
        Dataset::ServiceRequests,
        Dataset::Inventory,
    ];

    /// Output file name of this dataset.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Units => "stg_unit_kerja.csv",
            Dataset::Employees => "stg_simpeg.csv",
            Dataset::Mail => "stg_simaster_surat.csv",
            Dataset::ServiceRequests => "stg_layanan.csv",
            Dataset::Inventory => "stg_inventaris.csv",
        }
    }

    /// Short name used in logs and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Units => "units",
            Dataset::Employees => "employees",
            Dataset::Mail => "mail",
            Dataset::ServiceRequests => "service_requests",
            Dataset::Inventory => "inventory",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record type that can be exported as one row of a dataset file.
pub trait FixtureRecord {
    /// Dataset this record belongs to.
    const DATASET: Dataset;

    /// Header row, in column order.
    const COLUMNS: &'static [&'static str];

    /// Render the record as CSV fields, in the order of [`Self::COLUMNS`].
    fn to_csv_record(&self) -> Vec<String>;
}

// ============================================================================
// Categorical values
// ============================================================================

/// Job title of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTitle {
    Staff,
    SectionHead,
    DivisionHead,
    Lecturer,
}

impl JobTitle {
    pub const ALL: [JobTitle; 4] = [
        JobTitle::Staff,
        JobTitle::SectionHead,
        JobTitle::DivisionHead,
        JobTitle::Lecturer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobTitle::Staff => "Staf",
            JobTitle::SectionHead => "Kepala Seksi",
            JobTitle::DivisionHead => "Kepala Bagian",
            JobTitle::Lecturer => "Dosen",
        }
    }
}

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    /// Civil servant
    CivilServant,
    /// Government contract employee
    Contract,
    /// Honorary staff
    Honorary,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 3] = [
        EmploymentStatus::CivilServant,
        EmploymentStatus::Contract,
        EmploymentStatus::Honorary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::CivilServant => "PNS",
            EmploymentStatus::Contract => "PPPK",
            EmploymentStatus::Honorary => "Honorer",
        }
    }
}

/// Processing status of an incoming mail record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailStatus {
    Done,
    InProgress,
    Dispositioned,
}

impl MailStatus {
    pub const ALL: [MailStatus; 3] = [
        MailStatus::Done,
        MailStatus::InProgress,
        MailStatus::Dispositioned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MailStatus::Done => "Selesai",
            MailStatus::InProgress => "Proses",
            MailStatus::Dispositioned => "Disposisi",
        }
    }
}

/// Completion status of a service request. Generated requests are always completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Completed => "Selesai",
        }
    }
}

/// Category of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Electronics,
    Furniture,
    Vehicle,
    Stationery,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Electronics,
        AssetCategory::Furniture,
        AssetCategory::Vehicle,
        AssetCategory::Stationery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Electronics => "Elektronik",
            AssetCategory::Furniture => "Furniture",
            AssetCategory::Vehicle => "Kendaraan",
            AssetCategory::Stationery => "Alat Tulis",
        }
    }

    /// First three letters of the category name, upper-cased.
    pub fn code_prefix(&self) -> String {
        self.as_str()
            .chars()
            .take(3)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Physical condition of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCondition {
    Good,
    MinorDamage,
    MajorDamage,
}

impl AssetCondition {
    pub const ALL: [AssetCondition; 3] = [
        AssetCondition::Good,
        AssetCondition::MinorDamage,
        AssetCondition::MajorDamage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCondition::Good => "Baik",
            AssetCondition::MinorDamage => "Rusak Ringan",
            AssetCondition::MajorDamage => "Rusak Berat",
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Organizational unit (`stg_unit_kerja.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: u32,
    pub code: String,
    pub name: String,
    /// Hierarchy level, 1 (root) to 4.
    pub level: u8,
    pub parent_id: u32,
    /// NIP of the head of unit; never populated by the generator.
    pub head_nip: Option<String>,
    pub email: String,
}

impl Unit {
    /// Create a unit under the root unit, with the e-mail derived from its code.
    pub fn new(id: u32, code: impl Into<String>, name: impl Into<String>, level: u8) -> Self {
        let code = code.into();
        let email = format!("{}@{UNIT_EMAIL_DOMAIN}", code.to_lowercase());
        Self {
            id,
            code,
            name: name.into(),
            level,
            parent_id: ROOT_UNIT_ID,
            head_nip: None,
            email,
        }
    }
}

impl FixtureRecord for Unit {
    const DATASET: Dataset = Dataset::Units;
    const COLUMNS: &'static [&'static str] = &[
        "id_unit",
        "kode_unit",
        "nama_unit",
        "level",
        "parent_unit_id",
        "kepala_unit_nip",
        "email_unit",
    ];

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.code.clone(),
            self.name.clone(),
            self.level.to_string(),
            self.parent_id.to_string(),
            self.head_nip.clone().unwrap_or_default(),
            self.email.clone(),
        ]
    }
}

/// Staff record (`stg_simpeg.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub nip: String,
    pub name: String,
    pub job_title: JobTitle,
    pub unit_id: u32,
    pub hire_date: NaiveDate,
    pub status: EmploymentStatus,
    pub email: String,
    pub phone: String,
}

impl FixtureRecord for Employee {
    const DATASET: Dataset = Dataset::Employees;
    const COLUMNS: &'static [&'static str] = &[
        "nip",
        "nama",
        "jabatan",
        "unit_kerja_id",
        "tanggal_masuk",
        "status_kepegawaian",
        "email",
        "no_hp",
    ];

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.nip.clone(),
            self.name.clone(),
            self.job_title.as_str().to_string(),
            self.unit_id.to_string(),
            self.hire_date.format(DATE_FORMAT).to_string(),
            self.status.as_str().to_string(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

/// Incoming correspondence entry (`stg_simaster_surat.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRecord {
    pub id: String,
    pub document_number: String,
    pub received_date: NaiveDate,
    pub sender: String,
    pub subject: String,
    pub category_id: u8,
    pub status: MailStatus,
    /// Structured payload placeholder, always an empty JSON object.
    pub raw_data: String,
}

impl FixtureRecord for MailRecord {
    const DATASET: Dataset = Dataset::Mail;
    const COLUMNS: &'static [&'static str] = &[
        "id_surat",
        "nomor_surat",
        "tanggal_diterima",
        "pengirim",
        "perihal",
        "jenis_surat_id",
        "status",
        "raw_data",
    ];

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.document_number.clone(),
            self.received_date.format(DATE_FORMAT).to_string(),
            self.sender.clone(),
            self.subject.clone(),
            self.category_id.to_string(),
            self.status.as_str().to_string(),
            self.raw_data.clone(),
        ]
    }
}

/// Help-desk ticket (`stg_layanan.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: String,
    pub ticket_number: String,
    pub requester_name: String,
    pub service_category_id: u8,
    pub submitted_at: NaiveDateTime,
    pub completed_at: NaiveDateTime,
    pub status: RequestStatus,
    /// Satisfaction rating in [3.0, 5.0], two decimals.
    pub rating: f64,
}

impl FixtureRecord for ServiceRequest {
    const DATASET: Dataset = Dataset::ServiceRequests;
    const COLUMNS: &'static [&'static str] = &[
        "id_permintaan",
        "nomor_tiket",
        "pemohon_nama",
        "jenis_layanan_id",
        "timestamp_submit",
        "tanggal_selesai",
        "status_penyelesaian",
        "rating_kepuasan",
    ];

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.ticket_number.clone(),
            self.requester_name.clone(),
            self.service_category_id.to_string(),
            self.submitted_at.format(DATETIME_FORMAT).to_string(),
            self.completed_at.format(DATETIME_FORMAT).to_string(),
            self.status.as_str().to_string(),
            format_rating(self.rating),
        ]
    }
}

/// Ratings always carry a decimal point (`3.0`, not `3`).
fn format_rating(rating: f64) -> String {
    format!("{rating:?}")
}

/// Physical asset record (`stg_inventaris.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: String,
    pub item_code: String,
    pub name: String,
    pub category: AssetCategory,
    pub acquired_on: NaiveDate,
    pub acquisition_value: u64,
    pub condition: AssetCondition,
    pub location_id: u8,
    pub unit_id: u32,
}

impl FixtureRecord for InventoryItem {
    const DATASET: Dataset = Dataset::Inventory;
    const COLUMNS: &'static [&'static str] = &[
        "id_barang",
        "kode_barang",
        "nama_barang",
        "kategori",
        "tanggal_pengadaan",
        "nilai_perolehan",
        "kondisi",
        "lokasi_id",
        "unit_kerja_id",
    ];

    fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.item_code.clone(),
            self.name.clone(),
            self.category.as_str().to_string(),
            self.acquired_on.format(DATE_FORMAT).to_string(),
            self.acquisition_value.to_string(),
            self.condition.as_str().to_string(),
            self.location_id.to_string(),
            self.unit_id.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_email_and_parent() {
        let unit = Unit::new(8, "PRODI-SD", "Prodi Sains Data", 4);

        assert_eq!(unit.email, "prodi-sd@itera.ac.id");
        assert_eq!(unit.parent_id, ROOT_UNIT_ID);
        assert!(unit.head_nip.is_none());
        assert_eq!(
            unit.to_csv_record(),
            vec![
                "8",
                "PRODI-SD",
                "Prodi Sains Data",
                "4",
                "1",
                "",
                "prodi-sd@itera.ac.id"
            ]
        );
    }

    #[test]
    fn test_asset_code_prefix() {
        assert_eq!(AssetCategory::Electronics.code_prefix(), "ELE");
        assert_eq!(AssetCategory::Furniture.code_prefix(), "FUR");
        assert_eq!(AssetCategory::Vehicle.code_prefix(), "KEN");
        assert_eq!(AssetCategory::Stationery.code_prefix(), "ALA");
    }

    #[test]
    fn test_columns_match_record_width() {
        let unit = Unit::new(1, "REK", "Rektorat", 1);
        assert_eq!(unit.to_csv_record().len(), Unit::COLUMNS.len());

        let request = ServiceRequest {
            id: "REQ-0".to_string(),
            ticket_number: "TKT-202401-0000".to_string(),
            requester_name: "Budi Santoso".to_string(),
            service_category_id: 3,
            submitted_at: NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            completed_at: NaiveDate::from_ymd_opt(2024, 1, 6)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            status: RequestStatus::Completed,
            rating: 4.5,
        };
        let record = request.to_csv_record();
        assert_eq!(record.len(), ServiceRequest::COLUMNS.len());
        assert_eq!(record[4], "2024-01-05 08:30:00");
        assert_eq!(record[6], "Selesai");
        assert_eq!(record[7], "4.5");

        let whole = ServiceRequest {
            rating: 3.0,
            ..request
        };
        assert_eq!(whole.to_csv_record()[7], "3.0");
    }

    #[test]
    fn test_whole_ratings_keep_decimal_point() {
        assert_eq!(format_rating(3.0), "3.0");
        assert_eq!(format_rating(5.0), "5.0");
        assert_eq!(format_rating(4.5), "4.5");
        assert_eq!(format_rating(3.17), "3.17");
    }

    #[test]
    fn test_dataset_file_names_are_distinct() {
        let mut names: Vec<_> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Dataset::ALL.len());
        assert_eq!(Dataset::ServiceRequests.to_string(), "service_requests");
    }
}
