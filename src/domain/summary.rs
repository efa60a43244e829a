//! Summary - Dataset Stats and the Downloadable Export Document

use chrono::{DateTime, Datelike, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::EXPORT_FILE_PREFIX;
use crate::domain::company::CompanyRecord;

/// Aggregate figures over a record set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of records
    pub total: usize,
    /// Distinct non-empty categories
    pub distinct_category_count: usize,
    /// Distinct non-empty locations
    pub distinct_location_count: usize,
    /// First distinct categories in dataset order (not ranked by frequency)
    pub top_categories: Vec<String>,
}

/// Reduced projection of a company for the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub company: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub website: String,
}

impl From<&CompanyRecord> for SummaryRecord {
    fn from(record: &CompanyRecord) -> Self {
        Self {
            company: record.company.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            website: record.website.clone(),
        }
    }
}

/// The `yc-summary-<year>.json` document
///
/// Stats describe the full dataset while `filtered_data` holds the rows of
/// the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub total_companies: usize,
    pub categories: usize,
    pub top_categories: Vec<String>,
    pub locations: usize,
    /// ISO-8601 UTC, millisecond precision
    pub generated_at: String,
    pub filtered_data: Vec<SummaryRecord>,
    #[serde(skip)]
    year: i32,
}

impl ExportSnapshot {
    pub fn new(
        stats: &DatasetStats,
        filtered_data: Vec<SummaryRecord>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            total_companies: stats.total,
            categories: stats.distinct_category_count,
            top_categories: stats.top_categories.clone(),
            locations: stats.distinct_location_count,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            filtered_data,
            year: generated_at.with_timezone(&Local).year(),
        }
    }

    /// Download name, e.g. `yc-summary-2025.json`
    ///
    /// The year is taken in local time, so an export made on New Year's Eve
    /// is named for the local calendar year.
    pub fn file_name(&self) -> String {
        format!("{EXPORT_FILE_PREFIX}-{}.json", self.year)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }
}
