//! Export
//!
//! Builds the summary document for the current view and hands its bytes to
//! whatever the host uses to deliver files.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::company::CompanyRecord;
use crate::domain::summary::{DatasetStats, ExportSnapshot, SummaryRecord};
use crate::error::Result;

/// Host capability for delivering a generated document
pub trait DocumentExporter {
    /// Persist `bytes` under `filename`
    fn save(&self, bytes: &[u8], filename: &str) -> Result<()>;
}

/// Snapshot of `filtered` rows with `stats` (usually of the full dataset)
pub fn export_snapshot<'a, I>(
    filtered: I,
    stats: &DatasetStats,
    generated_at: DateTime<Utc>,
) -> ExportSnapshot
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let rows = filtered.into_iter().map(SummaryRecord::from).collect();
    ExportSnapshot::new(stats, rows, generated_at)
}

/// Serialize `snapshot` and save it under its canonical file name
///
/// Returns the file name used.
pub fn save_snapshot(exporter: &dyn DocumentExporter, snapshot: &ExportSnapshot) -> Result<String> {
    let filename = snapshot.file_name();
    let bytes = snapshot.to_json_bytes()?;
    exporter.save(&bytes, &filename)?;
    info!(
        filename = %filename,
        rows = snapshot.filtered_data.len(),
        "Exported summary"
    );
    Ok(filename)
}

/// Writes documents into a directory
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentExporter for FileExporter {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.dir.join(filename), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::compute_stats;
    use chrono::TimeZone;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryExporter {
        saved: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl DocumentExporter for MemoryExporter {
        fn save(&self, bytes: &[u8], filename: &str) -> Result<()> {
            self.saved
                .borrow_mut()
                .push((filename.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    fn company(name: &str, category: &str) -> CompanyRecord {
        CompanyRecord {
            company: name.into(),
            category: category.into(),
            description: format!("{name} description"),
            location: "San Francisco".into(),
            website: format!("https://{}.example", name.to_lowercase()),
            one_liner: "not exported".into(),
            ..Default::default()
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_empty_filtered_set_uses_full_stats() {
        let dataset = vec![company("Acme", "AI"), company("Ledgerly", "Fintech")];
        let stats = compute_stats(&dataset);
        let filtered: Vec<&CompanyRecord> = Vec::new();

        let snapshot = export_snapshot(filtered, &stats, at());
        assert_eq!(snapshot.total_companies, 2);
        assert_eq!(snapshot.categories, 2);
        assert!(snapshot.filtered_data.is_empty());

        let value: serde_json::Value =
            serde_json::from_slice(&snapshot.to_json_bytes().expect("serializable"))
                .expect("valid json");
        assert_eq!(value["filteredData"], serde_json::json!([]));
        assert_eq!(value["totalCompanies"], 2);
    }

    #[test]
    fn test_projection_keeps_order_and_reduced_fields() {
        let dataset = vec![
            company("Acme", "AI"),
            company("Ledgerly", "Fintech"),
            company("Brainy", "AI"),
        ];
        let stats = compute_stats(&dataset);
        let filtered: Vec<&CompanyRecord> =
            dataset.iter().filter(|c| c.category == "AI").collect();

        let snapshot = export_snapshot(filtered, &stats, at());
        assert_eq!(snapshot.total_companies, 3);
        let names: Vec<&str> = snapshot
            .filtered_data
            .iter()
            .map(|r| r.company.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "Brainy"]);
        assert_eq!(snapshot.filtered_data[1].website, "https://brainy.example");

        let json = String::from_utf8(snapshot.to_json_bytes().expect("serializable"))
            .expect("utf-8");
        assert!(!json.contains("not exported"));
        assert!(json.contains("\n  \"totalCompanies\": 3"));
    }

    #[test]
    fn test_save_snapshot_through_exporter() {
        let dataset = vec![company("Acme", "AI")];
        let stats = compute_stats(&dataset);
        let snapshot = export_snapshot(&dataset, &stats, at());
        let exporter = MemoryExporter::default();

        let filename = save_snapshot(&exporter, &snapshot).expect("saved");
        assert_eq!(filename, "yc-summary-2025.json");

        let saved = exporter.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "yc-summary-2025.json");
        assert_eq!(saved[0].1, snapshot.to_json_bytes().expect("serializable"));
    }

    #[test]
    fn test_file_exporter_creates_dir() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let exporter = FileExporter::new(tmp.path().join("exports"));

        exporter.save(b"{}", "yc-summary-2025.json").expect("saved");
        let written = std::fs::read(exporter.dir().join("yc-summary-2025.json")).expect("read");
        assert_eq!(written, b"{}");
    }
}
