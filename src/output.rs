//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a scan or cleanup operation. When the `--json` flag
//! is passed, these structures are serialized to stdout as a single JSON
//! object, replacing all human-readable output.

use serde::Serialize;

use crate::{
    cleaner::{CleanResult, CleanStatus},
    scanner::{CategoryReport, totals},
    utils::format_size,
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The execution mode: `"scan"`, `"dry_run"` or `"cleanup"`.
    pub mode: String,

    /// Analysis of each selected category.
    pub categories: Vec<JsonCategoryEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,

    /// Cleanup results. Present only when an actual cleanup was performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<JsonCleanupResult>,
}

/// A single category entry in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonCategoryEntry {
    /// Category key.
    pub key: String,

    /// Display name.
    pub name: String,

    /// Resolved path.
    pub path: String,

    /// Whether the path existed at analysis time.
    pub exists: bool,

    /// Whether the category needs an individual confirmation.
    pub high_risk: bool,

    /// Number of files found.
    pub file_count: u64,

    /// Total size in bytes.
    pub total_bytes: u64,

    /// Human-readable formatted size (e.g. `"1.23 GB"`).
    pub total_size_formatted: String,

    /// Entries that could not be read.
    pub skipped: u64,
}

/// Aggregated summary across all selected categories.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    /// Number of categories analyzed.
    pub total_categories: usize,

    /// Total number of files found.
    pub total_files: u64,

    /// Total size in bytes.
    pub total_size: u64,

    /// Human-readable formatted total size.
    pub total_size_formatted: String,
}

/// Results of a cleanup operation.
#[derive(Debug, Serialize)]
pub struct JsonCleanupResult {
    /// Per-category outcomes.
    pub categories: Vec<JsonCleanupEntry>,

    /// Total number of files deleted.
    pub total_deleted: u64,

    /// Total bytes freed.
    pub total_freed: u64,

    /// Human-readable formatted freed size.
    pub total_freed_formatted: String,
}

/// Cleanup outcome for one category.
#[derive(Debug, Serialize)]
pub struct JsonCleanupEntry {
    /// Category key.
    pub key: String,

    /// Resolved path.
    pub path: String,

    /// Outcome, tagged with `"status"`.
    #[serde(flatten)]
    pub status: CleanStatus,
}

impl JsonOutput {
    /// Build a `JsonOutput` for the `scan` command.
    #[must_use]
    pub fn from_scan(reports: &[CategoryReport]) -> Self {
        Self::with_mode("scan", reports, None)
    }

    /// Build a `JsonOutput` for a dry run of the `clean` command.
    #[must_use]
    pub fn from_dry_run(reports: &[CategoryReport]) -> Self {
        Self::with_mode("dry_run", reports, None)
    }

    /// Build a `JsonOutput` after a cleanup operation.
    #[must_use]
    pub fn from_cleanup(reports: &[CategoryReport], result: &CleanResult) -> Self {
        Self::with_mode(
            "cleanup",
            reports,
            Some(JsonCleanupResult::from_clean_result(result)),
        )
    }

    fn with_mode(
        mode: &str,
        reports: &[CategoryReport],
        cleanup: Option<JsonCleanupResult>,
    ) -> Self {
        Self {
            mode: mode.to_string(),
            categories: reports.iter().map(JsonCategoryEntry::from_report).collect(),
            summary: JsonSummary::from_reports(reports),
            cleanup,
        }
    }
}

impl JsonCategoryEntry {
    /// Convert a `CategoryReport` into a `JsonCategoryEntry`.
    #[must_use]
    pub fn from_report(report: &CategoryReport) -> Self {
        Self {
            key: report.category.key.clone(),
            name: report.category.name.clone(),
            path: report.path.display().to_string(),
            exists: report.exists,
            high_risk: report.category.high_risk,
            file_count: report.scan.file_count,
            total_bytes: report.scan.total_bytes,
            total_size_formatted: format_size(report.scan.total_bytes),
            skipped: report.scan.skipped,
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from a slice of reports.
    #[must_use]
    pub fn from_reports(reports: &[CategoryReport]) -> Self {
        let (total_files, total_size) = totals(reports);

        Self {
            total_categories: reports.len(),
            total_files,
            total_size,
            total_size_formatted: format_size(total_size),
        }
    }
}

impl JsonCleanupResult {
    /// Convert a `CleanResult` into a `JsonCleanupResult`.
    #[must_use]
    pub fn from_clean_result(result: &CleanResult) -> Self {
        Self {
            categories: result
                .categories
                .iter()
                .map(|entry| JsonCleanupEntry {
                    key: entry.category.key.clone(),
                    path: entry.path.display().to_string(),
                    status: entry.status.clone(),
                })
                .collect(),
            total_deleted: result.total_deleted,
            total_freed: result.total_freed,
            total_freed_formatted: format_size(result.total_freed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::cleaner::CategoryCleanResult;
    use crate::scanner::ScanResult;
    use std::path::PathBuf;

    fn report(key: &str, files: u64, bytes: u64, exists: bool) -> CategoryReport {
        CategoryReport {
            category: Category::new(key, key.to_uppercase(), format!("/x/{key}")),
            path: PathBuf::from(format!("/x/{key}")),
            exists,
            scan: ScanResult {
                file_count: files,
                total_bytes: bytes,
                skipped: 0,
            },
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_scan_output() {
        let reports = vec![report("cache", 3, 600, true), report("tmp", 0, 0, false)];
        let output = JsonOutput::from_scan(&reports);

        assert_eq!(output.mode, "scan");
        assert_eq!(output.categories.len(), 2);
        assert_eq!(output.summary.total_categories, 2);
        assert_eq!(output.summary.total_files, 3);
        assert_eq!(output.summary.total_size, 600);
        assert_eq!(output.summary.total_size_formatted, "600 B");
        assert!(output.cleanup.is_none());

        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("cleanup").is_none());
        assert_eq!(json["categories"][1]["exists"], false);
    }

    #[test]
    fn test_dry_run_mode() {
        let output = JsonOutput::from_dry_run(&[report("logs", 1, 2_000, true)]);

        assert_eq!(output.mode, "dry_run");
        assert_eq!(output.categories[0].total_size_formatted, "2.00 KB");
    }

    #[test]
    fn test_cleanup_output() {
        let reports = vec![report("cache", 3, 600, true)];
        let result = CleanResult {
            categories: vec![CategoryCleanResult {
                category: reports[0].category.clone(),
                path: reports[0].path.clone(),
                status: CleanStatus::Cleaned {
                    deleted_files: 3,
                    freed_bytes: 600,
                    skipped: 0,
                },
                errors: Vec::new(),
            }],
            total_deleted: 3,
            total_freed: 600,
        };

        let output = JsonOutput::from_cleanup(&reports, &result);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["mode"], "cleanup");
        assert_eq!(json["cleanup"]["total_deleted"], 3);
        assert_eq!(json["cleanup"]["categories"][0]["key"], "cache");
        assert_eq!(json["cleanup"]["categories"][0]["status"], "cleaned");
        assert_eq!(json["cleanup"]["categories"][0]["freed_bytes"], 600);
    }
}
