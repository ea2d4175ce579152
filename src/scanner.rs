//! Read-only accounting walk and category analysis.
//!
//! [`scan`] is the engine: it walks one directory tree and counts the regular
//! files it can measure. [`Scanner`] drives it over a set of categories,
//! resolving each path, showing progress and reporting skipped entries.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::{
    category::{Categories, Category},
    config::ScanOptions,
    entry::{EntryOutcome, SkippedEntry, Tally},
    utils::format_size,
};

/// Totals produced by one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Number of regular files whose size could be read.
    pub file_count: u64,

    /// Sum of the sizes of those files, in bytes.
    pub total_bytes: u64,

    /// Entries that could not be read. Never included in the other counters.
    pub skipped: u64,
}

impl From<&Tally> for ScanResult {
    fn from(tally: &Tally) -> Self {
        Self {
            file_count: tally.done,
            total_bytes: tally.bytes,
            skipped: tally.skipped_count(),
        }
    }
}

/// Count the regular files under `path` and sum their sizes.
///
/// A missing path yields an all-zero result. Entries that cannot be read are
/// left out of both totals and the walk carries on; see [`scan_with_errors`]
/// to find out which ones.
#[must_use]
pub fn scan(path: &Path) -> ScanResult {
    scan_with_errors(path).0
}

/// Like [`scan`], but also returns the entries that had to be skipped.
///
/// Directories are descended into but never counted. Symlinks below the root
/// are not followed and do not count as files; a symlinked root is followed.
/// The root itself is never counted, so a root that is a regular file scans
/// as empty, matching what [`crate::remover::remove`] leaves behind.
#[must_use]
pub fn scan_with_errors(path: &Path) -> (ScanResult, Vec<SkippedEntry>) {
    if !path.exists() {
        return (ScanResult::default(), Vec::new());
    }

    let tally: Tally = WalkDir::new(path)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .map(measure_entry)
        .collect();

    (ScanResult::from(&tally), tally.skipped)
}

/// Size a single walk item.
fn measure_entry(entry: walkdir::Result<DirEntry>) -> EntryOutcome {
    let entry = match entry {
        Ok(entry) => entry,
        Err(err) => return EntryOutcome::Skipped(SkippedEntry::new(err.path(), &err)),
    };

    if !entry.file_type().is_file() {
        return EntryOutcome::Ignored;
    }

    match entry.metadata() {
        Ok(metadata) => EntryOutcome::Done(metadata.len()),
        Err(err) => EntryOutcome::Skipped(SkippedEntry::new(Some(entry.path()), err)),
    }
}

/// Analysis of one category.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryReport {
    /// The category that was scanned.
    pub category: Category,

    /// The resolved path.
    pub path: PathBuf,

    /// Whether the path existed when it was resolved.
    pub exists: bool,

    /// Scan totals.
    pub scan: ScanResult,

    /// Entries that could not be read.
    #[serde(skip)]
    pub skipped: Vec<SkippedEntry>,
}

impl CategoryReport {
    /// Resolve and scan a single category.
    #[must_use]
    pub fn analyze(category: &Category) -> Self {
        let resolved = category.resolve();
        let (scan, skipped) = if resolved.exists {
            scan_with_errors(&resolved.path)
        } else {
            (ScanResult::default(), Vec::new())
        };

        Self {
            category: category.clone(),
            path: resolved.path,
            exists: resolved.exists,
            scan,
            skipped,
        }
    }

    /// One-line status: file count and size, or "not found".
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.exists {
            format!(
                "{} files – {}",
                self.scan.file_count,
                format_size(self.scan.total_bytes)
            )
        } else {
            "not found".to_string()
        }
    }

    /// Print the analysis table for a set of reports.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🗂️  User cache         1234 files – 512.30 MB
    ///   🗂️  Temporary files    not found
    ///   💾 Total: 1234 files, 512.30 MB
    /// ```
    pub fn print_table(reports: &[Self]) {
        for report in reports {
            let status = if report.exists {
                report.status_line().bright_white()
            } else {
                report.status_line().dimmed()
            };
            let icon = if report.category.high_risk {
                "⚠️ "
            } else {
                "🗂️ "
            };

            println!("  {icon} {:<18} {status}", report.category.name);
        }

        let (files, bytes) = totals(reports);
        println!(
            "  💾 Total: {} files, {}",
            files.to_string().bright_white(),
            format_size(bytes).bright_green().bold()
        );
    }
}

/// Sum file counts and sizes over a set of reports.
#[must_use]
pub fn totals(reports: &[CategoryReport]) -> (u64, u64) {
    reports.iter().fold((0, 0), |(files, bytes), r| {
        (
            files + r.scan.file_count,
            bytes.saturating_add(r.scan.total_bytes),
        )
    })
}

/// Scans a set of categories.
///
/// Categories are independent read-only walks, so they are analyzed in
/// parallel on the global rayon pool. Each individual walk is sequential.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Analyze every category in `categories`.
    ///
    /// Reports are returned in the same order as the categories. When verbose
    /// output is enabled, skipped entries are printed to stderr afterwards.
    ///
    /// # Panics
    ///
    /// This method may panic if the progress bar template string is invalid,
    /// though this should not occur under normal circumstances as the template
    /// is hardcoded and valid.
    pub fn scan_categories(&self, categories: &Categories) -> Vec<CategoryReport> {
        let total = categories.len();

        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(format!("Analyzing... 0/{total}"));
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        let done = AtomicUsize::new(0);

        let reports: Vec<CategoryReport> = categories
            .as_slice()
            .par_iter()
            .map(|category| {
                let report = CategoryReport::analyze(category);
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                progress.set_message(format!("Analyzing... {n}/{total}"));
                report
            })
            .collect();

        progress.finish_and_clear();

        if self.scan_options.verbose {
            for report in &reports {
                for skipped in &report.skipped {
                    eprintln!("{}", format!("Skipped {skipped}").red());
                }
            }
        }

        reports
    }
}
