//! Category cleanup orchestration.
//!
//! This module runs the removal walk over a set of categories, one category
//! at a time, with progress reporting and a final summary. Categories can
//! overlap (`~/.cache` contains `~/.cache/thumbnails`), so removals are never
//! run in parallel.

use std::path::PathBuf;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    category::{Categories, Category},
    entry::SkippedEntry,
    remover::remove_with_errors,
    scanner::scan,
    utils::format_size,
};

/// What happened to one category during a cleanup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CleanStatus {
    /// The category was cleaned.
    Cleaned {
        /// Number of files deleted.
        deleted_files: u64,

        /// Bytes that were present before and are gone afterwards.
        freed_bytes: u64,

        /// Entries that could not be removed.
        skipped: u64,
    },

    /// The category path does not exist.
    Missing,

    /// The user declined the confirmation for this category.
    Cancelled,
}

/// Cleanup outcome for one category.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryCleanResult {
    /// The category.
    pub category: Category,

    /// The resolved path that was cleaned.
    pub path: PathBuf,

    /// Outcome.
    #[serde(flatten)]
    pub status: CleanStatus,

    /// Entries that could not be removed.
    #[serde(skip)]
    pub errors: Vec<SkippedEntry>,
}

/// Structured result returned after a cleanup operation.
///
/// Contains all the data needed to render either human-readable or JSON output.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CleanResult {
    /// Per-category outcomes, in cleanup order.
    pub categories: Vec<CategoryCleanResult>,

    /// Total number of files deleted.
    pub total_deleted: u64,

    /// Total bytes freed.
    pub total_freed: u64,
}

impl CleanResult {
    fn push(&mut self, result: CategoryCleanResult) {
        if let CleanStatus::Cleaned {
            deleted_files,
            freed_bytes,
            ..
        } = result.status
        {
            self.total_deleted += deleted_files;
            self.total_freed = self.total_freed.saturating_add(freed_bytes);
        }
        self.categories.push(result);
    }

    /// Number of categories that were actually cleaned.
    #[must_use]
    pub fn cleaned_count(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| matches!(c.status, CleanStatus::Cleaned { .. }))
            .count()
    }
}

/// Runs cleanups over categories.
#[derive(Debug, Default)]
pub struct Cleaner {
    /// When `true`, suppresses all human-readable output (used by `--json`).
    quiet: bool,

    /// When `true`, entries that could not be removed are printed to stderr.
    verbose: bool,
}

impl Cleaner {
    /// Create a new cleaner instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quiet: false,
            verbose: false,
        }
    }

    /// Enable or disable quiet mode.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Enable or disable reporting of skipped entries.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Clean every category in `categories`, in order.
    ///
    /// For high-risk categories `confirm` is called immediately before the
    /// category is removed; the category is skipped unless it returns `true`.
    /// The progress bar is suspended while `confirm` runs so a prompt can use
    /// the terminal.
    ///
    /// Freed space is measured by scanning each path right before and right
    /// after its removal.
    ///
    /// # Panics
    ///
    /// This method may panic if the progress bar template string is invalid,
    /// though this should not occur under normal circumstances as the template
    /// is hardcoded and valid.
    pub fn clean_categories<F>(&self, categories: &Categories, mut confirm: F) -> CleanResult
    where
        F: FnMut(&Category) -> bool,
    {
        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            println!("\n{}", "🧹 Starting cleanup...".cyan());

            let pb = ProgressBar::new(categories.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("█▉▊▋▌▍▎▏  "),
            );
            pb
        };

        let mut result = CleanResult::default();

        for category in categories.as_slice() {
            let outcome = if category.high_risk && !progress.suspend(|| confirm(category)) {
                CategoryCleanResult {
                    category: category.clone(),
                    path: category.resolve().path,
                    status: CleanStatus::Cancelled,
                    errors: Vec::new(),
                }
            } else {
                clean_single_category(category)
            };

            if self.verbose {
                for error in &outcome.errors {
                    progress.suspend(|| eprintln!("{}", format!("Skipped {error}").red()));
                }
            }

            progress.set_message(format!("{} ({})", category.name, status_label(&outcome.status)));
            progress.inc(1);
            result.push(outcome);
        }

        progress.finish_with_message("✅ Cleanup complete");

        result
    }

    /// Print a human-readable cleanup summary to stdout.
    ///
    /// This is called from `main` when `--json` is **not** active.
    pub fn print_summary(result: &CleanResult) {
        println!("\n{}", "📊 Cleanup Summary:".bold());

        for entry in &result.categories {
            let line = match &entry.status {
                CleanStatus::Cleaned {
                    deleted_files,
                    freed_bytes,
                    skipped,
                } => {
                    let mut line = format!(
                        "✓ {deleted_files} files deleted, {} freed",
                        format_size(*freed_bytes)
                    )
                    .green()
                    .to_string();
                    if *skipped > 0 {
                        line.push_str(&format!(" ({skipped} skipped)").yellow().to_string());
                    }
                    line
                }
                CleanStatus::Missing => "nothing to clean".dimmed().to_string(),
                CleanStatus::Cancelled => "cancelled".yellow().to_string(),
            };

            println!("  {:<18} {line}", entry.category.name);
        }

        println!(
            "  ✅ Files deleted: {}",
            result.total_deleted.to_string().green()
        );
        println!(
            "  💾 Total space freed: {}",
            format_size(result.total_freed).bright_green().bold()
        );
    }
}

/// Clean one category: resolve, measure, remove, measure again.
fn clean_single_category(category: &Category) -> CategoryCleanResult {
    let resolved = category.resolve();

    if !resolved.exists {
        return CategoryCleanResult {
            category: category.clone(),
            path: resolved.path,
            status: CleanStatus::Missing,
            errors: Vec::new(),
        };
    }

    let before = scan(&resolved.path);
    let (deleted, errors) = remove_with_errors(&resolved.path);
    let after = scan(&resolved.path);

    CategoryCleanResult {
        category: category.clone(),
        path: resolved.path,
        status: CleanStatus::Cleaned {
            deleted_files: deleted.deleted_file_count,
            freed_bytes: before.total_bytes.saturating_sub(after.total_bytes),
            skipped: deleted.skipped,
        },
        errors,
    }
}

fn status_label(status: &CleanStatus) -> String {
    match status {
        CleanStatus::Cleaned { deleted_files, .. } => format!("{deleted_files} files"),
        CleanStatus::Missing => "not found".to_string(),
        CleanStatus::Cancelled => "cancelled".to_string(),
    }
}
