//! Scanning configuration.
//!
//! This module defines the options that control how categories are scanned
//! and how much is reported about entries that could not be read.

/// Configuration for scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Whether to report skipped entries on stderr
    pub verbose: bool,

    /// Number of threads used to scan categories side by side (0 = default)
    pub threads: usize,
}
