//! # autoclean
//!
//! Scan and clean the places where a desktop session piles up disposable
//! files: the user cache, temporary files, logs, thumbnails, Flatpak data and
//! (on explicit request) the downloads folder.
//!
//! ## Engine
//!
//! - [`resolver::resolve`] - Expand a path specification such as `~/.cache`
//! - [`scanner::scan`] - Count regular files and sum their sizes
//! - [`remover::remove`] - Delete a tree bottom-up, keeping the root
//! - [`utils::format_size`] - Render byte counts with decimal units
//!
//! The scan and removal walks never fail: a missing root gives a zero result
//! and entries that cannot be read or deleted are skipped and counted
//! separately.
//!
//! ## Front-end helpers
//!
//! - [`category`] - The category table and selection
//! - [`scanner::Scanner`] - Analysis over a set of categories
//! - [`cleaner::Cleaner`] - Sequential cleanup with confirmation gating
//! - [`config`] - Configuration file and option types
//! - [`output`] - JSON output

pub mod category;
pub mod cleaner;
pub mod config;
pub mod entry;
pub mod output;
pub mod remover;
pub mod resolver;
pub mod scanner;
pub mod utils;

pub use config::{ExecutionOptions, ScanOptions};
pub use remover::{DeleteResult, remove};
pub use resolver::{ResolvedPath, resolve};
pub use scanner::{ScanResult, scan};
