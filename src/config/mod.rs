//! Configuration types.
//!
//! - [`FileConfig`] - Settings loaded from the TOML configuration file
//! - [`ScanOptions`] - How categories are scanned
//! - [`ExecutionOptions`] - How a cleanup runs

pub mod execution;
pub mod file;
pub mod scan;

pub use execution::ExecutionOptions;
pub use file::FileConfig;
pub use scan::ScanOptions;
