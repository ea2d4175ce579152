//! Utility functions and helpers.

pub mod size;

pub use size::format_size;
