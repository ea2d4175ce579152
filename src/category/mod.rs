//! Cleanup categories.
//!
//! ## Main Parts
//!
//! - [`Category`] - A named cleanup target with a path specification
//! - [`Categories`] - The configured category list with selection helpers

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for category management
pub mod category;
pub mod categories;

pub use categories::Categories;
pub use category::{BUILTIN_CATEGORIES, Category};
