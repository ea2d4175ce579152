//! Cleanup category data structure and the built-in category table.
//!
//! A category is a named, user-toggleable cleanup target: a display name plus
//! a path specification such as `~/.cache` that is resolved right before it
//! is scanned or cleaned.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::resolver::{ResolvedPath, resolve};

/// Built-in categories as `(key, name, path, selected by default, high risk)`.
pub const BUILTIN_CATEGORIES: &[(&str, &str, &str, bool, bool)] = &[
    ("cache", "User cache", "~/.cache", true, false),
    ("tmp", "Temporary files", "/tmp", true, false),
    ("logs", "User logs", "~/.local/share/logs", false, false),
    ("thumbnails", "Thumbnails", "~/.cache/thumbnails", true, false),
    ("flatpak", "Flatpak cache", "~/.var/app", false, false),
    ("downloads", "Downloads", "~/Downloads", false, true),
];

/// A cleanup target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Short identifier used to select the category on the command line.
    pub key: String,

    /// Display name.
    pub name: String,

    /// Path specification, possibly starting with `~`.
    #[serde(rename = "path")]
    pub path_spec: String,

    /// Whether the category is selected when none are named explicitly.
    pub default_selected: bool,

    /// Whether the location holds user data.
    ///
    /// High-risk categories must be confirmed individually, right before
    /// they are cleaned, even when the user asked to skip confirmations.
    pub high_risk: bool,
}

impl Category {
    /// Create a category that is not selected by default and not high risk.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, path_spec: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            path_spec: path_spec.into(),
            default_selected: false,
            high_risk: false,
        }
    }

    /// Set whether the category is selected by default.
    #[must_use]
    pub const fn with_default_selected(mut self, selected: bool) -> Self {
        self.default_selected = selected;
        self
    }

    /// Set whether the category needs an individual confirmation.
    #[must_use]
    pub const fn with_high_risk(mut self, high_risk: bool) -> Self {
        self.high_risk = high_risk;
        self
    }

    /// Resolve the path specification against the current environment.
    #[must_use]
    pub fn resolve(&self) -> ResolvedPath {
        resolve(&self.path_spec)
    }

    /// Build the category list shipped with the tool.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        BUILTIN_CATEGORIES
            .iter()
            .map(|(key, name, path, selected, high_risk)| {
                Self::new(*key, *name, *path)
                    .with_default_selected(*selected)
                    .with_high_risk(*high_risk)
            })
            .collect()
    }
}

impl Display for Category {
    /// Format the category as `name (path)`, with a warning sign for
    /// high-risk categories.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.high_risk {
            write!(f, "⚠️  {} ({})", self.name, self.path_spec)
        } else {
            write!(f, "{} ({})", self.name, self.path_spec)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new_defaults() {
        let category = Category::new("cache", "User cache", "~/.cache");

        assert_eq!(category.key, "cache");
        assert_eq!(category.name, "User cache");
        assert_eq!(category.path_spec, "~/.cache");
        assert!(!category.default_selected);
        assert!(!category.high_risk);
    }

    #[test]
    fn test_category_builders() {
        let category = Category::new("downloads", "Downloads", "~/Downloads")
            .with_default_selected(true)
            .with_high_risk(true);

        assert!(category.default_selected);
        assert!(category.high_risk);
    }

    #[test]
    fn test_builtin_categories() {
        let builtin = Category::builtin();

        assert_eq!(builtin.len(), BUILTIN_CATEGORIES.len());

        let keys: Vec<&str> = builtin.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["cache", "tmp", "logs", "thumbnails", "flatpak", "downloads"]
        );
    }

    #[test]
    fn test_builtin_only_downloads_is_high_risk() {
        let high_risk: Vec<String> = Category::builtin()
            .into_iter()
            .filter(|c| c.high_risk)
            .map(|c| c.key)
            .collect();

        assert_eq!(high_risk, vec!["downloads".to_string()]);
    }

    #[test]
    fn test_builtin_default_selection() {
        let selected: Vec<String> = Category::builtin()
            .into_iter()
            .filter(|c| c.default_selected)
            .map(|c| c.key)
            .collect();

        assert_eq!(selected, vec!["cache", "tmp", "thumbnails"]);
    }

    #[test]
    fn test_category_resolve_expands_home() {
        let category = Category::new("cache", "User cache", "~/.cache");
        let resolved = category.resolve();

        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved.path, home.join(".cache"));
        }
    }

    #[test]
    fn test_category_display() {
        let cache = Category::new("cache", "User cache", "~/.cache");
        assert_eq!(format!("{cache}"), "User cache (~/.cache)");

        let downloads = Category::new("downloads", "Downloads", "~/Downloads").with_high_risk(true);
        assert_eq!(format!("{downloads}"), "⚠️  Downloads (~/Downloads)");
    }

    #[test]
    fn test_category_serializes_path_field() {
        let category = Category::new("tmp", "Temporary files", "/tmp");
        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json["key"], "tmp");
        assert_eq!(json["path"], "/tmp");
        assert_eq!(json["high_risk"], false);
    }
}
