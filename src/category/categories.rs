//! Collection management for cleanup categories.
//!
//! This module provides the `Categories` struct which wraps the configured
//! category list and provides selection by key, interactive selection and
//! listing.

use std::collections::HashSet;

use anyhow::{Result, bail};
use colored::Colorize;
use inquire::MultiSelect;

use crate::config::file::FileCategory;

use super::Category;

/// An ordered collection of cleanup categories.
#[derive(Clone, Debug)]
pub struct Categories(Vec<Category>);

impl From<Vec<Category>> for Categories {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl Categories {
    /// The built-in category table.
    #[must_use]
    pub fn builtin() -> Self {
        Self(Category::builtin())
    }

    /// Build the category list from the configuration file.
    ///
    /// When the config file defines `[[categories]]`, that list replaces the
    /// built-in table entirely; otherwise the built-in table is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured category has an empty key or path,
    /// or if two categories share the same key.
    pub fn from_config(configured: Option<&[FileCategory]>) -> Result<Self> {
        let Some(configured) = configured else {
            return Ok(Self::builtin());
        };

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(configured.len());

        for entry in configured {
            let key = entry.key.trim();
            if key.is_empty() {
                bail!("Category keys in the config file must not be empty");
            }
            if entry.path.trim().is_empty() {
                bail!("Category '{key}' has an empty path");
            }
            if !seen.insert(key.to_string()) {
                bail!("Category '{key}' is defined more than once");
            }

            categories.push(
                Category::new(
                    key,
                    entry.name.clone().unwrap_or_else(|| key.to_string()),
                    entry.path.clone(),
                )
                .with_default_selected(entry.selected.unwrap_or(false))
                .with_high_risk(entry.high_risk.unwrap_or(false)),
            );
        }

        Ok(Self(categories))
    }

    /// Select categories by key.
    ///
    /// - `all` selects every category.
    /// - An empty `keys` list selects the default-selected categories.
    /// - Otherwise the named categories are returned in table order, each
    ///   at most once.
    ///
    /// # Errors
    ///
    /// Returns an error naming the valid keys if any key is unknown.
    pub fn select(&self, keys: &[String], all: bool) -> Result<Self> {
        if all {
            return Ok(self.clone());
        }

        if keys.is_empty() {
            return Ok(self.defaults());
        }

        let unknown: Vec<&str> = keys
            .iter()
            .map(String::as_str)
            .filter(|key| !self.0.iter().any(|c| c.key == *key))
            .collect();

        if !unknown.is_empty() {
            bail!(
                "Unknown categor{} {} (available: {})",
                if unknown.len() == 1 { "y" } else { "ies" },
                unknown.join(", "),
                self.keys().join(", ")
            );
        }

        Ok(Self(
            self.0
                .iter()
                .filter(|c| keys.iter().any(|k| *k == c.key))
                .cloned()
                .collect(),
        ))
    }

    /// Categories selected by default.
    #[must_use]
    pub fn defaults(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|c| c.default_selected)
                .cloned()
                .collect(),
        )
    }

    /// Keys of all categories, in table order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.key.as_str()).collect()
    }

    /// Present a multi-select dialog over the categories.
    ///
    /// Categories that are selected by default start checked.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    /// - The terminal doesn't support interactive input
    /// - The user cancels the dialog (Ctrl+C)
    pub fn interactive_selection(&self) -> Result<Self> {
        let items: Vec<String> = self.0.iter().map(ToString::to_string).collect();

        let defaults: Vec<usize> = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, c)| c.default_selected)
            .map(|(i, _)| i)
            .collect();

        let selections = MultiSelect::new("Select categories to clean:", items)
            .with_default(&defaults)
            .raw_prompt()?;

        Ok(Self(
            selections
                .into_iter()
                .map(|option| self.0[option.index].clone())
                .collect(),
        ))
    }

    /// Print every category with its resolved path and whether it exists.
    pub fn print_list(&self) {
        for category in &self.0 {
            let resolved = category.resolve();
            let marker = if category.default_selected {
                "●".green()
            } else {
                "○".dimmed()
            };
            let state = if resolved.exists {
                "".normal()
            } else {
                " (not found)".yellow()
            };
            let risk = if category.high_risk {
                "  ⚠️  confirmation required".red()
            } else {
                "".normal()
            };

            println!(
                "  {marker} {:<12} {:<18} {}{state}{risk}",
                category.key.bold(),
                category.name,
                resolved.path.display()
            );
        }
    }

    /// Number of categories in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a slice of the underlying categories.
    #[must_use]
    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }
}
