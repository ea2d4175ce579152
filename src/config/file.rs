//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/autoclean/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [scanning]
//! threads = 4
//! verbose = true
//!
//! [execution]
//! confirm = true
//! dry_run = false
//!
//! # Replaces the built-in category table when present
//! [[categories]]
//! key = "cache"
//! name = "User cache"
//! path = "~/.cache"
//! selected = true
//!
//! [[categories]]
//! key = "downloads"
//! path = "~/Downloads"
//! high_risk = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Scanning options
    #[serde(default)]
    pub scanning: FileScanConfig,

    /// Execution options
    #[serde(default)]
    pub execution: FileExecutionConfig,

    /// Category table replacing the built-in one
    pub categories: Option<Vec<FileCategory>>,
}

/// Scanning options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileScanConfig {
    /// Number of threads used to scan categories side by side
    pub threads: Option<usize>,

    /// Whether to report entries that could not be read or removed
    pub verbose: Option<bool>,
}

/// Execution options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileExecutionConfig {
    /// Whether to ask once before cleaning ordinary categories.
    /// Defaults to `true`. High-risk categories are always confirmed.
    pub confirm: Option<bool>,

    /// Whether to run in dry-run mode
    pub dry_run: Option<bool>,

    /// Whether to use interactive selection
    pub interactive: Option<bool>,
}

/// A category definition from the configuration file.
#[derive(Deserialize, Debug, Clone)]
pub struct FileCategory {
    /// Identifier used on the command line
    pub key: String,

    /// Display name (defaults to the key)
    pub name: Option<String>,

    /// Path specification, may start with `~`
    pub path: String,

    /// Selected when no category is named explicitly
    pub selected: Option<bool>,

    /// Requires an individual confirmation before cleaning
    pub high_risk: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/autoclean/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("autoclean").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or does not match the
    /// expected structure.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
