//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods accept a [`FileConfig`] reference so that config-file values
//! act as defaults that CLI arguments can override (layered config).

use clap::{Parser, Subcommand};

use autoclean::config::{ExecutionOptions, FileConfig, ScanOptions};

/// Which categories a command operates on.
#[derive(Parser)]
pub struct SelectionArgs {
    /// Category keys to operate on (e.g. `cache tmp thumbnails`)
    ///
    /// When omitted, the categories selected by default are used.
    /// Run `autoclean list` to see the available keys.
    #[arg(num_args = 0..)]
    pub categories: Vec<String>,

    /// Operate on every category
    #[arg(short = 'a', long, conflicts_with = "categories")]
    pub all: bool,
}

/// Command-line arguments for controlling cleanup execution behavior.
#[derive(Parser)]
pub struct ExecutionArgs {
    /// Don't ask for confirmation before cleaning ordinary categories
    ///
    /// High-risk categories such as the downloads folder are still
    /// confirmed one by one.
    #[arg(short = 'y', long)]
    yes: bool,

    /// Analyze the selected categories and show what would be removed
    #[arg(long)]
    dry_run: bool,

    /// Pick the categories to clean from a list
    #[arg(short = 'i', long)]
    interactive: bool,
}

impl ExecutionArgs {
    /// Extract execution options from CLI args and config file.
    ///
    /// For boolean flags, the CLI flag (if set to `true`) takes priority,
    /// then the config file value, then the default. `--yes` turns the
    /// confirmation off regardless of the config file.
    #[must_use]
    pub fn execution_options(&self, config: &FileConfig) -> ExecutionOptions {
        ExecutionOptions {
            dry_run: self.dry_run || config.execution.dry_run.unwrap_or(false),
            interactive: self.interactive || config.execution.interactive.unwrap_or(false),
            confirm: !self.yes && config.execution.confirm.unwrap_or(true),
        }
    }
}

/// Command-line arguments for controlling scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads used to analyze categories side by side
    ///
    /// A value of 0 uses the default number of threads (typically the number
    /// of CPU cores). Removals always run one category at a time.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Show entries that could not be read or removed
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Count files and space used by the selected categories
    Scan {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Delete the contents of the selected categories
    Clean {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        execution: ExecutionArgs,
    },

    /// List the available categories and their resolved paths
    List,

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "autoclean")]
#[command(about = "Analyze and clean cache, temporary, log, thumbnail and download folders")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress bars, emojis)
    /// is suppressed and a single JSON document is printed to stdout.
    /// Incompatible with `--interactive`.
    #[arg(long, global = true)]
    json: bool,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **verbose**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoclean::config::file::{FileExecutionConfig, FileScanConfig};

    fn clean_args(args: &[&str]) -> (SelectionArgs, ExecutionArgs) {
        let mut argv = vec!["autoclean", "clean"];
        argv.extend_from_slice(args);

        match Cli::parse_from(argv).command {
            Commands::Clean {
                selection,
                execution,
            } => (selection, execution),
            _ => unreachable!("parsed a clean command"),
        }
    }

    #[test]
    fn test_scan_defaults() {
        let args = Cli::parse_from(["autoclean", "scan"]);
        let config = FileConfig::default();

        assert!(!args.json());
        let scan_opts = args.scan_options(&config);
        assert!(!scan_opts.verbose);
        assert_eq!(scan_opts.threads, 0);

        match args.command {
            Commands::Scan { selection } => {
                assert!(selection.categories.is_empty());
                assert!(!selection.all);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_scan_with_categories() {
        let args = Cli::parse_from(["autoclean", "scan", "cache", "tmp"]);

        match args.command {
            Commands::Scan { selection } => {
                assert_eq!(selection.categories, vec!["cache", "tmp"]);
            }
            _ => panic!("expected scan command"),
        }
    }

    #[test]
    fn test_all_conflicts_with_keys() {
        let result = Cli::try_parse_from(["autoclean", "scan", "--all", "cache"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Cli::parse_from(["autoclean", "scan", "--json", "-v", "-t", "2"]);
        let scan_opts = args.scan_options(&FileConfig::default());

        assert!(args.json());
        assert!(scan_opts.verbose);
        assert_eq!(scan_opts.threads, 2);
    }

    #[test]
    fn test_clean_execution_defaults() {
        let (selection, execution) = clean_args(&[]);
        let options = execution.execution_options(&FileConfig::default());

        assert!(selection.categories.is_empty());
        assert!(options.confirm);
        assert!(!options.dry_run);
        assert!(!options.interactive);
    }

    #[test]
    fn test_clean_flags() {
        let (selection, execution) = clean_args(&["-y", "--dry-run", "-i", "--all"]);
        let options = execution.execution_options(&FileConfig::default());

        assert!(selection.all);
        assert!(!options.confirm);
        assert!(options.dry_run);
        assert!(options.interactive);
    }

    #[test]
    fn test_config_file_execution_values() {
        let config = FileConfig {
            execution: FileExecutionConfig {
                confirm: Some(false),
                dry_run: Some(true),
                interactive: None,
            },
            ..FileConfig::default()
        };

        let (_, execution) = clean_args(&[]);
        let options = execution.execution_options(&config);

        assert!(!options.confirm);
        assert!(options.dry_run);
        assert!(!options.interactive);
    }

    #[test]
    fn test_yes_overrides_config_confirm() {
        let config = FileConfig {
            execution: FileExecutionConfig {
                confirm: Some(true),
                ..FileExecutionConfig::default()
            },
            ..FileConfig::default()
        };

        let (_, execution) = clean_args(&["--yes"]);
        assert!(!execution.execution_options(&config).confirm);
    }

    #[test]
    fn test_cli_threads_override_config() {
        let config = FileConfig {
            scanning: FileScanConfig {
                threads: Some(8),
                verbose: Some(true),
            },
            ..FileConfig::default()
        };

        let args = Cli::parse_from(["autoclean", "scan", "--threads", "2"]);
        let scan_opts = args.scan_options(&config);
        assert_eq!(scan_opts.threads, 2);
        assert!(scan_opts.verbose);

        let args = Cli::parse_from(["autoclean", "scan"]);
        assert_eq!(args.scan_options(&config).threads, 8);
    }

    #[test]
    fn test_config_subcommands() {
        for (arg, expected) in [("show", 0), ("init", 1), ("path", 2)] {
            let args = Cli::parse_from(["autoclean", "config", arg]);
            let got = match args.command {
                Commands::Config {
                    command: ConfigCommand::Show,
                } => 0,
                Commands::Config {
                    command: ConfigCommand::Init,
                } => 1,
                Commands::Config {
                    command: ConfigCommand::Path,
                } => 2,
                _ => panic!("expected config command"),
            };
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_list_command() {
        let args = Cli::parse_from(["autoclean", "list"]);
        assert!(matches!(args.command, Commands::List));
    }

    #[test]
    fn test_missing_subcommand_errors() {
        assert!(Cli::try_parse_from(["autoclean"]).is_err());
    }
}
