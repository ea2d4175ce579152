//! # autoclean
//!
//! A CLI tool that analyzes and cleans the folders where disposable files
//! accumulate: the user cache, temporary files, logs, thumbnails, Flatpak
//! data and, on explicit request, the downloads folder.
//!
//! ## Features
//!
//! - Per-category file counts and sizes
//! - Bottom-up deletion that keeps going past files it cannot remove
//! - Individual confirmation for high-risk categories
//! - Dry-run mode for safe previewing
//! - JSON output for scripting
//! - Persistent configuration via `~/.config/autoclean/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the default categories
//! autoclean scan
//!
//! # Clean the cache and thumbnails without the global prompt
//! autoclean clean cache thumbnails --yes
//!
//! # Choose categories interactively
//! autoclean clean --interactive
//! ```

mod cli;

use anyhow::{Ok, Result, bail};
use autoclean::{
    ExecutionOptions,
    category::{Categories, Category},
    cleaner::Cleaner,
    config::FileConfig,
    output::JsonOutput,
    scanner::{CategoryReport, Scanner, totals},
    utils::format_size,
};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, ExecutionArgs, SelectionArgs};
use colored::Colorize;
use inquire::Confirm;
use std::process::exit;

/// Entry point for the autoclean application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from thread-pool configuration, category selection,
/// interactive prompts, config file handling, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Commands::Config { command } = &args.command {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);
    let scan_options = args.scan_options(&file_config);

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let categories = Categories::from_config(file_config.categories.as_deref())?;
    let verbose = scan_options.verbose;
    let scanner = Scanner::new(scan_options).with_quiet(json_mode);

    match &args.command {
        Commands::List => {
            list_categories(&categories, json_mode)?;
            Ok(())
        }
        Commands::Scan { selection } => {
            let selected = select(&categories, selection)?;
            let reports = scanner.scan_categories(&selected);
            print_reports(&reports, json_mode, JsonOutput::from_scan)
        }
        Commands::Clean {
            selection,
            execution,
        } => run_clean(
            &categories,
            selection,
            execution,
            &file_config,
            &scanner,
            json_mode,
            verbose,
        ),
        Commands::Config { .. } => Ok(()),
    }
}

// ── Helper functions ────────────────────────────────────────────────────

/// Resolve the category selection from the command line.
fn select(categories: &Categories, selection: &SelectionArgs) -> Result<Categories> {
    categories.select(&selection.categories, selection.all)
}

/// Print the category table (or its JSON form).
fn list_categories(categories: &Categories, json_mode: bool) -> Result<()> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(categories.as_slice())?);
    } else {
        println!("{}", "📋 Categories (● selected by default):".bold());
        categories.print_list();
    }
    Ok(())
}

/// Print analysis reports in JSON or human-readable form.
fn print_reports(
    reports: &[CategoryReport],
    json_mode: bool,
    to_json: fn(&[CategoryReport]) -> JsonOutput,
) -> Result<()> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&to_json(reports))?);
    } else {
        println!("\n{}", "📊 Analysis:".bold());
        CategoryReport::print_table(reports);
    }
    Ok(())
}

/// Run the `clean` command: select, analyze, confirm, remove, report.
fn run_clean(
    categories: &Categories,
    selection: &SelectionArgs,
    execution: &ExecutionArgs,
    file_config: &FileConfig,
    scanner: &Scanner,
    json_mode: bool,
    verbose: bool,
) -> Result<()> {
    let options = execution.execution_options(file_config);

    if json_mode && options.interactive {
        bail!("--json and --interactive cannot be used together");
    }

    let selected = if options.interactive {
        selected_interactively(categories, selection)?
    } else {
        select(categories, selection)?
    };

    if selected.is_empty() {
        return print_nothing_to_do(json_mode, "✨ No categories selected!");
    }

    let reports = scanner.scan_categories(&selected);

    if options.dry_run {
        return print_dry_run(&reports, json_mode);
    }

    if !json_mode {
        print_reports(&reports, false, JsonOutput::from_scan)?;
    }

    if reports.iter().all(|r| !r.exists) {
        return print_nothing_to_do(json_mode, "✨ Nothing to clean!");
    }

    if !confirm_cleanup(&selected, &options)? {
        return print_nothing_to_do(json_mode, "Cleanup cancelled.");
    }

    let result = Cleaner::new()
        .with_quiet(json_mode)
        .with_verbose(verbose)
        .clean_categories(&selected, confirm_high_risk);

    if json_mode {
        let output = JsonOutput::from_cleanup(&reports, &result);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        Cleaner::print_summary(&result);
    }

    Ok(())
}

/// Let the user pick categories, starting from the command-line selection.
fn selected_interactively(
    categories: &Categories,
    selection: &SelectionArgs,
) -> Result<Categories> {
    if selection.all || !selection.categories.is_empty() {
        let preselected = categories.select(&selection.categories, selection.all)?;
        let keys: Vec<&str> = preselected.keys();
        let adjusted: Vec<Category> = categories
            .as_slice()
            .iter()
            .map(|c| {
                c.clone()
                    .with_default_selected(keys.contains(&c.key.as_str()))
            })
            .collect();
        return Categories::from(adjusted).interactive_selection();
    }

    categories.interactive_selection()
}

/// Ask once before cleaning, unless confirmations are turned off.
///
/// High-risk categories are confirmed separately by [`confirm_high_risk`].
fn confirm_cleanup(selected: &Categories, options: &ExecutionOptions) -> Result<bool> {
    if !options.confirm {
        return Ok(true);
    }

    let answer = Confirm::new(&format!(
        "Clean {} selected categor{}?",
        selected.len(),
        if selected.len() == 1 { "y" } else { "ies" }
    ))
    .with_default(false)
    .prompt()?;

    Ok(answer)
}

/// Ask for a fresh confirmation right before a high-risk category is removed.
///
/// Any prompt failure (no terminal, Ctrl+C) counts as a refusal.
fn confirm_high_risk(category: &Category) -> bool {
    let resolved = category.resolve();

    Confirm::new(&format!(
        "Really delete every file in {} ({})? This cannot be undone.",
        category.name,
        resolved.path.display()
    ))
    .with_default(false)
    .prompt()
    .unwrap_or(false)
}

/// Emit an empty result in JSON or human-readable form.
fn print_nothing_to_do(json_mode: bool, message: &str) -> Result<()> {
    if json_mode {
        let output = JsonOutput::from_dry_run(&[]);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", message.green());
    }
    Ok(())
}

/// Print dry-run results in JSON or human-readable format.
fn print_dry_run(reports: &[CategoryReport], json_mode: bool) -> Result<()> {
    if json_mode {
        return print_reports(reports, true, JsonOutput::from_dry_run);
    }

    print_reports(reports, false, JsonOutput::from_dry_run)?;
    let (files, bytes) = totals(reports);
    println!(
        "\n{} {}",
        "🧪 Dry run complete!".yellow(),
        format!("Would delete {files} files ({})", format_size(bytes)).bright_white()
    );
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# autoclean configuration
# All values shown are their defaults. Uncomment and change as needed.

[scanning]
# Number of threads used to analyze categories side by side (0 = all CPU cores)
# threads = 0

# Show entries that could not be read or removed
# verbose = false

[execution]
# Ask once before cleaning ordinary categories (high-risk ones are always confirmed)
# confirm = true

# Analyze only, never delete
# dry_run = false

# Pick categories from a list
# interactive = false

# Defining [[categories]] replaces the built-in table.
# [[categories]]
# key = "cache"
# name = "User cache"
# path = "~/.cache"
# selected = true
#
# [[categories]]
# key = "downloads"
# name = "Downloads"
# path = "~/Downloads"
# high_risk = true
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config)?);
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> Result<String> {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let categories = Categories::from_config(config.categories.as_deref())?;
    let source = if config.categories.is_some() {
        "config file"
    } else {
        "built-in"
    };
    let category_lines: Vec<String> = categories
        .as_slice()
        .iter()
        .map(|c| {
            format!(
                "  {:<12} {:<18} \"{}\"{}{}",
                c.key,
                c.name,
                c.path_spec,
                if c.default_selected { "  selected" } else { "" },
                if c.high_risk { "  high_risk" } else { "" }
            )
        })
        .collect();

    Ok(format!(
        "\
[scanning]
threads       = {threads}
verbose       = {verbose}

[execution]
confirm       = {confirm}
dry_run       = {dry_run}
interactive   = {interactive}

[categories]  ({source})
{category_lines}",
        threads = show_usize(config.scanning.threads, "0 (all cores)"),
        verbose = show_bool(config.scanning.verbose, false),
        confirm = show_bool(config.execution.confirm, true),
        dry_run = show_bool(config.execution.dry_run, false),
        interactive = show_bool(config.execution.interactive, false),
        category_lines = category_lines.join("\n"),
    ))
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
