//! Command-line interface module for tidykit.
//!
//! This module handles all CLI-related functionality including:
//! - Command parsing via clap
//! - Configuration loading
//! - Organization orchestration (with dry-run preview)
//! - Listing, analysis, search, and project generation commands

use crate::config::Config;
use crate::file_category::CategoryMap;
use crate::file_organizer::FileOrganizer;
use crate::output::OutputFormatter;
use crate::scaffold::{scaffold_project, structure_preview};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "tidykit",
    version,
    about = "Organize files into category folders, analyze directory trees, and scaffold projects"
)]
pub struct Cli {
    /// Path to an alternate configuration file.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// The operations tidykit can perform.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List one level of a directory, folders first.
    List {
        /// Directory to list.
        path: PathBuf,
    },
    /// Move every file in a directory into its category folder.
    Organize {
        /// Directory to organize.
        path: PathBuf,
        /// Preview the moves without touching anything.
        #[arg(long)]
        dry_run: bool,
    },
    /// Recursively analyze a directory tree.
    Analyze {
        /// Root of the tree to analyze.
        path: PathBuf,
    },
    /// Recursively find entries whose name contains a query.
    Search {
        /// Root of the tree to search.
        path: PathBuf,
        /// Case-insensitive substring to look for.
        query: String,
    },
    /// Scaffold a new project directory from a template.
    New {
        /// Name of the project (becomes the root folder name).
        name: String,
        /// Template key from the configuration file.
        #[arg(short, long)]
        template: String,
        /// Destination folder for the new project.
        #[arg(short, long, default_value = ".")]
        dest: PathBuf,
    },
}

/// Run a parsed command to completion.
///
/// Loads the configuration once (creating it with defaults on first use) and
/// dispatches. Every failure collapses into a single user-visible message.
pub fn run(cli: Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?;

    match cli.command {
        Command::List { path } => show_listing(&path),
        Command::Organize { path, dry_run } => {
            if dry_run {
                organize_directory_dry_run(&path, &config)
            } else {
                organize_directory(&path, &config)
            }
        }
        Command::Analyze { path } => analyze_directory(&path),
        Command::Search { path, query } => search_directory(&path, &query),
        Command::New {
            name,
            template,
            dest,
        } => generate_project(&name, &template, &dest, &config),
    }
}

/// Print a one-level listing of `path`.
pub fn show_listing(path: &Path) -> Result<(), String> {
    OutputFormatter::info(&format!("Contents of: {}", path.display()));
    let entries = crate::listing::list_directory(path).map_err(|e| e.to_string())?;
    OutputFormatter::listing_table(&entries);
    Ok(())
}

/// Organize every direct-child file of `base_path` into category folders.
///
/// Policy: skip and continue. Every file is attempted; failures are collected
/// and reported afterwards as one aggregate error covering the whole batch.
/// Moves that already completed are kept.
pub fn organize_directory(base_path: &Path, config: &Config) -> Result<(), String> {
    OutputFormatter::info(&format!("Organizing contents of: {}", base_path.display()));

    let categories = CategoryMap::new(&config.file_categories);
    let files = collect_files(base_path)?;

    if files.is_empty() {
        OutputFormatter::plain("No files to organize.");
        return Ok(());
    }

    let pb = OutputFormatter::create_progress_bar(files.len() as u64);
    let mut category_counts: HashMap<String, usize> = HashMap::new();
    let mut moved = 0usize;
    let mut failures: Vec<(PathBuf, String)> = Vec::new();

    for file in &files {
        let category = categories.category_for_path(file).to_string();
        match FileOrganizer::move_to_category(base_path, file, &category) {
            Ok(record) => {
                pb.println(format!(
                    " - {} → {}/",
                    record
                        .original_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    record.category
                ));
                *category_counts.entry(record.category).or_insert(0) += 1;
                moved += 1;
            }
            Err(e) => {
                pb.println(format!(" ✗ {}", e));
                failures.push((file.clone(), e.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    OutputFormatter::summary_table(&category_counts, moved);

    if failures.is_empty() {
        OutputFormatter::success("Organization complete!");
        Ok(())
    } else {
        let mut message = format!(
            "{} of {} files could not be organized:",
            failures.len(),
            files.len()
        );
        for (path, reason) in &failures {
            message.push_str(&format!("\n  {}: {}", path.display(), reason));
        }
        Err(message)
    }
}

/// Preview what [`organize_directory`] would do, without making changes.
pub fn organize_directory_dry_run(base_path: &Path, config: &Config) -> Result<(), String> {
    OutputFormatter::dry_run_notice(&format!(
        "Analyzing contents of: {}",
        base_path.display()
    ));

    let categories = CategoryMap::new(&config.file_categories);
    let files = collect_files(base_path)?;

    if files.is_empty() {
        OutputFormatter::plain("No files to organize.");
        return Ok(());
    }

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    for file in &files {
        let category = categories.category_for_path(file);
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        OutputFormatter::plain(&format!(" - {} → {}/", name, category));
        *category_counts.entry(category.to_string()).or_insert(0) += 1;
    }

    OutputFormatter::summary_table(&category_counts, files.len());
    OutputFormatter::dry_run_notice("No files were modified.");
    Ok(())
}

/// Analyze the tree rooted at `path` and print the report.
pub fn analyze_directory(path: &Path) -> Result<(), String> {
    OutputFormatter::info(&format!("Analyzing: {}", path.display()));
    let report =
        crate::analyzer::analyze(path).map_err(|e| format!("Analysis failed: {}", e))?;
    OutputFormatter::analysis_report(&report);
    Ok(())
}

/// Search the tree rooted at `path` for names containing `query`.
pub fn search_directory(path: &Path, query: &str) -> Result<(), String> {
    OutputFormatter::info(&format!("Searching {} for \"{}\"", path.display(), query));
    let matches =
        crate::search::search(path, query).map_err(|e| format!("Search failed: {}", e))?;
    OutputFormatter::search_results(&matches);
    Ok(())
}

/// Scaffold `destination/name/` from the configured template.
pub fn generate_project(
    name: &str,
    template_key: &str,
    destination: &Path,
    config: &Config,
) -> Result<(), String> {
    if !config.project_templates.contains_key(template_key) {
        OutputFormatter::warning(&format!(
            "Template \"{}\" is not configured; creating an empty project.",
            template_key
        ));
    }

    let entries = config.template(template_key);
    let outcome = scaffold_project(name, entries, destination)
        .map_err(|e| format!("Failed to create project: {}", e))?;

    OutputFormatter::success(&format!(
        "Project \"{}\" created at {}",
        name,
        outcome.project_path.display()
    ));

    let lines = structure_preview(&outcome.project_path);
    if !lines.is_empty() {
        OutputFormatter::header("Project structure");
        for line in &lines {
            OutputFormatter::plain(line);
        }
    }
    Ok(())
}

/// The direct-child regular files of `base_path`, in directory order.
fn collect_files(base_path: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(base_path)
        .map_err(|e| format!("Error reading directory {}: {}", base_path.display(), e))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
        {
            files.push(entry.path());
        }
    }
    Ok(files)
}
