//! Output formatting and styling module.
//!
//! Centralizes all CLI output: colored status lines, progress bars, and the
//! tables rendered for listings, analysis reports, and search results.

use crate::analyzer::AnalysisReport;
use crate::listing::{format_modified, format_size, EntryInfo, EntryKind};
use crate::search::SearchMatch;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a progress bar for batch file operations.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tidykit::output::OutputFormatter;
    /// let pb = OutputFormatter::create_progress_bar(100);
    /// pb.inc(1);
    /// pb.finish_and_clear();
    /// ```
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints a summary table of files per category.
    pub fn summary_table(category_counts: &HashMap<String, usize>, total_files: usize) {
        Self::header("SUMMARY");

        // Sort categories for consistent output
        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        let max_category_len = categories
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in &categories {
            let file_word = if **count == 1 { "file" } else { "files" };
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                file_word,
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            if total_files == 1 { "file" } else { "files" },
            width = max_category_len
        );
    }

    /// Prints a one-level directory listing, directories first.
    pub fn listing_table(entries: &[EntryInfo]) {
        if entries.is_empty() {
            Self::plain("(empty directory)");
            return;
        }

        let max_name_len = entries
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(0)
            .max(4);

        println!(
            "{:<width$}  {:>10}  {:<10}  {}",
            "Name".bold(),
            "Size".bold(),
            "Type".bold(),
            "Modified".bold(),
            width = max_name_len
        );

        for entry in entries {
            let (size, kind) = match entry.kind {
                EntryKind::Directory => (String::new(), "Directory".to_string()),
                EntryKind::File => (format_size(entry.size), entry.suffix.clone()),
            };
            let modified = entry
                .modified
                .map(format_modified)
                .unwrap_or_default();
            let name = if entry.kind == EntryKind::Directory {
                entry.name.blue().bold().to_string()
            } else {
                entry.name.clone()
            };
            println!(
                "{:<width$}  {:>10}  {:<10}  {}",
                name,
                size,
                kind,
                modified,
                width = max_name_len
            );
        }
    }

    /// Prints a full analysis report: totals, type histogram, top-10 lists.
    pub fn analysis_report(report: &AnalysisReport) {
        Self::header("DIRECTORY ANALYSIS");
        println!("Total files:   {}", report.total_files.to_string().green());
        println!(
            "Total folders: {}",
            report.total_folders.to_string().green()
        );

        Self::header("File type distribution");
        if report.file_types.is_empty() {
            Self::plain("(no files)");
        }
        for (suffix, count) in report.file_types_by_count().into_iter().take(10) {
            let label = if suffix.is_empty() {
                "(no extension)"
            } else {
                suffix
            };
            println!(
                "  {:<16} {} {}",
                label,
                count.to_string().green(),
                if count == 1 { "file" } else { "files" }
            );
        }

        Self::header("Largest files");
        if report.largest_files.is_empty() {
            Self::plain("(none)");
        }
        for (path, size) in &report.largest_files {
            println!("  {:>10}  {}", format_size(*size), path.display());
        }

        Self::header("Recently modified");
        if report.recent_files.is_empty() {
            Self::plain("(none)");
        }
        for (path, modified) in &report.recent_files {
            println!("  {}  {}", format_modified(*modified), path.display());
        }
    }

    /// Prints search results with per-entry detail lines.
    pub fn search_results(matches: &[SearchMatch]) {
        if matches.is_empty() {
            Self::plain("No matches found.");
            return;
        }

        for hit in matches {
            match hit.kind {
                EntryKind::Directory => {
                    println!(" 📁 {}", hit.path.display().to_string().blue().bold());
                }
                EntryKind::File => {
                    let modified = hit.modified.map(format_modified).unwrap_or_default();
                    println!(
                        " 📄 {}  ({}, {})",
                        hit.path.display(),
                        format_size(hit.size),
                        modified
                    );
                }
            }
        }
        println!(
            "\n{} {}",
            matches.len().to_string().green(),
            if matches.len() == 1 { "match" } else { "matches" }
        );
    }
}
