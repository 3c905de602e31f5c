//! Recursive directory analysis.
//!
//! A single best-effort walk over a tree producing totals, an extension
//! histogram, and the top-10 largest and most recently modified files.
//! Unreadable subtrees are skipped and the report covers whatever was
//! reachable; the report is built fresh per invocation and never persisted.

use crate::file_category::file_suffix;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Number of entries kept in each top-N list.
pub const TOP_ENTRIES: usize = 10;

/// Result of analyzing a directory tree.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// Number of regular files under the root (recursive).
    pub total_files: usize,
    /// Number of directories under the root (recursive, root excluded).
    pub total_folders: usize,
    /// Lowercased dot-suffix to file count; `""` buckets extensionless files.
    pub file_types: HashMap<String, usize>,
    /// Up to [`TOP_ENTRIES`] files, largest first.
    pub largest_files: Vec<(PathBuf, u64)>,
    /// Up to [`TOP_ENTRIES`] files, most recently modified first.
    pub recent_files: Vec<(PathBuf, SystemTime)>,
}

impl AnalysisReport {
    /// File type buckets sorted by descending count, for display.
    pub fn file_types_by_count(&self) -> Vec<(&str, usize)> {
        let mut buckets: Vec<_> = self
            .file_types
            .iter()
            .map(|(suffix, count)| (suffix.as_str(), *count))
            .collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        buckets
    }
}

/// Errors raised by analysis.
#[derive(Debug)]
pub enum AnalyzeError {
    /// The root is missing or not a directory.
    InvalidRoot { path: PathBuf },
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::InvalidRoot { path } => {
                write!(f, "Not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}

/// Analyze the tree rooted at `root`.
///
/// Walks every reachable entry once, then sorts the two accumulator lists
/// descending by their key and truncates them to [`TOP_ENTRIES`]. Access
/// errors below the root are swallowed so the report reflects the reachable
/// subset rather than aborting.
///
/// # Errors
///
/// Returns [`AnalyzeError::InvalidRoot`] when `root` is not a directory.
pub fn analyze(root: &Path) -> Result<AnalysisReport, AnalyzeError> {
    if !root.is_dir() {
        return Err(AnalyzeError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let mut report = AnalysisReport::default();
    walk(root, &mut report);

    report.largest_files.sort_by(|a, b| b.1.cmp(&a.1));
    report.recent_files.sort_by(|a, b| b.1.cmp(&a.1));
    report.largest_files.truncate(TOP_ENTRIES);
    report.recent_files.truncate(TOP_ENTRIES);
    Ok(report)
}

fn walk(dir: &Path, report: &mut AnalysisReport) {
    // Unreadable directory: keep whatever was gathered so far.
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };

        if metadata.is_dir() {
            report.total_folders += 1;
            walk(&path, report);
        } else if metadata.is_file() {
            report.total_files += 1;
            let suffix = file_suffix(&path).to_lowercase();
            *report.file_types.entry(suffix).or_insert(0) += 1;

            report.largest_files.push((path.clone(), metadata.len()));
            if let Ok(modified) = metadata.modified() {
                report.recent_files.push((path, modified));
            }
        }
    }
}
