//! Recursive filename search.
//!
//! Walks a tree collecting every entry whose name contains a query,
//! case-insensitively. Like analysis, the walk is best-effort: unreadable
//! subtrees are skipped silently and the results cover the reachable subset.

use crate::listing::EntryKind;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single search hit.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    /// Path relative to the search root.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes; zero for directories.
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Errors raised by search.
#[derive(Debug)]
pub enum SearchError {
    /// The root is missing or not a directory.
    InvalidRoot { path: PathBuf },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidRoot { path } => {
                write!(f, "Not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Find every entry under `root` whose name contains `query`.
///
/// Matching is a case-insensitive substring test on the file name, so an
/// empty query matches everything. Results are returned in walk order with
/// paths relative to `root`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRoot`] when `root` is not a directory.
pub fn search(root: &Path, query: &str) -> Result<Vec<SearchMatch>, SearchError> {
    if !root.is_dir() {
        return Err(SearchError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let needle = query.to_lowercase();
    let mut matches = Vec::new();
    walk(root, root, &needle, &mut matches);
    Ok(matches)
}

fn walk(root: &Path, dir: &Path, needle: &str, matches: &mut Vec<SearchMatch>) {
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

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.contains(needle) {
            let relative = path
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone());
            matches.push(SearchMatch {
                path: relative,
                kind: if metadata.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
                size: if metadata.is_file() { metadata.len() } else { 0 },
                modified: metadata.modified().ok(),
            });
        }

        if metadata.is_dir() {
            walk(root, &path, needle, matches);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn build_tree(base: &Path) {
        fs::create_dir_all(base.join("photos/old")).expect("Failed to create dirs");
        fs::write(base.join("photos/Holiday.png"), "png").expect("write");
        fs::write(base.join("photos/old/holiday_2019.png"), "png").expect("write");
        fs::write(base.join("notes.txt"), "text").expect("write");
    }

    #[test]
    fn test_search_finds_nested_matches_case_insensitively() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        build_tree(temp_dir.path());

        let matches = search(temp_dir.path(), "HOLIDAY").expect("Search failed");
        let mut paths: Vec<_> = matches
            .iter()
            .map(|m| m.path.to_string_lossy().to_string())
            .collect();
        paths.sort();
        assert_eq!(paths, vec!["photos/Holiday.png", "photos/old/holiday_2019.png"]);
    }

    #[test]
    fn test_search_matches_directories_too() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        build_tree(temp_dir.path());

        let matches = search(temp_dir.path(), "photos").expect("Search failed");
        assert!(matches.iter().any(|m| m.kind == EntryKind::Directory));
    }

    #[test]
    fn test_search_no_matches() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        build_tree(temp_dir.path());

        let matches = search(temp_dir.path(), "missing").expect("Search failed");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        build_tree(temp_dir.path());

        let matches = search(temp_dir.path(), "").expect("Search failed");
        // photos, photos/old, three files
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn test_search_invalid_root() {
        let result = search(Path::new("/no/such/root"), "x");
        assert!(matches!(result, Err(SearchError::InvalidRoot { .. })));
    }
}
