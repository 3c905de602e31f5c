//! One-level directory listing.
//!
//! Produces display-ready entries for the direct children of a folder,
//! directories first, each group sorted by name. Entries are computed on
//! demand per call and never cached.

use crate::file_category::file_suffix;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Whether a listed entry is a directory or a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A single directory entry, computed per listing call.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// File or directory name.
    pub name: String,
    /// Full path of the entry.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes; zero for directories.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
    /// Dot-prefixed extension; empty for directories and extensionless files.
    pub suffix: String,
}

/// Errors raised by directory listing.
#[derive(Debug)]
pub enum ListError {
    /// The directory could not be read (missing, not a directory, denied).
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::ReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ListError {}

/// List the direct children of `path`, directories before files.
///
/// Entries whose metadata cannot be read are dropped from the listing rather
/// than failing the call.
///
/// # Errors
///
/// Returns [`ListError::ReadFailed`] when `path` itself cannot be read.
pub fn list_directory(path: &Path) -> Result<Vec<EntryInfo>, ListError> {
    let entries = fs::read_dir(path).map_err(|e| ListError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut directories: Vec<EntryInfo> = Vec::new();
    let mut files: Vec<EntryInfo> = Vec::new();

    for entry in entries.flatten() {
        let entry_path = entry.path();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };
        let name = entry.file_name().to_string_lossy().to_string();
        let modified = metadata.modified().ok();

        if metadata.is_dir() {
            directories.push(EntryInfo {
                name,
                path: entry_path,
                kind: EntryKind::Directory,
                size: 0,
                modified,
                suffix: String::new(),
            });
        } else if metadata.is_file() {
            let suffix = file_suffix(&entry_path);
            files.push(EntryInfo {
                name,
                path: entry_path,
                kind: EntryKind::File,
                size: metadata.len(),
                modified,
                suffix,
            });
        }
    }

    directories.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    directories.append(&mut files);
    Ok(directories)
}

/// Format a byte count as a human-readable size with two decimals.
///
/// # Examples
///
/// ```
/// use tidykit::listing::format_size;
///
/// assert_eq!(format_size(512), "512.00 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}

/// Format a modification timestamp as local `YYYY-MM-DD HH:MM`.
pub fn format_modified(timestamp: SystemTime) -> String {
    let local: DateTime<Local> = timestamp.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}
