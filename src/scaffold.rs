//! Project scaffolding from template path lists.
//!
//! A template is an ordered list of relative paths: entries ending with a
//! path separator become directories, the rest become empty files. Parent
//! directories are created implicitly and entries that already exist are
//! left untouched, so scaffolding the same project twice is a no-op.

use crate::listing::EntryKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while generating a project skeleton.
#[derive(Debug)]
pub enum ScaffoldError {
    /// The project name is empty.
    EmptyProjectName,
    /// Failed to create the project root directory.
    ProjectDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a template entry.
    EntryFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::EmptyProjectName => write!(f, "Project name must not be empty"),
            ScaffoldError::ProjectDirFailed { path, source } => {
                write!(
                    f,
                    "Failed to create project directory {}: {}",
                    path.display(),
                    source
                )
            }
            ScaffoldError::EntryFailed { path, source } => {
                write!(f, "Failed to create {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScaffoldError {}

/// What scaffolding produced.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// The project root, `destination/name`.
    pub project_path: PathBuf,
    /// Entries created by this run; existing entries are not listed.
    pub created: Vec<PathBuf>,
}

/// Create `destination/name/` and populate it from `entries`.
///
/// Each entry is interpreted relative to the project root. A trailing `/`
/// (or `\`) marks a directory; anything else becomes an empty file with its
/// parent directories created implicitly. Existing entries are skipped, so
/// re-running on the same destination raises no error. An empty entry list
/// creates only the project root.
///
/// # Errors
///
/// Returns an error on an empty name or on the first create failure; entries
/// already created in this run are kept.
pub fn scaffold_project(
    name: &str,
    entries: &[String],
    destination: &Path,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::EmptyProjectName);
    }

    let project_path = destination.join(name);
    fs::create_dir_all(&project_path).map_err(|e| ScaffoldError::ProjectDirFailed {
        path: project_path.clone(),
        source: e,
    })?;

    let mut created = Vec::new();
    for entry in entries {
        let is_dir = entry.ends_with('/') || entry.ends_with('\\');
        let relative = entry.trim_end_matches(['/', '\\']);
        if relative.is_empty() {
            continue;
        }
        let entry_path = project_path.join(relative);
        if entry_path.exists() {
            continue;
        }

        if is_dir {
            fs::create_dir_all(&entry_path).map_err(|e| ScaffoldError::EntryFailed {
                path: entry_path.clone(),
                source: e,
            })?;
        } else {
            if let Some(parent) = entry_path.parent() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::EntryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            fs::File::create(&entry_path).map_err(|e| ScaffoldError::EntryFailed {
                path: entry_path.clone(),
                source: e,
            })?;
        }
        created.push(entry_path);
    }

    Ok(ScaffoldOutcome {
        project_path,
        created,
    })
}

/// Render the tree under `root` as indented preview lines.
///
/// Directories are listed before files at each level, both sorted by name,
/// mirroring the listing order used elsewhere.
pub fn structure_preview(root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    preview_level(root, 0, &mut lines);
    lines
}

fn preview_level(dir: &Path, depth: usize, lines: &mut Vec<String>) {
    let entries = match crate::listing::list_directory(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries {
        let indent = "  ".repeat(depth);
        match entry.kind {
            EntryKind::Directory => {
                lines.push(format!("{}📁 {}", indent, entry.name));
                preview_level(&entry.path, depth + 1, lines);
            }
            EntryKind::File => lines.push(format!("{}📄 {}", indent, entry.name)),
        }
    }
}
