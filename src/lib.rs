//! tidykit - a directory organization, analysis, and scaffolding utility
//!
//! This library provides utilities for categorizing files by extension,
//! organizing directories into category subfolders, listing and analyzing
//! directory trees, searching by name, and scaffolding new project
//! directories from configurable templates.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod listing;
pub mod output;
pub mod scaffold;
pub mod search;

pub use analyzer::{analyze, AnalysisReport, AnalyzeError};
pub use config::{Config, ConfigError};
pub use file_category::{file_suffix, CategoryMap, FALLBACK_CATEGORY};
pub use file_organizer::{FileOrganizer, MovedFile, OrganizeError};
pub use listing::{format_modified, format_size, list_directory, EntryInfo, EntryKind};
pub use scaffold::{scaffold_project, ScaffoldError, ScaffoldOutcome};
pub use search::{search, SearchMatch};

pub use cli::{run, Cli, Command};
