//! Category table and project template configuration.
//!
//! Configuration lives in a single JSON document with two top-level keys:
//! `file_categories` maps a category name to the dot-prefixed extensions it
//! covers, and `project_templates` maps a template name to an ordered list of
//! relative paths (entries ending with a path separator denote directories,
//! the rest denote empty files).
//!
//! The file is read once at startup. If it does not exist it is created with
//! the documented defaults; it is never rewritten automatically afterwards.
//!
//! # Configuration File Format
//!
//! ```json
//! {
//!   "file_categories": {
//!     "images": [".jpg", ".png"],
//!     "documents": [".pdf", ".txt"]
//!   },
//!   "project_templates": {
//!     "python": ["src/", "tests/", "README.md"]
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-user configuration document, stored in `$HOME`.
pub const CONFIG_FILE_NAME: &str = ".tidykit_config.json";

/// Errors that can occur while loading or creating the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The home directory could not be determined.
    HomeNotFound,
    /// Invalid JSON syntax or structure.
    ConfigInvalid { path: PathBuf, reason: String },
    /// IO error while reading or writing the configuration file.
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::HomeNotFound => {
                write!(f, "Could not determine home directory (HOME is not set)")
            }
            ConfigError::ConfigInvalid { path, reason } => {
                write!(f, "Invalid configuration {}: {}", path.display(), reason)
            }
            ConfigError::IoError { path, source } => {
                write!(f, "IO error accessing {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The in-memory configuration, shared read-only by every operation.
///
/// Both maps preserve the order they appear in on disk. Categorization is
/// first-match-wins over that order, so two categories claiming the same
/// extension resolve to whichever is configured first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Category name to the dot-prefixed extensions it covers.
    #[serde(default)]
    pub file_categories: IndexMap<String, Vec<String>>,

    /// Template name to an ordered list of relative paths.
    #[serde(default)]
    pub project_templates: IndexMap<String, Vec<String>>,
}

impl Config {
    /// Load the configuration, creating it with defaults if missing.
    ///
    /// With an explicit `config_path` the file is read from (or initialized
    /// at) that location; otherwise the per-user location under `$HOME` is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be resolved, the file
    /// cannot be read or written, or its contents are not valid JSON.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => Self::load_or_init(path),
            None => Self::load_or_init(&Self::default_location()?),
        }
    }

    /// The per-user configuration path: `$HOME/.tidykit_config.json`.
    pub fn default_location() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::HomeNotFound)?;
        Ok(PathBuf::from(home).join(CONFIG_FILE_NAME))
    }

    /// Read the configuration at `path`, or create it with defaults.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidykit::config::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load_or_init(Path::new("/tmp/tidykit.json")).unwrap();
    /// assert!(config.file_categories.contains_key("images"));
    /// ```
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| ConfigError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        } else {
            let config = Self::default();
            config.write_to(path)?;
            Ok(config)
        }
    }

    /// Write this configuration to `path` as pretty-printed JSON.
    fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: format!("JSON serialization failed: {}", e),
        })?;
        fs::write(path, json).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The template entries for `name`, or an empty slice for unknown keys.
    ///
    /// Unknown template keys are not an error: scaffolding with them creates
    /// the project root and nothing else.
    pub fn template(&self, name: &str) -> &[String] {
        self.project_templates
            .get(name)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut file_categories = IndexMap::new();
        file_categories.insert(
            "images".to_string(),
            string_vec(&[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg"]),
        );
        file_categories.insert(
            "documents".to_string(),
            string_vec(&[".pdf", ".doc", ".docx", ".txt", ".rtf"]),
        );
        file_categories.insert(
            "code".to_string(),
            string_vec(&[".py", ".js", ".html", ".css", ".java", ".cpp", ".c"]),
        );
        file_categories.insert(
            "archives".to_string(),
            string_vec(&[".zip", ".rar", ".7z", ".tar", ".gz"]),
        );
        file_categories.insert(
            "media".to_string(),
            string_vec(&[".mp4", ".avi", ".mkv", ".mp3", ".wav", ".flac"]),
        );

        let mut project_templates = IndexMap::new();
        project_templates.insert(
            "python".to_string(),
            string_vec(&["src/", "tests/", "docs/", "requirements.txt", "README.md"]),
        );
        project_templates.insert(
            "web".to_string(),
            string_vec(&["css/", "js/", "images/", "index.html"]),
        );
        project_templates.insert(
            "data_science".to_string(),
            string_vec(&["data/", "notebooks/", "models/", "src/"]),
        );

        Self {
            file_categories,
            project_templates,
        }
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
