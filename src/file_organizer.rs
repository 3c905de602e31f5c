/// File organization: moving files into category subdirectories.
///
/// This module provides the per-file move primitive used by the organize
/// command. Category directories are created on demand (the fallback
/// category included) and the move itself is a rename, so a destination
/// collision resolves with the platform's rename semantics (overwrite on
/// Unix). The batch loop and its skip-and-continue policy live in
/// [`crate::cli`].
use std::fs;
use std::path::{Path, PathBuf};

/// Record of a single completed move.
#[derive(Debug, Clone)]
pub struct MovedFile {
    /// Where the file was before organization.
    pub original_path: PathBuf,
    /// Where the file ended up.
    pub new_path: PathBuf,
    /// The category folder it was moved into.
    pub category: String,
}

/// Errors that can occur while moving a file into its category directory.
#[derive(Debug)]
pub enum OrganizeError {
    /// The base directory path is invalid or doesn't exist.
    InvalidBasePath {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBasePath { path, source } => {
                write!(f, "Invalid base path {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves files into category subdirectories of a base directory.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Move a file into `base_path/<category_dir_name>/`.
    ///
    /// The category directory is created if missing (idempotent), and the
    /// base path is validated before anything is touched. Returns a record of
    /// the completed move.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The directory being organized
    /// * `file_path` - The full path to the file to be moved
    /// * `category_dir_name` - The name of the category subdirectory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidykit::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let moved = FileOrganizer::move_to_category(
    ///     Path::new("/home/user/Downloads"),
    ///     Path::new("/home/user/Downloads/photo.png"),
    ///     "images",
    /// );
    ///
    /// match moved {
    ///     Ok(record) => println!("Moved to {}", record.new_path.display()),
    ///     Err(e) => eprintln!("Move failed: {}", e),
    /// }
    /// ```
    pub fn move_to_category(
        base_path: &Path,
        file_path: &Path,
        category_dir_name: &str,
    ) -> OrganizeResult<MovedFile> {
        if !base_path.exists() {
            return Err(OrganizeError::InvalidBasePath {
                path: base_path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "base path does not exist",
                ),
            });
        }

        let category_path = base_path.join(category_dir_name);
        if !category_path.exists() {
            fs::create_dir(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            })?;
        }

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: category_path.clone(),
                source_error: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination_path = category_path.join(file_name);

        fs::rename(file_path, &destination_path).map_err(|e| OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_path.clone(),
            source_error: e,
        })?;

        Ok(MovedFile {
            original_path: file_path.to_path_buf(),
            new_path: destination_path,
            category: category_dir_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_move_to_category_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let record = FileOrganizer::move_to_category(base_path, &file_path, "documents")
            .expect("Failed to move file");

        let category_dir = base_path.join("documents");
        assert!(category_dir.is_dir());
        assert!(!file_path.exists());
        assert!(category_dir.join("test.txt").exists());

        assert_eq!(record.original_path, file_path);
        assert_eq!(record.new_path, category_dir.join("test.txt"));
        assert_eq!(record.category, "documents");
    }

    #[test]
    fn test_move_to_category_uses_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("images");
        fs::create_dir(&category_dir).expect("Failed to create category directory");

        let file_path = base_path.join("test.png");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        FileOrganizer::move_to_category(base_path, &file_path, "images")
            .expect("Failed to move file");

        assert!(!file_path.exists());
        assert!(category_dir.join("test.png").exists());
    }

    #[test]
    fn test_move_to_category_invalid_base_path() {
        let non_existent = Path::new("/non/existent/path");
        let file_path = Path::new("/some/file.txt");

        let result = FileOrganizer::move_to_category(non_existent, file_path, "documents");
        assert!(matches!(result, Err(OrganizeError::InvalidBasePath { .. })));
    }

    #[test]
    fn test_move_to_category_overwrites_on_collision() {
        // Documents the collision policy: rename replaces an existing
        // destination file on Unix.
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("documents");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        fs::write(category_dir.join("note.txt"), "old").expect("Failed to write existing file");

        let file_path = base_path.join("note.txt");
        fs::write(&file_path, "new").expect("Failed to write test file");

        FileOrganizer::move_to_category(base_path, &file_path, "documents")
            .expect("Failed to move file");

        let content =
            fs::read_to_string(category_dir.join("note.txt")).expect("Failed to read moved file");
        assert_eq!(content, "new");
    }
}
