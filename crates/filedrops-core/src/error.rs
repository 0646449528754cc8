//! Error types for `filedrops-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::io;
use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Structural failures carry the offending path so callers can show a
/// meaningful message without extra bookkeeping.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target file does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// A directory could not be listed.
    #[error("directory not found: please verify that {path} is a valid directory")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `Directory::create` was called on a path that already exists.
    #[error("directory already exists: {0}")]
    DirectoryAlreadyExists(PathBuf),

    /// A rename target is already taken.
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A parent directory is missing and automatic creation was disabled.
    #[error("directory creation failed: {0}")]
    DirectoryCreationFailed(PathBuf),

    /// The backend refused to remove a directory because it still has entries.
    #[error("directory not empty: {0}")]
    DirectoryNotEmpty(PathBuf),

    /// A directory stayed non-empty for every delete attempt.
    #[error("gave up deleting {path} after {attempts} attempts")]
    DirectoryDeleteTimedOut { path: PathBuf, attempts: u32 },

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// A file filter is not a valid regular expression.
    #[error("invalid filter {filter:?}: {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: regex::Error,
    },

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The scoped executor could not enter or run under the requested identity.
    #[error("scoped execution failed: {0}")]
    Scope(String),

    /// An icon provider failed to produce an image.
    #[error("icon error: {0}")]
    Icon(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CoreError {
    /// Maps a backend I/O error on `path` to the matching variant.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::DirectoryNotEmpty => CoreError::DirectoryNotEmpty(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => CoreError::AlreadyExists(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `filedrops-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/file"));
        assert_eq!(err.to_string(), "path not found: /missing/file");
    }

    #[test]
    fn directory_not_found_asks_to_verify_path() {
        let err = CoreError::DirectoryNotFound {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.to_string(),
            "directory not found: please verify that /nope is a valid directory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn creation_failed_names_parent() {
        let err = CoreError::DirectoryCreationFailed(PathBuf::from("/a/b"));
        assert_eq!(err.to_string(), "directory creation failed: /a/b");
    }

    #[test]
    fn delete_timed_out_reports_attempts() {
        let err = CoreError::DirectoryDeleteTimedOut {
            path: PathBuf::from("/busy"),
            attempts: 10,
        };
        assert_eq!(err.to_string(), "gave up deleting /busy after 10 attempts");
    }

    #[test]
    fn invalid_name_displays_message() {
        let err = CoreError::InvalidName("bad/name".to_string());
        assert_eq!(err.to_string(), "invalid name: bad/name");
    }

    #[test]
    fn from_io_classifies_kinds() {
        let path = Path::new("/x");

        let err = CoreError::from_io(io::Error::from(io::ErrorKind::NotFound), path);
        assert!(matches!(err, CoreError::NotFound(p) if p == path));

        let err = CoreError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), path);
        assert!(matches!(err, CoreError::PermissionDenied(_)));

        let err = CoreError::from_io(io::Error::from(io::ErrorKind::DirectoryNotEmpty), path);
        assert!(matches!(err, CoreError::DirectoryNotEmpty(_)));

        let err = CoreError::from_io(io::Error::from(io::ErrorKind::AlreadyExists), path);
        assert!(matches!(err, CoreError::AlreadyExists(_)));

        let err = CoreError::from_io(io::Error::new(io::ErrorKind::Other, "boom"), path);
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn io_error_from_std() {
        let io_err = io::Error::new(io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn error_is_debug() {
        let err = CoreError::NotFound(PathBuf::from("/test"));
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
