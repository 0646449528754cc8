//! Storage backend port.
//!
//! A [`Backend`] is the raw I/O surface a [`FileSystem`](super::FileSystem)
//! dispatches through. Implementations report failures as plain
//! [`std::io::Error`]s; the entity layer classifies them by
//! [`io::ErrorKind`] (see [`CoreError::from_io`](crate::CoreError::from_io)).
//!
//! Two implementations ship with the crate: [`OsBackend`](super::OsBackend)
//! for the local disk and [`MemoryBackend`](super::MemoryBackend) for an
//! in-process tree.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Access and modification timestamps of a backend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimes {
    pub accessed: SystemTime,
    pub modified: SystemTime,
}

/// Raw storage operations used by files and directories.
///
/// Listing methods return absolute paths of the immediate children, in
/// whatever order the backend produces them.
pub trait Backend: fmt::Debug + Send + Sync {
    /// Lists the files directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be opened as a directory.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Lists the directories directly inside `dir`.
    fn list_directories(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Reads the full contents of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates or truncates `path` and writes `contents` to it.
    ///
    /// The parent directory must already exist.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates `path` and every missing ancestor.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Removes a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Removes a directory.
    ///
    /// When `recursive` is `false` a directory that still has entries fails
    /// with [`io::ErrorKind::DirectoryNotEmpty`].
    fn remove_dir(&self, path: &Path, recursive: bool) -> io::Result<()>;

    /// Moves `from` to `to`. Atomic where the backend can guarantee it.
    ///
    /// Never replaces an existing entry: if `to` is taken, fails with
    /// [`io::ErrorKind::AlreadyExists`] and leaves both paths untouched.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Returns `true` if `path` exists and is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns the access and modification timestamps of `path`.
    fn times(&self, path: &Path) -> io::Result<FileTimes>;

    /// Returns `true` if `path` exists as either a file or a directory.
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }
}
