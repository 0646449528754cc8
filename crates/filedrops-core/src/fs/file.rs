//! File entity.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{meta, Entry, EntryBase};
use crate::fs::filesystem::FileSystem;

/// A single file bound to the [`FileSystem`] that constructed it.
///
/// `bytes_content` is `None` until the file is read or content is assigned;
/// `Some(vec![])` is a genuinely empty file.
///
/// # Examples
///
/// ```no_run
/// use filedrops_core::{Entry, FileSystem};
///
/// let fs = FileSystem::os("/tmp/drops");
/// let mut file = fs.construct_file("notes/today.txt");
/// file.set_bytes_content(Some(b"hello".to_vec()));
/// file.create(true).unwrap();
/// assert!(file.exists());
/// ```
#[derive(Debug, Clone)]
pub struct File {
    base: EntryBase,
    bytes_content: Option<Vec<u8>>,
    last_modified: Option<SystemTime>,
}

impl File {
    pub(crate) fn new(file_system: FileSystem, full_name: PathBuf) -> Self {
        Self {
            base: EntryBase::new(file_system, full_name),
            bytes_content: None,
            last_modified: None,
        }
    }

    pub fn bytes_content(&self) -> Option<&[u8]> {
        self.bytes_content.as_deref()
    }

    /// Sets the content written by the next [`File::create`].
    pub fn set_bytes_content(&mut self, content: Option<Vec<u8>>) {
        self.bytes_content = content;
    }

    pub fn take_bytes_content(&mut self) -> Option<Vec<u8>> {
        self.bytes_content.take()
    }

    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }

    pub fn set_last_modified(&mut self, modified: Option<SystemTime>) {
        self.last_modified = modified;
    }

    /// Loads the file contents into [`File::bytes_content`] and records the
    /// `"Size"` metadata entry.
    ///
    /// Runs under the file system's credentials when they are configured.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if it cannot be read.
    pub fn read(&mut self) -> CoreResult<()> {
        let fs = self.file_system().clone();
        let path = self.full_name().to_path_buf();

        let mut content = None;
        fs.run_io(&mut || {
            let bytes = fs
                .backend()
                .read(&path)
                .map_err(|e| CoreError::from_io(e, &path))?;
            content = Some(bytes);
            Ok(())
        })?;
        let bytes = content
            .ok_or_else(|| CoreError::Scope("read operation was not executed".to_string()))?;

        tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
        self.add_metadata(meta::SIZE, &bytes.len().to_string());
        self.bytes_content = Some(bytes);
        Ok(())
    }

    /// Writes the file to the backend.
    ///
    /// A missing parent directory is created when `create_directory_path` is
    /// `true`. Without content an empty file is created. Runs under the file
    /// system's credentials when they are configured.
    ///
    /// # Errors
    ///
    /// - [`CoreError::DirectoryCreationFailed`] if the parent is missing and
    ///   `create_directory_path` is `false`.
    /// - [`CoreError::Io`] for any other write failure.
    pub fn create(&self, create_directory_path: bool) -> CoreResult<()> {
        let fs = self.file_system();
        let path = self.full_name();
        let parent = self.parent().map(|p| p.full_name().to_path_buf());
        let contents = self.bytes_content.as_deref().unwrap_or(&[]);

        fs.run_io(&mut || {
            let backend = fs.backend();
            if let Some(parent) = &parent {
                if !backend.is_dir(parent) {
                    if !create_directory_path {
                        return Err(CoreError::DirectoryCreationFailed(parent.clone()));
                    }
                    backend
                        .create_dir_all(parent)
                        .map_err(|e| CoreError::from_io(e, parent))?;
                    tracing::info!("created directory {}", parent.display());
                }
            }
            backend
                .write(path, contents)
                .map_err(|e| CoreError::from_io(e, path))
        })?;

        tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    /// Removes the file.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    pub fn delete(&self) -> CoreResult<()> {
        let path = self.full_name();
        self.file_system()
            .backend()
            .remove_file(path)
            .map_err(|e| CoreError::from_io(e, path))?;
        tracing::info!("deleted {}", path.display());
        Ok(())
    }
}

impl Entry for File {
    fn base(&self) -> &EntryBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntryBase {
        &mut self.base
    }

    fn is_dir(&self) -> bool {
        false
    }

    fn exists(&self) -> bool {
        self.file_system().backend().is_file(self.full_name())
    }
}
