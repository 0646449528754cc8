//! Shared entry contract for files and directories.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::error::{CoreError, CoreResult};
use crate::fs::directory::Directory;
use crate::fs::file::File;
use crate::fs::filesystem::FileSystem;
use crate::icon::{resolve_icon, IconImage, IconRequest, IconSize, IconVariant};

/// Well-known metadata keys.
pub mod meta {
    /// Byte length recorded by [`File::read`](crate::File::read).
    pub const SIZE: &str = "Size";
    /// Full path of the directory a file was listed from. Stored under
    /// `fileName` for compatibility with existing Filedrops consumers.
    pub const DIRECTORY_NAME: &str = "fileName";
    pub const LAST_ACCESSED: &str = "lastAccessed";
    pub const MODIFIED_DATE: &str = "modifiedDate";
}

/// Enumeration depth for directory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOption {
    /// Immediate children only.
    #[default]
    ThisLevelOnly,
    /// Every entry in the subtree.
    AllLevels,
}

/// State shared by every [`Entry`] implementation.
///
/// The parent directory is resolved from the full name on first access and
/// cached until the full name changes. It is a lookup, not an ownership
/// edge: a cached parent may go stale if the parent itself is renamed.
#[derive(Debug, Clone)]
pub struct EntryBase {
    file_system: FileSystem,
    full_name: PathBuf,
    parent: OnceCell<Option<Box<Directory>>>,
    metadata: BTreeMap<String, String>,
}

impl EntryBase {
    pub(crate) fn new(file_system: FileSystem, full_name: PathBuf) -> Self {
        Self {
            file_system,
            full_name,
            parent: OnceCell::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub(crate) fn set_full_name(&mut self, full_name: PathBuf) {
        self.full_name = full_name;
        self.parent = OnceCell::new();
    }

    pub(crate) fn set_parent(&mut self, parent: Directory) {
        debug_assert!(
            parent.file_system().same_as(&self.file_system),
            "parent must belong to the same file system"
        );
        self.parent = OnceCell::from(Some(Box::new(parent)));
    }

    fn parent(&self) -> Option<&Directory> {
        self.parent
            .get_or_init(|| {
                self.full_name
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| Box::new(self.file_system.construct_directory(p)))
            })
            .as_deref()
    }

    fn icon(&self, is_dir: bool, size: IconSize, variant: IconVariant) -> IconImage {
        let request = IconRequest {
            path: &self.full_name,
            is_dir,
            size,
            variant,
        };
        resolve_icon(self.file_system.icon_provider(), &request)
    }

    /// Moves the entry to `new_name` inside its current parent.
    pub(crate) fn rename(&mut self, new_name: &str) -> CoreResult<()> {
        if self.full_name.file_name() == Some(OsStr::new(new_name)) {
            return Ok(());
        }
        if !is_valid_filename(new_name) {
            return Err(CoreError::InvalidName(new_name.to_string()));
        }
        let parent = self
            .full_name
            .parent()
            .ok_or_else(|| CoreError::InvalidName("no parent directory".to_string()))?;
        let target = parent.join(new_name);
        let backend = self.file_system.backend();
        if backend.exists(&target) {
            return Err(CoreError::AlreadyExists(target));
        }

        backend
            .rename(&self.full_name, &target)
            .map_err(|e| CoreError::from_io(e, &self.full_name))?;

        tracing::info!(
            "renamed {} -> {}",
            self.full_name.display(),
            target.display()
        );
        self.set_full_name(target);
        Ok(())
    }
}

/// Identity, metadata and icon access common to files and directories.
pub trait Entry {
    /// Shared entry state.
    fn base(&self) -> &EntryBase;

    fn base_mut(&mut self) -> &mut EntryBase;

    fn is_dir(&self) -> bool;

    /// Checks the backend for the entry. Has no side effects.
    fn exists(&self) -> bool;

    /// Renames the entry within its parent directory.
    ///
    /// Renaming to the current name is a no-op and does not touch the backend.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidName`] if `new_name` is not a plain file name.
    /// - [`CoreError::AlreadyExists`] if a sibling already has that name.
    /// - [`CoreError::NotFound`] if the entry no longer exists.
    fn rename(&mut self, new_name: &str) -> CoreResult<()> {
        self.base_mut().rename(new_name)
    }

    /// Absolute path of the entry.
    fn full_name(&self) -> &Path {
        &self.base().full_name
    }

    /// Replaces the full name and invalidates the cached parent.
    fn set_full_name(&mut self, full_name: PathBuf) {
        self.base_mut().set_full_name(full_name);
    }

    /// Last path component, NFC-normalised.
    fn name(&self) -> String {
        self.full_name()
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default()
    }

    /// The containing directory, or `None` for a root.
    fn parent(&self) -> Option<&Directory> {
        self.base().parent()
    }

    fn file_system(&self) -> &FileSystem {
        &self.base().file_system
    }

    fn metadata(&self) -> &BTreeMap<String, String> {
        &self.base().metadata
    }

    /// Inserts or overwrites a metadata value.
    fn add_metadata(&mut self, key: &str, value: &str) {
        self.base_mut()
            .metadata
            .insert(key.to_string(), value.to_string());
    }

    /// Icon of the entry. Never fails; falls back to a blank image.
    fn icon(&self, size: IconSize) -> IconImage {
        self.base().icon(self.is_dir(), size, IconVariant::Closed)
    }
}

pub(crate) fn open_icon(base: &EntryBase, size: IconSize) -> IconImage {
    base.icon(true, size, IconVariant::Open)
}

/// A listed file or directory.
#[derive(Debug, Clone)]
pub enum FsEntry {
    File(File),
    Directory(Directory),
}

impl FsEntry {
    pub fn as_entry(&self) -> &dyn Entry {
        match self {
            FsEntry::File(file) => file,
            FsEntry::Directory(dir) => dir,
        }
    }

    pub fn full_name(&self) -> &Path {
        self.as_entry().full_name()
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsEntry::Directory(_))
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            FsEntry::File(file) => Some(file),
            FsEntry::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            FsEntry::Directory(dir) => Some(dir),
            FsEntry::File(_) => None,
        }
    }
}

impl From<File> for FsEntry {
    fn from(file: File) -> Self {
        FsEntry::File(file)
    }
}

impl From<Directory> for FsEntry {
    fn from(dir: Directory) -> Self {
        FsEntry::Directory(dir)
    }
}

fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
