//! File system abstractions for Filedrops.
//!
//! A [`FileSystem`] owns a [`Backend`] and a root path and acts as the
//! factory for [`File`] and [`Directory`] entities. Directory traversal only
//! talks to the [`Backend`] trait, so any backend can be substituted without
//! touching the traversal code.

pub mod backend;
pub mod directory;
pub mod entry;
pub mod file;
pub mod filesystem;
pub mod memory;
pub mod os;

pub use backend::{Backend, FileTimes};
pub use directory::Directory;
pub use entry::{meta, Entry, FsEntry, SearchOption};
pub use file::File;
pub use filesystem::{FileSystem, FileSystemBuilder, RetryPolicy};
pub use memory::MemoryBackend;
pub use os::OsBackend;
