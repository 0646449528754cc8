//! Filedrops core library — backend-agnostic file system abstraction.
//!
//! `filedrops-core` models a tree of files and directories on top of a
//! pluggable storage [`Backend`]. Callers obtain a [`FileSystem`], ask for
//! its root [`Directory`] and enumerate, create, read, rename and delete
//! entries through it. Every entity keeps a handle to the file system that
//! built it, so later operations run against the same backend and
//! credentials.
//!
//! # Modules
//!
//! - [`fs`] — Entities ([`File`], [`Directory`], [`FileSystem`]) and backends ([`OsBackend`], [`MemoryBackend`]).
//! - [`scope`] — Credential-scoped execution ([`ScopedExecutor`]).
//! - [`icon`] — Entry icons and the [`IconProvider`] port.
//! - [`config`] — TOML settings for building a local-disk file system.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod icon;
pub mod scope;

pub use config::FileSystemConfig;
pub use error::{CoreError, CoreResult};
pub use fs::{
    meta, Backend, Directory, Entry, File, FileSystem, FileSystemBuilder, FileTimes, FsEntry,
    MemoryBackend, OsBackend, RetryPolicy, SearchOption,
};
pub use icon::{IconImage, IconProvider, IconRequest, IconSize, IconVariant, ThemeIconProvider};
pub use scope::{
    current_identity, Credentials, DirectExecutor, IdentityScopeExecutor, ScopedExecutor,
};
