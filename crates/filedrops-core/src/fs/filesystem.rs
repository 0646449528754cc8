//! File system root and entity factory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::FileSystemConfig;
use crate::error::CoreResult;
use crate::fs::backend::Backend;
use crate::fs::directory::Directory;
use crate::fs::file::File;
use crate::fs::os::OsBackend;
use crate::icon::{IconProvider, ThemeIconProvider};
use crate::scope::{Credentials, IdentityScopeExecutor, ScopedExecutor};

/// Default number of directory delete attempts.
pub const DEFAULT_DELETE_ATTEMPTS: u32 = 10;

/// Default pause between directory delete attempts.
pub const DEFAULT_DELETE_PAUSE: Duration = Duration::from_millis(50);

/// How often and how patiently [`Directory::delete`] retries a directory
/// that the backend reports as not empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    pause: Duration,
}

impl RetryPolicy {
    /// `attempts` is clamped to at least one.
    pub fn new(attempts: u32, pause: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            pause,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DELETE_ATTEMPTS, DEFAULT_DELETE_PAUSE)
    }
}

struct Inner {
    root: PathBuf,
    backend: Arc<dyn Backend>,
    credentials: Option<Credentials>,
    executor: Arc<dyn ScopedExecutor>,
    icons: Option<Arc<dyn IconProvider>>,
    delete_retry: RetryPolicy,
}

/// A storage backend rooted at a working directory.
///
/// `FileSystem` is a cheap, shareable handle. Every [`File`] and
/// [`Directory`] it constructs keeps a clone of the handle, so later
/// operations dispatch through the same backend and credentials. The
/// configuration is fixed once built.
///
/// # Examples
///
/// ```no_run
/// use filedrops_core::{FileSystem, SearchOption};
///
/// let fs = FileSystem::os("/srv/drops");
/// for file in fs.working_directory().get_files(SearchOption::AllLevels).unwrap() {
///     println!("{:?}", file.last_modified());
/// }
/// ```
#[derive(Clone)]
pub struct FileSystem {
    inner: Arc<Inner>,
}

impl FileSystem {
    /// Local disk file system rooted at `root`, without credentials.
    pub fn os(root: impl Into<PathBuf>) -> Self {
        Self::builder(Arc::new(OsBackend), root).build()
    }

    pub fn builder(backend: Arc<dyn Backend>, root: impl Into<PathBuf>) -> FileSystemBuilder {
        FileSystemBuilder {
            root: root.into(),
            backend,
            credentials: None,
            executor: None,
            icons: None,
            delete_retry: RetryPolicy::default(),
        }
    }

    /// Builds a local disk file system from persisted settings.
    pub fn from_config(config: &FileSystemConfig) -> Self {
        let mut builder = Self::builder(Arc::new(OsBackend), config.directory.clone())
            .delete_retry(config.retry_policy());
        if let Some(credentials) = config.credentials() {
            builder = builder.credentials(credentials);
        }
        if let Some(theme) = &config.icon_theme {
            builder = builder.icon_provider(Arc::new(ThemeIconProvider::new(theme)));
        }
        builder.build()
    }

    /// Creates a [`File`] bound to this file system.
    ///
    /// Relative paths are resolved against the root.
    pub fn construct_file(&self, path: impl AsRef<Path>) -> File {
        File::new(self.clone(), self.resolve(path.as_ref()))
    }

    /// Creates a [`Directory`] bound to this file system.
    ///
    /// Relative paths are resolved against the root.
    pub fn construct_directory(&self, path: impl AsRef<Path>) -> Directory {
        Directory::new(self.clone(), self.resolve(path.as_ref()))
    }

    /// The root directory.
    pub fn working_directory(&self) -> Directory {
        self.construct_directory(&self.inner.root)
    }

    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    pub fn backend(&self) -> &dyn Backend {
        self.inner.backend.as_ref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.inner.credentials.as_ref()
    }

    pub fn use_credentials(&self) -> bool {
        self.inner.credentials.is_some()
    }

    pub fn delete_retry(&self) -> RetryPolicy {
        self.inner.delete_retry
    }

    /// Returns `true` if both handles refer to the same file system instance.
    pub fn same_as(&self, other: &FileSystem) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn icon_provider(&self) -> Option<&dyn IconProvider> {
        self.inner.icons.as_deref()
    }

    /// Runs `op` under the configured credentials, or directly without them.
    pub(crate) fn run_io(&self, op: &mut dyn FnMut() -> CoreResult<()>) -> CoreResult<()> {
        match &self.inner.credentials {
            Some(credentials) => self.inner.executor.run_scoped(credentials, op),
            None => op(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || path.has_root() {
            path.to_path_buf()
        } else {
            self.inner.root.join(path)
        }
    }
}

impl fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystem")
            .field("root", &self.inner.root)
            .field("use_credentials", &self.use_credentials())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FOLDER: {}]", self.inner.root.display())
    }
}

/// Configures a [`FileSystem`]. Obtained from [`FileSystem::builder`].
pub struct FileSystemBuilder {
    root: PathBuf,
    backend: Arc<dyn Backend>,
    credentials: Option<Credentials>,
    executor: Option<Arc<dyn ScopedExecutor>>,
    icons: Option<Arc<dyn IconProvider>>,
    delete_retry: RetryPolicy,
}

impl FileSystemBuilder {
    /// Runs reads and writes under `credentials`.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Executor used for credential-scoped I/O.
    ///
    /// Defaults to [`IdentityScopeExecutor`].
    pub fn scoped_executor(mut self, executor: Arc<dyn ScopedExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn icon_provider(mut self, provider: Arc<dyn IconProvider>) -> Self {
        self.icons = Some(provider);
        self
    }

    pub fn delete_retry(mut self, policy: RetryPolicy) -> Self {
        self.delete_retry = policy;
        self
    }

    pub fn build(self) -> FileSystem {
        if self.credentials.is_some() && self.executor.is_none() {
            tracing::debug!(
                "no scoped executor configured for {}; using thread-local identity scope",
                self.root.display()
            );
        }
        FileSystem {
            inner: Arc::new(Inner {
                root: self.root,
                backend: self.backend,
                credentials: self.credentials,
                executor: self
                    .executor
                    .unwrap_or_else(|| Arc::new(IdentityScopeExecutor)),
                icons: self.icons,
                delete_retry: self.delete_retry,
            }),
        }
    }
}
