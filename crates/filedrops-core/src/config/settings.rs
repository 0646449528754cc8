//! Backend settings loaded from a TOML file.
//!
//! ```toml
//! directory = "/srv/drops"
//! icon_theme = "/usr/share/filedrops/icons"
//!
//! [credentials]
//! username = "svc"
//! password = "secret"
//! domain = "CORP"
//!
//! [delete_retry]
//! attempts = 10
//! pause_ms = 50
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::filesystem::{RetryPolicy, DEFAULT_DELETE_ATTEMPTS, DEFAULT_DELETE_PAUSE};
use crate::scope::Credentials;

/// Settings for a local-disk [`FileSystem`](crate::FileSystem).
///
/// Only `directory` is required. Call [`FileSystemConfig::load`] to read
/// from a TOML path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSystemConfig {
    /// Root of the file system.
    pub directory: PathBuf,
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
    #[serde(default)]
    pub delete_retry: DeleteRetryConfig,
    /// Directory with PNG icons, see [`ThemeIconProvider`](crate::icon::ThemeIconProvider).
    #[serde(default)]
    pub icon_theme: Option<PathBuf>,
}

impl FileSystemConfig {
    /// A configuration rooted at `directory` with every other setting at its default.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            credentials: None,
            delete_retry: DeleteRetryConfig::default(),
            icon_theme: None,
        }
    }

    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Credentials to use, if any. A blank username disables them.
    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials
            .as_ref()
            .filter(|c| !c.username.trim().is_empty())
            .map(|c| Credentials::new(&c.username, &c.password, &c.domain))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.delete_retry.attempts,
            Duration::from_millis(self.delete_retry.pause_ms),
        )
    }
}

/// The `[credentials]` table.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub domain: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

/// The `[delete_retry]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRetryConfig {
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

impl Default for DeleteRetryConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            pause_ms: default_pause_ms(),
        }
    }
}

fn default_attempts() -> u32 {
    DEFAULT_DELETE_ATTEMPTS
}

fn default_pause_ms() -> u64 {
    DEFAULT_DELETE_PAUSE.as_millis() as u64
}
