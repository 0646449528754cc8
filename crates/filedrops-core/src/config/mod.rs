//! Persisted backend configuration.
//!
//! A [`FileSystemConfig`] is stored as a TOML file and turned into a
//! [`FileSystem`](crate::FileSystem) with
//! [`FileSystem::from_config`](crate::FileSystem::from_config).

pub mod settings;

pub use settings::{CredentialsConfig, DeleteRetryConfig, FileSystemConfig};
