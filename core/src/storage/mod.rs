//! Storage backend abstraction: local disk today, object stores behind the
//! same trait tomorrow.
//!
//! The engine never asks a backend "are you cloud-like"; the only two
//! capability queries are whether a path resolves to a local filesystem
//! location ([`Storage::local_path`]) and whether the backend can serve
//! image thumbnails from its public URL ([`Storage::serves_thumbnails`]).

pub mod local;

pub use local::LocalStorage;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Visibility;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The listing call itself failed. Never degraded: the whole listing
    /// operation fails with it.
    #[error("storage unavailable for {path:?}")]
    Unavailable {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A per-entry metadata probe failed. Call sites degrade the affected
    /// field to a sentinel instead of propagating.
    #[error("metadata probe failed for {path:?}: {reason}")]
    Probe { path: String, reason: String },
}

impl StorageError {
    pub fn unavailable(path: impl Into<String>, source: io::Error) -> Self {
        Self::Unavailable { path: path.into(), source }
    }

    pub fn probe(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Probe { path: path.into(), reason: reason.into() }
    }
}

/// Attributes a backend reports for one listed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttributes {
    pub is_file: bool,
    /// Backend-relative path without a leading slash.
    pub path: String,
    pub visibility: Visibility,
    /// Seconds since the Unix epoch, when known.
    pub last_modified: Option<i64>,
    /// Size in bytes; backends report 0 for directories.
    pub size: u64,
}

/// Capability surface the listing engine consumes.
pub trait Storage {
    /// List the immediate children of `path` (`""` is the root).
    fn list_contents(&self, path: &str) -> Result<Vec<RawAttributes>, StorageError>;

    /// Probe the MIME type of a file. Fails with [`StorageError::Probe`]
    /// when the backend cannot tell.
    fn mime_type(&self, path: &str) -> Result<String, StorageError>;

    /// Public URL for a backend path; `url("")` is the URL base.
    fn url(&self, path: &str) -> String;

    /// Absolute filesystem path for `path`, when the backend has one.
    /// Object-store backends return `None`, which also turns off local
    /// image dimension probing.
    fn local_path(&self, path: &str) -> Option<PathBuf>;

    /// Whether image thumbnails can be served straight from the backend's
    /// public URL.
    fn serves_thumbnails(&self) -> bool;
}
