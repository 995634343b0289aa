//! Shared data structures exchanged between the engine and its callers.

use serde::{Deserialize, Serialize};

/// Kind of object a backend reported for a listed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
}

impl EntryType {
    pub fn is_dir(self) -> bool {
        self == EntryType::Dir
    }
}

/// Backend-reported visibility of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// Canonical per-entry descriptor produced from one raw storage attribute
/// record. Ephemeral: rebuilt on every listing call, never persisted.
///
/// `extension` and `mime_type` are populated only for files. `mime_type`
/// stays `None` until the probe runs, and remains `None` when the probe
/// failed for that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub entry_type: EntryType,
    pub basename: String,
    /// Backend-relative path without a leading slash.
    pub path: String,
    pub extension: Option<String>,
    /// Size in bytes; always 0 for directories.
    pub size: u64,
    pub visibility: Visibility,
    /// Seconds since the Unix epoch, when the backend reports one.
    pub last_modified: Option<i64>,
    pub mime_type: Option<String>,
}

/// Coarse display category derived from a raw MIME string and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeClass {
    Dir,
    Image,
    Pdf,
    Audio,
    Video,
    Text,
    File,
    /// Sentinel for MIME types with no matching rule.
    Unknown,
}

impl MimeClass {
    pub fn is_known(self) -> bool {
        self != MimeClass::Unknown
    }
}

/// The enriched presentation record returned to callers; serializes in the
/// camelCase shape the listing response uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    /// Stable content-addressed identity; doubles as the cache key.
    pub id: String,
    pub name: String,
    /// Normalized path with a leading slash.
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub mime_class: MimeClass,
    pub extension: Option<String>,
    pub size: u64,
    pub size_human: String,
    pub thumbnail: Option<String>,
    pub asset_url: String,
    /// Always true at this layer; authorization is decided elsewhere.
    pub can_act: bool,
    /// UI-only flag passed through untouched.
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `"WxH"`, set only for images whose header probe succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// Field a listing is ordered by. Size ordering is always descending
/// within each group; the other fields honor the configured direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Size,
    Modified,
    Extension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One segment of the breadcrumb chain for the current folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    /// Cumulative path up to and including this segment, leading slash.
    pub path: String,
}
