//! Local-disk backend adapter.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::types::Visibility;

use super::{RawAttributes, Storage, StorageError};

/// MIME types recognised by the local backend, keyed by lowercase extension.
const MIME_BY_EXTENSION: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("pdf", "application/pdf"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("flac", "audio/flac"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("zip", "application/zip"),
    ("rar", "application/vnd.rar"),
    ("7z", "application/x-7z-compressed"),
    ("bin", "application/octet-stream"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("rtf", "application/rtf"),
    ("css", "text/css"),
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xls", "application/vnd.ms-excel"),
];

/// Backend rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    url_base: String,
}

impl LocalStorage {
    /// Create a backend serving `root`, with public URLs under `url_base`.
    pub fn new(root: impl Into<PathBuf>, url_base: impl Into<String>) -> Self {
        let url_base = url_base.into().trim_end_matches('/').to_string();
        Self { root: root.into(), url_base }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, path: &str) -> PathBuf {
        let rel = path.trim_matches('/');
        if rel.is_empty() { self.root.clone() } else { self.root.join(rel) }
    }
}

impl Storage for LocalStorage {
    fn list_contents(&self, path: &str) -> Result<Vec<RawAttributes>, StorageError> {
        let folder = path.trim_matches('/');
        let abs = self.absolute(folder);
        let read_dir =
            fs::read_dir(&abs).map_err(|source| StorageError::unavailable(folder, source))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| StorageError::unavailable(folder, source))?;
            let meta =
                entry.metadata().map_err(|source| StorageError::unavailable(folder, source))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel =
                if folder.is_empty() { name } else { format!("{folder}/{name}") };
            let last_modified = meta
                .modified()
                .ok()
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map(|since| since.as_secs() as i64);

            entries.push(RawAttributes {
                is_file: meta.is_file(),
                path: rel,
                visibility: Visibility::Public,
                last_modified,
                size: if meta.is_file() { meta.len() } else { 0 },
            });
        }

        Ok(entries)
    }

    fn mime_type(&self, path: &str) -> Result<String, StorageError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| StorageError::probe(path, "no extension to derive a type from"))?;

        MIME_BY_EXTENSION
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, mime)| (*mime).to_string())
            .ok_or_else(|| StorageError::probe(path, format!("unrecognised extension {extension:?}")))
    }

    fn url(&self, path: &str) -> String {
        let rel = path.trim_matches('/');
        if rel.is_empty() { self.url_base.clone() } else { format!("{}/{rel}", self.url_base) }
    }

    fn local_path(&self, path: &str) -> Option<PathBuf> {
        Some(self.absolute(path))
    }

    fn serves_thumbnails(&self) -> bool {
        true
    }
}
