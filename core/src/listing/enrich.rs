//! Metadata enrichment: turning an accepted raw entry into the full
//! presentation record.

use chrono::DateTime;
use tracing::warn;

use crate::config::ListingConfig;
use crate::storage::{Storage, StorageError};
use crate::types::{EntryRecord, MimeClass, RawEntry};

use super::classify::classify;
use super::filter::{self, AcceptPredicate};
use super::normalize::probe_mime;

/// Sentinel child basename that suppresses its parent directory entirely.
const HIDE_MARKER: &str = ".hide";

const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Builds [`EntryRecord`]s for one listing call. Pure with respect to its
/// inputs: the same entry, id, and ambient backend state always produce the
/// same record, which is what makes caching by id sound.
pub struct Enricher<'a> {
    storage: &'a dyn Storage,
    config: &'a ListingConfig,
    predicate: &'a AcceptPredicate,
}

impl std::fmt::Debug for Enricher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher").field("disk", &self.config.disk).finish()
    }
}

impl<'a> Enricher<'a> {
    pub fn new(
        storage: &'a dyn Storage,
        config: &'a ListingConfig,
        predicate: &'a AcceptPredicate,
    ) -> Self {
        Self { storage, config, predicate }
    }

    /// Produce the record for an entry, or `None` when the entry is not
    /// visible (rejected by the acceptance rules, or a directory carrying a
    /// hide marker). Only the hide-marker listing call can fail; every
    /// metadata probe degrades in place.
    pub fn enrich(
        &self,
        entry: &RawEntry,
        id: &str,
        folder: &str,
    ) -> Result<Option<EntryRecord>, StorageError> {
        if !filter::accept(entry, &self.config.exclusions, self.predicate) {
            return Ok(None);
        }
        if entry.entry_type.is_dir() && !folder_is_visible(self.storage, &entry.path)? {
            return Ok(None);
        }

        let mut entry = entry.clone();
        probe_mime(self.storage, &mut entry);

        let mime_class =
            classify(entry.entry_type, entry.mime_type.as_deref(), entry.extension.as_deref());
        let dimensions = if mime_class == MimeClass::Image {
            probe_dimensions(self.storage, &entry.path)
        } else {
            None
        };

        Ok(Some(EntryRecord {
            id: id.to_string(),
            name: entry.basename.clone(),
            path: format!("/{}", entry.path),
            entry_type: entry.entry_type,
            mime_class,
            thumbnail: thumbnail(self.storage, &entry, mime_class, folder),
            asset_url: join_url(&self.storage.url(""), &entry.basename),
            extension: entry.extension,
            size: entry.size,
            size_human: size_human(entry.size),
            can_act: true,
            is_loading: false,
            last_modified: entry.last_modified,
            date: entry.last_modified.and_then(format_date),
            dimensions,
        }))
    }
}

/// Whether a directory may appear in listings: hidden iff one of its
/// immediate children is named exactly `.hide`. One extra listing call per
/// directory; children are not inspected recursively.
pub fn folder_is_visible(storage: &dyn Storage, path: &str) -> Result<bool, StorageError> {
    let children = storage.list_contents(path)?;
    Ok(!children
        .iter()
        .any(|child| child.path.rsplit('/').next() == Some(HIDE_MARKER)))
}

/// Thumbnail reference for an entry, `None` for non-images. Backends that
/// serve thumbnails get their public URL; for the rest a `folder/basename`
/// path is the best-effort reference.
fn thumbnail(
    storage: &dyn Storage,
    entry: &RawEntry,
    mime_class: MimeClass,
    folder: &str,
) -> Option<String> {
    if mime_class != MimeClass::Image {
        return None;
    }
    if storage.serves_thumbnails() {
        Some(storage.url(&entry.path))
    } else {
        Some(format!("{}/{}", folder.trim_end_matches('/'), entry.basename))
    }
}

/// Read image pixel dimensions from the header, local backends only.
/// Every failure path degrades to `None`; a broken image never fails a
/// listing.
fn probe_dimensions(storage: &dyn Storage, path: &str) -> Option<String> {
    let local = storage.local_path(path)?;
    let reader = image::ImageReader::open(&local)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| {
            warn!(target: "listing::enrich", path = %local.display(), %err, "dimension probe failed to open");
        })
        .ok()?;
    match reader.into_dimensions() {
        Ok((width, height)) => Some(format!("{width}x{height}")),
        Err(err) => {
            warn!(target: "listing::enrich", path = %local.display(), %err, "dimension probe failed to decode");
            None
        }
    }
}

/// Human-readable byte count: 1024-based, whole numbers, `B` through `PB`.
pub fn size_human(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", value.round() as u64, SIZE_UNITS[unit])
}

fn format_date(epoch_secs: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|when| when.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn join_url(base: &str, tail: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), tail.trim_start_matches('/'))
}
