//! Conversion of raw storage attributes into canonical entry descriptors.

use std::path::Path;

use tracing::warn;

use crate::storage::{RawAttributes, Storage};
use crate::types::{EntryType, RawEntry};

/// Build the canonical descriptor for one raw attribute record.
///
/// The MIME field is left unset here; [`probe_mime`] fills it lazily so a
/// cache hit on the enriched record skips the probe entirely.
pub fn normalize(attrs: &RawAttributes) -> RawEntry {
    let path = attrs.path.trim_matches('/').to_string();
    let basename = path.rsplit('/').next().unwrap_or(path.as_str()).to_string();
    let entry_type = if attrs.is_file { EntryType::File } else { EntryType::Dir };

    let extension = if attrs.is_file {
        Path::new(&basename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    } else {
        None
    };

    RawEntry {
        entry_type,
        basename,
        path,
        extension,
        size: if attrs.is_file { attrs.size } else { 0 },
        visibility: attrs.visibility,
        last_modified: attrs.last_modified,
        mime_type: None,
    }
}

/// Probe and record the MIME type of a file entry. Probe failures degrade
/// to `None` so one unreadable entry never fails the whole listing;
/// directories are left untouched.
pub fn probe_mime(storage: &dyn Storage, entry: &mut RawEntry) {
    if entry.entry_type.is_dir() {
        return;
    }
    entry.mime_type = match storage.mime_type(&entry.path) {
        Ok(mime) => Some(mime),
        Err(err) => {
            warn!(target: "listing::normalize", path = %entry.path, %err, "mime probe failed");
            None
        }
    };
}
