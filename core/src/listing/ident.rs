//! Stable identity derivation for entries.

use crate::types::RawEntry;

/// Derive the content-addressed id for an entry: a blake3 digest over the
/// disk identifier, trimmed basename, and modification time (omitted when
/// the backend reported none). Deterministic across process restarts, which
/// is what makes it usable as a cache key and a client-side diffing handle.
pub fn generate_id(disk: &str, entry: &RawEntry) -> String {
    let basename = entry.basename.trim();
    let mut input = String::with_capacity(disk.len() + basename.len() + 24);
    input.push_str(disk);
    input.push('_');
    input.push_str(basename);
    if let Some(modified) = entry.last_modified {
        input.push_str(&modified.to_string());
    }
    blake3::hash(input.as_bytes()).to_hex().to_string()
}
