//! Visibility decisions: which raw entries make it into a listing at all,
//! and the named extension filters applied afterwards.

use std::collections::HashSet;

use crate::config::ExclusionRules;
use crate::types::{EntryRecord, EntryType, RawEntry};

/// Caller-supplied acceptance hook evaluated after the built-in rules.
pub type AcceptPredicate = dyn Fn(&RawEntry) -> bool + Send + Sync;

/// Default acceptance hook. It repeats the built-in dotfile rule, which
/// keeps the hook point in place for callers that swap in their own.
pub fn default_predicate(entry: &RawEntry) -> bool {
    !entry.basename.starts_with('.')
}

/// Decide whether an entry is visible at all. Rejections: dotfile
/// basenames, excluded extensions, excluded folder/file names, and finally
/// whatever the custom predicate says.
pub fn accept(entry: &RawEntry, rules: &ExclusionRules, predicate: &AcceptPredicate) -> bool {
    if entry.basename.starts_with('.') {
        return false;
    }
    if let Some(extension) = &entry.extension {
        if rules.extensions.contains(extension) {
            return false;
        }
    }
    let name_excluded = match entry.entry_type {
        EntryType::Dir => rules.folder_names.contains(&entry.basename),
        EntryType::File => rules.file_names.contains(&entry.basename),
    };
    if name_excluded {
        return false;
    }
    predicate(entry)
}

/// Apply a named filter's allowed-extension set to an enriched set.
/// Directories always pass; files survive only with an allowed extension.
/// An empty set therefore yields directories only, which is how an
/// unconfigured filter key behaves.
pub fn apply_named_filter(records: Vec<EntryRecord>, allowed: &HashSet<String>) -> Vec<EntryRecord> {
    records
        .into_iter()
        .filter(|record| {
            record.entry_type.is_dir()
                || record.extension.as_ref().is_some_and(|ext| allowed.contains(ext))
        })
        .collect()
}
