//! Navigation helpers: the parent pseudo-entry and the breadcrumb chain.

use crate::types::{Breadcrumb, EntryRecord, EntryType, MimeClass, RawEntry, Visibility};

use super::enrich::size_human;
use super::ident::generate_id;

/// Display name of the synthetic parent entry.
const PARENT_NAME: &str = "Go up";

/// Synthesize the "go up" record for the folder above `path`, or `None` at
/// the top level. The path is split on `/`; the parent is everything but
/// the last segment.
pub fn generate_parent(disk: &str, path: &str) -> Option<EntryRecord> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut segments: Vec<&str> = trimmed.split('/').collect();
    segments.pop();
    let parent_rel = segments.join("/");
    let basename = segments.last().copied().unwrap_or("").to_string();

    let raw = RawEntry {
        entry_type: EntryType::Dir,
        basename: basename.clone(),
        path: parent_rel.clone(),
        extension: None,
        size: 0,
        visibility: Visibility::Public,
        last_modified: None,
        mime_type: None,
    };

    Some(EntryRecord {
        id: generate_id(disk, &raw),
        name: PARENT_NAME.to_string(),
        path: format!("/{parent_rel}"),
        entry_type: EntryType::Dir,
        mime_class: MimeClass::Dir,
        extension: None,
        size: 0,
        size_human: size_human(0),
        thumbnail: None,
        asset_url: String::new(),
        can_act: true,
        is_loading: false,
        last_modified: None,
        date: None,
        dimensions: None,
    })
}

/// Breadcrumb chain for `path`, innermost segment first. Each crumb's path
/// is rebuilt from the segment index, so a folder that shares its name with
/// an ancestor still maps to the right sub-path.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    let mut crumbs: Vec<Breadcrumb> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| Breadcrumb {
            name: (*segment).to_string(),
            path: format!("/{}", segments[..=index].join("/")),
        })
        .collect();
    crumbs.reverse();
    crumbs
}
