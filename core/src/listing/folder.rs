//! Listing orchestration: normalize, identify, cache-or-enrich, filter,
//! and order a whole folder.

use std::cmp::Ordering;

use anyhow::Context;
use tracing::debug;

use crate::cache::{CacheGate, CacheStore};
use crate::config::ListingConfig;
use crate::storage::Storage;
use crate::types::{EntryRecord, EntryType, SortDirection, SortField};

use super::enrich::Enricher;
use super::filter::{self, AcceptPredicate};
use super::ident::generate_id;
use super::normalize::normalize;
use super::Result;

/// Drives the full pipeline for a backend + configuration pair.
pub struct Lister<'a> {
    storage: &'a dyn Storage,
    config: &'a ListingConfig,
    cache: Option<&'a dyn CacheStore>,
    predicate: &'a AcceptPredicate,
}

impl std::fmt::Debug for Lister<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lister")
            .field("disk", &self.config.disk)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl<'a> Lister<'a> {
    pub fn new(storage: &'a dyn Storage, config: &'a ListingConfig) -> Self {
        Self { storage, config, cache: None, predicate: &filter::default_predicate }
    }

    /// Attach a cache store; it only takes effect when the configuration
    /// also carries a TTL.
    pub fn with_cache(mut self, store: &'a dyn CacheStore) -> Self {
        self.cache = Some(store);
        self
    }

    /// Replace the custom acceptance hook.
    pub fn with_predicate(mut self, predicate: &'a AcceptPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// List `folder`, returning enriched records ordered with directories
    /// first. A failing listing call fails the whole operation; per-entry
    /// metadata problems degrade inside the records instead.
    pub fn list_folder(
        &self,
        folder: &str,
        order: SortField,
        filter_key: Option<&str>,
    ) -> Result<Vec<EntryRecord>> {
        let folder = folder.trim_matches('/');
        let raw = self
            .storage
            .list_contents(folder)
            .with_context(|| format!("listing folder {folder:?}"))?;
        debug!(target: "listing", folder, entries = raw.len(), "listing folder");

        let gate = CacheGate::new(self.cache, self.config.cache_ttl());
        let enricher = Enricher::new(self.storage, self.config, self.predicate);

        let mut records = Vec::with_capacity(raw.len());
        for attrs in &raw {
            let entry = normalize(attrs);
            let id = generate_id(&self.config.disk, &entry);
            let record = gate.remember(&id, || {
                enricher.enrich(&entry, &id, folder).map_err(anyhow::Error::from)
            })?;
            if let Some(record) = record {
                records.push(record);
            }
        }

        if let Some(key) = filter_key {
            if !self.config.filters.is_empty() {
                // An unconfigured key behaves as a filter matching nothing:
                // directories survive, files do not.
                let allowed = self.config.filter(key).cloned().unwrap_or_default();
                records = filter::apply_named_filter(records, &allowed);
            }
        }

        Ok(order_records(records, order, self.config.direction))
    }
}

/// Partition into directories and files, sort each group, and put the
/// directories first whatever the field and direction.
fn order_records(
    records: Vec<EntryRecord>,
    field: SortField,
    direction: SortDirection,
) -> Vec<EntryRecord> {
    let (mut dirs, mut files): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|record| record.entry_type == EntryType::Dir);

    sort_group(&mut dirs, field, direction);
    sort_group(&mut files, field, direction);

    dirs.extend(files);
    dirs
}

fn sort_group(group: &mut [EntryRecord], field: SortField, direction: SortDirection) {
    if field == SortField::Size {
        // Size ordering has no ascending mode.
        group.sort_by(|a, b| b.size.cmp(&a.size));
        return;
    }

    group.sort_by(|a, b| {
        let ordering = compare_field(a, b, field);
        match direction {
            SortDirection::Asc => ordering.then_with(|| name_key(a).cmp(&name_key(b))),
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_field(a: &EntryRecord, b: &EntryRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => name_key(a).cmp(&name_key(b)),
        SortField::Modified => a.last_modified.cmp(&b.last_modified),
        // Extensions are already lowercase; entries without one sort first.
        SortField::Extension => a.extension.cmp(&b.extension),
        SortField::Size => Ordering::Equal,
    }
}

fn name_key(record: &EntryRecord) -> String {
    record.name.to_lowercase()
}
