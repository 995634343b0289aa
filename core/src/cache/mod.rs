//! Cache gate memoizing enrichment results per entry identity.

pub mod memory;

pub use memory::TtlCache;

use std::time::Duration;

use crate::types::EntryRecord;

pub type Result<T> = crate::Result<T>;

/// External key-value store contract. Per-key atomicity is all that is
/// assumed; concurrent misses may compute the same record twice, which is
/// tolerable because enrichment is pure.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<EntryRecord>;
    fn put(&self, key: &str, record: EntryRecord, ttl: Duration);
}

/// Memoizes enrichment keyed by entry id. With no store or no TTL the gate
/// is a pass-through that never touches the cache.
pub struct CacheGate<'a> {
    store: Option<&'a dyn CacheStore>,
    ttl: Option<Duration>,
}

impl std::fmt::Debug for CacheGate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheGate")
            .field("enabled", &(self.store.is_some() && self.ttl.is_some()))
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl<'a> CacheGate<'a> {
    pub fn new(store: Option<&'a dyn CacheStore>, ttl: Option<Duration>) -> Self {
        Self { store, ttl }
    }

    pub fn disabled() -> Self {
        Self { store: None, ttl: None }
    }

    /// Return the cached record for `key`, or run `compute` and remember a
    /// produced record. Absent results (filtered-out entries) are returned
    /// as-is and never stored.
    pub fn remember<F>(&self, key: &str, compute: F) -> Result<Option<EntryRecord>>
    where
        F: FnOnce() -> Result<Option<EntryRecord>>,
    {
        let (Some(store), Some(ttl)) = (self.store, self.ttl) else {
            return compute();
        };

        if let Some(hit) = store.get(key) {
            return Ok(Some(hit));
        }

        let computed = compute()?;
        if let Some(record) = &computed {
            store.put(key, record.clone(), ttl);
        }
        Ok(computed)
    }
}
