//! In-memory TTL cache for enriched entry records.

use std::time::{Duration, Instant};

use hashlink::LruCache;
use parking_lot::Mutex;

use crate::types::EntryRecord;

use super::CacheStore;

#[derive(Debug, Clone)]
struct TtlEntry {
    record: EntryRecord,
    expires_at: Instant,
}

/// LRU-bounded store with a per-entry deadline. Expired entries are dropped
/// lazily on the next read of their key.
#[derive(Debug)]
pub struct TtlCache {
    entries: Mutex<LruCache<String, TtlEntry>>,
}

impl TtlCache {
    /// Construct a cache holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self { entries: Mutex::new(LruCache::new(capacity)) }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop a key regardless of its deadline.
    pub fn invalidate(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl CacheStore for TtlCache {
    fn get(&self, key: &str) -> Option<EntryRecord> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Some(entry.record.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        None
    }

    fn put(&self, key: &str, record: EntryRecord, ttl: Duration) {
        let entry = TtlEntry { record, expires_at: Instant::now() + ttl };
        self.entries.lock().insert(key.to_string(), entry);
    }
}
