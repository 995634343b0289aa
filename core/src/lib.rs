//! Core engine that turns raw storage listings into normalized, filtered,
//! ordered, cached entry records enriched with presentation metadata.

#![deny(missing_debug_implementations)]

pub mod cache;
pub mod config;
pub mod listing;
pub mod log;
pub mod storage;
pub mod types;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use cache::{CacheGate, CacheStore, TtlCache};
pub use config::{ExclusionRules, ListingConfig};
pub use listing::Lister;
pub use storage::{LocalStorage, RawAttributes, Storage, StorageError};
pub use types::{
    Breadcrumb, EntryRecord, EntryType, MimeClass, RawEntry, SortDirection, SortField, Visibility,
};

/// Returns the version of the core crate for telemetry and debugging.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
