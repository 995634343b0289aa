//! Listing pipeline: normalize, identify, classify, filter, enrich, order.

pub mod classify;
pub mod enrich;
pub mod filter;
pub mod folder;
pub mod ident;
pub mod nav;
pub mod normalize;

pub use classify::classify;
pub use enrich::{Enricher, folder_is_visible, size_human};
pub use filter::{AcceptPredicate, accept, apply_named_filter, default_predicate};
pub use folder::Lister;
pub use ident::generate_id;
pub use nav::{breadcrumbs, generate_parent};
pub use normalize::{normalize, probe_mime};

/// Shared result type for listing operations.
pub type Result<T> = crate::Result<T>;
