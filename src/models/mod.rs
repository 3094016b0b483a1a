//! # Curator Models
//!
//! Value types exchanged with the persistence and UI layers. The core never
//! keeps these alive between calls: callers pass copies in and receive new
//! copies back.

pub mod content_entity;
pub mod content_reference;
pub mod page;
pub mod shelf;

pub use content_entity::{ContentKind, ScheduledContent};
pub use content_reference::{ContentReference, Domain};
pub use page::{PageConfig, PageShelf};
pub use shelf::{FilterRule, PersonalizationAlgorithm, SelectionStrategy, ShelfConfig};

/// Serde default for `enabled` flags missing from stored documents
pub(crate) fn enabled_by_default() -> bool {
    true
}
