//! Page-level shelf editing on top of the ordering primitives.
//!
//! Every function returns a page whose placements carry `order` values
//! `0..n-1` in sequence order and reference each shelf at most once.

use crate::constants::events;
use crate::log_page;
use crate::models::{PageConfig, PageShelf, ShelfConfig};
use crate::ordering::{self, EditError};
use crate::outcome::EditOutcome;
use crate::state_machine::Schedulable;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("Shelf {shelf_id} is already on this page")]
    DuplicateShelf { shelf_id: String },
}

impl From<EditError> for CompositionError {
    fn from(error: EditError) -> Self {
        match error {
            EditError::DuplicateItem { key } => CompositionError::DuplicateShelf { shelf_id: key },
        }
    }
}

/// Place `shelf` at the end of the page
pub fn add_shelf(
    mut page: PageConfig,
    shelf: &ShelfConfig,
) -> EditOutcome<PageConfig, CompositionError> {
    let entry = PageShelf::for_shelf(shelf, page.shelves.len());
    let shelves = std::mem::take(&mut page.shelves);
    let (shelves, reason) = ordering::append(shelves, entry).into_parts();

    match reason {
        None => {
            page.shelves = ordering::reindex(shelves);
            log_page!(
                debug,
                events::PAGE_SHELF_ADDED,
                page_id: page.id,
                shelf_id: shelf.id,
                count: page.shelves.len(),
            );
            EditOutcome::Applied(page)
        }
        Some(reason) => {
            page.shelves = shelves;
            let reason = CompositionError::from(reason);
            log_page!(
                debug,
                events::PAGE_SHELF_REJECTED,
                page_id: page.id,
                reason: reason,
            );
            EditOutcome::Rejected {
                unchanged: page,
                reason,
            }
        }
    }
}

/// Remove the placement `page_shelf_id` and close the gap it leaves
pub fn remove_shelf(mut page: PageConfig, page_shelf_id: &str) -> PageConfig {
    let shelves = ordering::remove(std::mem::take(&mut page.shelves), page_shelf_id);
    page.shelves = ordering::reindex(shelves);

    log_page!(
        debug,
        events::PAGE_SHELF_REMOVED,
        page_id: page.id,
        placement_id: page_shelf_id,
        count: page.shelves.len(),
    );
    page
}

/// Apply a drag of placement `active_id` onto placement `over_id`
pub fn reorder(mut page: PageConfig, active_id: &str, over_id: &str) -> PageConfig {
    let shelves = ordering::move_item(std::mem::take(&mut page.shelves), active_id, over_id);
    page.shelves = ordering::reindex(shelves);

    log_page!(
        debug,
        events::PAGE_SHELVES_REORDERED,
        page_id: page.id,
        active_id: active_id,
        over_id: over_id,
    );
    page
}

/// Shelves a visitor sees on `page` at `now`, in page order.
///
/// A page that is not itself effectively enabled shows nothing. Placements
/// whose shelf is missing from `shelves` are skipped.
pub fn published_shelves<'a>(
    page: &PageConfig,
    shelves: &'a [ShelfConfig],
    now: DateTime<Utc>,
) -> Vec<&'a ShelfConfig> {
    if !page.effective_enabled(now) {
        return Vec::new();
    }

    let by_id: HashMap<&str, &ShelfConfig> =
        shelves.iter().map(|shelf| (shelf.id.as_str(), shelf)).collect();

    page.shelves
        .iter()
        .filter_map(|entry| by_id.get(entry.shelf_id.as_str()).copied())
        .filter(|shelf| shelf.effective_enabled(now))
        .collect()
}
