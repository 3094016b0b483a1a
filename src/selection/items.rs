//! Editing the manual selection of a shelf.
//!
//! Thin wrappers over the ordering primitives that add the shelf's own
//! rules: only manual shelves hold a selection, and every id must come from
//! the shelf's configured domain.

use crate::constants::events;
use crate::log_shelf;
use crate::models::{ContentReference, Domain, SelectionStrategy, ShelfConfig};
use crate::ordering::{self, EditError};
use crate::outcome::EditOutcome;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Shelf uses the {strategy} strategy; only manual shelves hold selected items")]
    NotManual { strategy: SelectionStrategy },

    #[error("Item belongs to domain {actual}, shelf selects from {expected}")]
    DomainMismatch { expected: Domain, actual: Domain },

    #[error("Item {id} is already selected")]
    DuplicateItem { id: String },
}

impl From<EditError> for SelectionError {
    fn from(error: EditError) -> Self {
        match error {
            EditError::DuplicateItem { key } => SelectionError::DuplicateItem { id: key },
        }
    }
}

/// Append `item` to the selection of a manual shelf
pub fn add_selected_item(
    mut config: ShelfConfig,
    item: &ContentReference,
) -> EditOutcome<ShelfConfig, SelectionError> {
    let rejection = if !config.is_manual() {
        Some(SelectionError::NotManual {
            strategy: config.strategy,
        })
    } else if item.domain != config.domain {
        Some(SelectionError::DomainMismatch {
            expected: config.domain,
            actual: item.domain,
        })
    } else {
        None
    };

    if let Some(reason) = rejection {
        log_shelf!(
            debug,
            events::SHELF_ITEM_REJECTED,
            shelf_id: config.id,
            item_id: item.id,
            reason: reason,
        );
        return EditOutcome::Rejected {
            unchanged: config,
            reason,
        };
    }

    let items = std::mem::take(&mut config.selected_items);
    let (items, reason) = ordering::append(items, item.id.clone()).into_parts();
    config.selected_items = items;

    match reason {
        None => {
            log_shelf!(
                debug,
                events::SHELF_ITEM_ADDED,
                shelf_id: config.id,
                item_id: item.id,
                count: config.selected_items.len(),
            );
            EditOutcome::Applied(config)
        }
        Some(reason) => {
            let reason = SelectionError::from(reason);
            log_shelf!(
                debug,
                events::SHELF_ITEM_REJECTED,
                shelf_id: config.id,
                item_id: item.id,
                reason: reason,
            );
            EditOutcome::Rejected {
                unchanged: config,
                reason,
            }
        }
    }
}

/// Drop `id` from the selection; unknown ids leave the shelf as it was
pub fn remove_selected_item(mut config: ShelfConfig, id: &str) -> ShelfConfig {
    let before = config.selected_items.len();
    config.selected_items = ordering::remove(std::mem::take(&mut config.selected_items), id);

    if config.selected_items.len() != before {
        log_shelf!(
            debug,
            events::SHELF_ITEM_REMOVED,
            shelf_id: config.id,
            item_id: id,
        );
    }
    config
}

/// Apply a drag of `active_id` onto `over_id` within the selection
pub fn reorder_selected_items(
    mut config: ShelfConfig,
    active_id: &str,
    over_id: &str,
) -> ShelfConfig {
    config.selected_items = ordering::move_item(
        std::mem::take(&mut config.selected_items),
        active_id,
        over_id,
    );

    log_shelf!(
        debug,
        events::SHELF_ITEMS_REORDERED,
        shelf_id: config.id,
        active_id: active_id,
        over_id: over_id,
    );
    config
}
