//! Pure reorder/insert/remove primitives over sequences of identified items.
//!
//! Every function takes the sequence by value and returns the edited
//! sequence, so callers hold the only copy and apply the result. A drag
//! gesture reduces to the two ids it yields: the item being dragged
//! (`active`) and the item it was dropped on (`over`).

use crate::models::PageShelf;
use crate::outcome::EditOutcome;
use thiserror::Error;
use tracing::debug;

/// An element of an editable sequence.
pub trait ListItem {
    /// Stable id used to address the item in `move_item` and `remove`
    fn item_id(&self) -> &str;

    /// Key that must be unique within the sequence. Defaults to the item id.
    fn identity_key(&self) -> &str {
        self.item_id()
    }
}

/// An item that stores its own position.
pub trait Ordered: ListItem {
    fn order(&self) -> usize;
    fn set_order(&mut self, order: usize);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Item with key {key} is already in the sequence")]
    DuplicateItem { key: String },
}

/// Manual shelf selections are bare ids
impl ListItem for String {
    fn item_id(&self) -> &str {
        self.as_str()
    }
}

/// Page placements are addressed by placement id but must not repeat a shelf
impl ListItem for PageShelf {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn identity_key(&self) -> &str {
        &self.shelf_id
    }
}

impl Ordered for PageShelf {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

pub fn position_of<T: ListItem>(sequence: &[T], id: &str) -> Option<usize> {
    sequence.iter().position(|item| item.item_id() == id)
}

/// Take the `active` item out and reinsert it where `over` was.
///
/// Returns the input unchanged when the ids are equal or either is absent.
pub fn move_item<T: ListItem>(mut sequence: Vec<T>, active_id: &str, over_id: &str) -> Vec<T> {
    if active_id == over_id {
        return sequence;
    }

    let (Some(from), Some(to)) = (
        position_of(&sequence, active_id),
        position_of(&sequence, over_id),
    ) else {
        debug!(active_id, over_id, "move ignored: id not in sequence");
        return sequence;
    };

    let item = sequence.remove(from);
    sequence.insert(to, item);
    sequence
}

/// Push `item` onto the end unless its identity key is already present.
pub fn append<T: ListItem>(mut sequence: Vec<T>, item: T) -> EditOutcome<Vec<T>, EditError> {
    if sequence
        .iter()
        .any(|existing| existing.identity_key() == item.identity_key())
    {
        let key = item.identity_key().to_string();
        debug!(key = %key, "append rejected: duplicate identity key");
        return EditOutcome::Rejected {
            unchanged: sequence,
            reason: EditError::DuplicateItem { key },
        };
    }

    sequence.push(item);
    EditOutcome::Applied(sequence)
}

/// Drop the item with `id`; absent ids leave the sequence as it was.
pub fn remove<T: ListItem>(mut sequence: Vec<T>, id: &str) -> Vec<T> {
    sequence.retain(|item| item.item_id() != id);
    sequence
}

/// Rewrite every `order` field to match the item's position (`0..n-1`).
pub fn reindex<T: Ordered>(mut sequence: Vec<T>) -> Vec<T> {
    for (position, item) in sequence.iter_mut().enumerate() {
        item.set_order(position);
    }
    sequence
}

/// Whether `order` fields are exactly `0..n-1` in sequence order
pub fn is_contiguous<T: Ordered>(sequence: &[T]) -> bool {
    sequence
        .iter()
        .enumerate()
        .all(|(position, item)| item.order() == position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_move_first_onto_last() {
        let moved = move_item(ids(&["v1", "v2", "v3"]), "v1", "v3");
        assert_eq!(moved, ids(&["v2", "v3", "v1"]));
    }

    #[test]
    fn test_move_last_onto_first() {
        let moved = move_item(ids(&["v1", "v2", "v3"]), "v3", "v1");
        assert_eq!(moved, ids(&["v3", "v1", "v2"]));
    }

    #[test]
    fn test_move_adjacent() {
        let moved = move_item(ids(&["a", "b", "c", "d"]), "b", "c");
        assert_eq!(moved, ids(&["a", "c", "b", "d"]));
    }

    #[test]
    fn test_move_is_noop_for_same_or_unknown_ids() {
        let original = ids(&["a", "b", "c"]);
        assert_eq!(move_item(original.clone(), "b", "b"), original);
        assert_eq!(move_item(original.clone(), "x", "b"), original);
        assert_eq!(move_item(original.clone(), "a", "x"), original);
    }

    #[test]
    fn test_append_rejects_duplicates() {
        let outcome = append(ids(&["a", "b"]), "b".to_string());
        assert_eq!(
            outcome.reason(),
            Some(&EditError::DuplicateItem {
                key: "b".to_string()
            })
        );
        assert_eq!(outcome.into_value(), ids(&["a", "b"]));

        let outcome = append(ids(&["a", "b"]), "c".to_string());
        assert!(outcome.is_applied());
        assert_eq!(outcome.into_value(), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        assert_eq!(remove(ids(&["a", "b"]), "z"), ids(&["a", "b"]));
        assert_eq!(remove(ids(&["a", "b"]), "a"), ids(&["b"]));
    }

    #[test]
    fn test_page_shelf_identity_is_shelf_id() {
        let first = PageShelf::new("s1", "One", 0);
        let same_shelf = PageShelf::new("s1", "One again", 1);
        assert_ne!(first.item_id(), same_shelf.item_id());

        let outcome = append(vec![first], same_shelf);
        assert!(outcome.is_rejected());
    }

    #[test]
    fn test_reindex_restores_contiguous_order() {
        let shelves = vec![
            PageShelf::new("s1", "", 4),
            PageShelf::new("s2", "", 4),
            PageShelf::new("s3", "", 9),
        ];
        assert!(!is_contiguous(&shelves));

        let shelves = reindex(shelves);
        assert!(is_contiguous(&shelves));
        assert_eq!(
            shelves.iter().map(|s| s.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
