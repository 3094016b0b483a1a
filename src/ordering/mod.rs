//! # Ordered List Editing
//!
//! Generic reordering shared by manual shelf selections and page shelf lists.

pub mod editor;

pub use editor::{
    append, is_contiguous, move_item, position_of, reindex, remove, EditError, ListItem, Ordered,
};
