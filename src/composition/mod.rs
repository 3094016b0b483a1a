//! # Page Composition
//!
//! An ordered list of shelf placements for one page, edited through the
//! ordering primitives with page identity rules on top: a shelf appears at
//! most once and `order` stays contiguous after every edit.
//!
//! ```rust
//! use curator_core::composition::{add_shelf, CompositionError};
//! use curator_core::models::{Domain, PageConfig, ShelfConfig};
//!
//! let shelf = ShelfConfig::manual("highlights", Domain::Content);
//! let page = add_shelf(PageConfig::new("home", "Home"), &shelf).into_value();
//!
//! let again = add_shelf(page, &shelf);
//! assert!(matches!(again.reason(), Some(CompositionError::DuplicateShelf { .. })));
//! ```

pub mod page;

pub use page::{add_shelf, published_shelves, remove_shelf, reorder, CompositionError};
