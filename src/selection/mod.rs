//! # Shelf Selection
//!
//! Keeps a shelf's strategy parameters consistent as the editor changes
//! them, edits manual selections, and resolves a shelf to the ordered
//! content it renders.
//!
//! ```rust
//! use curator_core::models::{Domain, FilterRule, SelectionStrategy, ShelfConfig};
//! use curator_core::selection::on_strategy_change;
//!
//! let shelf = ShelfConfig::automatic("latest", Domain::News, FilterRule::Recent, 12);
//! let shelf = on_strategy_change(shelf, SelectionStrategy::Personalized);
//!
//! assert_eq!(shelf.filter_rule, None);
//! assert_eq!(shelf.limit, Some(12));
//! ```

pub mod items;
pub mod plan;
pub mod resolver;

pub use items::{add_selected_item, remove_selected_item, reorder_selected_items, SelectionError};
pub use plan::SelectionPlan;
pub use resolver::{on_domain_change, on_strategy_change, resolve, resolve_with};
