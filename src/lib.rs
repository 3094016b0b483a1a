#![allow(clippy::doc_markdown)] // Allow technical terms like scheduleDate, filterRule in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Curator Core
//!
//! Shelf and page composition for a media platform's admin surface.
//!
//! ## Overview
//!
//! A **shelf** is a named display unit whose items are picked by one of three
//! mutually exclusive strategies: a hand-ordered list of ids (Manual), a filter
//! rule over one content domain (Automatic), or a recommendation algorithm
//! (Personalized). A **page** is an ordered list of shelves. Shelves, pages and
//! standalone content (videos, news, live streams) share one time-gated
//! enablement rule.
//!
//! Every operation is a pure transformation over caller-owned values: the
//! crate holds no long-lived state and performs no I/O beyond the injected
//! [`lookup::ContentLookup`] capability and [`clock::Clock`].
//!
//! ## Module Organization
//!
//! - [`models`] - Shelf, page and content value types (the serialization contract)
//! - [`selection`] - Strategy switching, manual item editing and resolving
//! - [`ordering`] - Reorder/append/remove/reindex over identified sequences
//! - [`state_machine`] - The scheduling gate and its four states
//! - [`composition`] - Page-level shelf placement rules
//! - [`validation`] - Field-level validation reports
//! - [`lookup`] - Content lookup contract and per-domain adapters
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup and domain log macros
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use curator_core::composition::add_shelf;
//! use curator_core::models::{Domain, PageConfig, ShelfConfig};
//! use curator_core::ordering::move_item;
//! use curator_core::state_machine::effective_enabled;
//! use chrono::{Duration, Utc};
//!
//! let shelf = ShelfConfig::manual("highlights", Domain::Content)
//!     .with_selected_items(["v1", "v2", "v3"]);
//! let items = move_item(shelf.selected_items.clone(), "v1", "v3");
//! assert_eq!(items, vec!["v2", "v3", "v1"]);
//!
//! let page = add_shelf(PageConfig::new("home", "Home"), &shelf).into_value();
//! assert_eq!(page.shelves[0].order, 0);
//!
//! let now = Utc::now();
//! assert!(!effective_enabled(true, Some(now + Duration::days(1)), now));
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # Unit, integration and property tests
//! ```

pub mod clock;
pub mod composition;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod ordering;
pub mod outcome;
pub mod selection;
pub mod state_machine;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use composition::{add_shelf, published_shelves, remove_shelf, reorder, CompositionError};
pub use config::{ConfigManager, CuratorConfig, LimitConfig, LoggingConfig};
pub use error::{CuratorError, Result};
pub use lookup::{AdapterRegistry, ContentLookup, FilterQuery, InMemoryCatalog, LookupError};
pub use models::{
    ContentKind, ContentReference, Domain, FilterRule, PageConfig, PageShelf,
    PersonalizationAlgorithm, ScheduledContent, SelectionStrategy, ShelfConfig,
};
pub use ordering::{append, move_item, reindex, remove, EditError};
pub use outcome::EditOutcome;
pub use selection::{on_domain_change, on_strategy_change, resolve, SelectionError};
pub use state_machine::{
    apply_event, editable, effective_enabled, GuardError, Schedulable, ScheduleEvent,
    ScheduleState, SchedulingGate,
};
pub use validation::{validate_page, FieldError, FieldErrorKind, ShelfValidator, ValidationReport};
