//! # Curator Constants
//!
//! Limits, wire field names, and operation names shared across the
//! composition core. Field names are the serialization contract other layers
//! bind to, and the same strings key validation errors.

/// Smallest `limit` an automatic or personalized shelf may request
pub const LIMIT_MIN: u32 = 1;

/// Largest `limit` an automatic or personalized shelf may request
pub const LIMIT_MAX: u32 = 100;

/// Wire names of configuration fields, used as validation error keys
pub mod fields {
    pub const ID: &str = "id";
    pub const STRATEGY: &str = "strategy";
    pub const DOMAIN: &str = "domain";
    pub const SELECTED_ITEMS: &str = "selectedItems";
    pub const FILTER_DOMAIN: &str = "filterDomain";
    pub const FILTER_RULE: &str = "filterRule";
    pub const FILTER_FIELD: &str = "filterField";
    pub const FILTER_VALUE: &str = "filterValue";
    pub const LIMIT: &str = "limit";
    pub const ALGORITHM: &str = "algorithm";
    pub const ENABLED: &str = "enabled";
    pub const SCHEDULE_DATE: &str = "scheduleDate";
    pub const SHELVES: &str = "shelves";
    pub const SHELF_ID: &str = "shelfId";
    pub const ORDER: &str = "order";
}

/// Operation names attached to structured log events
pub mod events {
    // Shelf configuration
    pub const SHELF_STRATEGY_CHANGED: &str = "shelf.strategy_changed";
    pub const SHELF_DOMAIN_CHANGED: &str = "shelf.domain_changed";
    pub const SHELF_ITEM_ADDED: &str = "shelf.item_added";
    pub const SHELF_ITEM_REJECTED: &str = "shelf.item_rejected";
    pub const SHELF_ITEM_REMOVED: &str = "shelf.item_removed";
    pub const SHELF_ITEMS_REORDERED: &str = "shelf.items_reordered";
    pub const SHELF_RESOLVED: &str = "shelf.resolved";
    pub const SHELF_ITEM_UNRESOLVED: &str = "shelf.item_unresolved";

    // Page composition
    pub const PAGE_SHELF_ADDED: &str = "page.shelf_added";
    pub const PAGE_SHELF_REJECTED: &str = "page.shelf_rejected";
    pub const PAGE_SHELF_REMOVED: &str = "page.shelf_removed";
    pub const PAGE_SHELVES_REORDERED: &str = "page.shelves_reordered";

    // Scheduling
    pub const SCHEDULE_EVENT_APPLIED: &str = "schedule.event_applied";
    pub const SCHEDULE_EVENT_REJECTED: &str = "schedule.event_rejected";
}
