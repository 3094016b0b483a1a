use super::shelf::ShelfConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placement of one shelf on a page.
///
/// `id` identifies the placement itself; `shelf_id` is the shelf it points
/// at and is unique within a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageShelf {
    pub id: String,
    pub shelf_id: String,
    #[serde(default)]
    pub shelf_title: String,
    pub order: usize,
}

impl PageShelf {
    /// New placement with a freshly generated placement id
    pub fn new(shelf_id: impl Into<String>, shelf_title: impl Into<String>, order: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            shelf_id: shelf_id.into(),
            shelf_title: shelf_title.into(),
            order,
        }
    }

    pub fn for_shelf(shelf: &ShelfConfig, order: usize) -> Self {
        Self::new(shelf.id.clone(), shelf.title.clone(), order)
    }
}

/// Ordered list of shelves making up one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub shelves: Vec<PageShelf>,
    #[serde(default = "super::enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<DateTime<Utc>>,
}

impl PageConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shelves: Vec::new(),
            enabled: true,
            schedule_date: None,
        }
    }

    pub fn contains_shelf(&self, shelf_id: &str) -> bool {
        self.shelves.iter().any(|entry| entry.shelf_id == shelf_id)
    }

    /// Shelf ids in page order
    pub fn shelf_ids(&self) -> Vec<&str> {
        self.shelves.iter().map(|entry| entry.shelf_id.as_str()).collect()
    }
}
