use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standalone content types that carry their own publication schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Video,
    News,
    Live,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::News => write!(f, "news"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// A video, news item or live stream with an enabled flag and an optional
/// go-live date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledContent {
    pub id: String,
    pub kind: ContentKind,
    #[serde(default)]
    pub title: String,
    #[serde(default = "super::enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<DateTime<Utc>>,
}

impl ScheduledContent {
    pub fn new(id: impl Into<String>, kind: ContentKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            enabled: true,
            schedule_date: None,
        }
    }

    pub fn scheduled_for(mut self, date: DateTime<Utc>) -> Self {
        self.schedule_date = Some(date);
        self
    }
}
