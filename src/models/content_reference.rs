use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category an id belongs to. Ids are only unique within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    /// Videos and other playable content
    #[default]
    Content,
    /// Catalogues grouping content
    Collection,
    News,
    /// Players and coaches
    Agent,
    /// Teams
    Group,
    /// Events and championships
    Agenda,
    /// Promotional banners, only selectable by hand
    Banner,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Self::Content,
        Self::Collection,
        Self::News,
        Self::Agent,
        Self::Group,
        Self::Agenda,
        Self::Banner,
    ];

    /// Banner items can only be placed through a manual selection
    pub fn is_manual_only(&self) -> bool {
        matches!(self, Self::Banner)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "CONTENT",
            Self::Collection => "COLLECTION",
            Self::News => "NEWS",
            Self::Agent => "AGENT",
            Self::Group => "GROUP",
            Self::Agenda => "AGENDA",
            Self::Banner => "BANNER",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| format!("Invalid domain: {s}"))
    }
}

/// One selectable item as returned by the content lookup.
///
/// `title` and `thumbnail` are display-only; identity is `(domain, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReference {
    pub id: String,
    pub domain: Domain,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl ContentReference {
    pub fn new(id: impl Into<String>, domain: Domain, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain,
            title: title.into(),
            thumbnail: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Whether both references point at the same underlying item,
    /// ignoring display metadata
    pub fn is_same_item(&self, other: &ContentReference) -> bool {
        self.domain == other.domain && self.id == other.id
    }
}
