//! Shelf configuration: which items a display unit shows and in what order.

use super::content_reference::Domain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a shelf picks its items. The three strategies are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Explicit, user-ordered list of item ids
    #[default]
    Manual,
    /// Filter rule over a domain, evaluated at resolve time
    Automatic,
    /// Named recommendation algorithm, evaluated at resolve time
    Personalized,
}

/// Ordering rule for automatic shelves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterRule {
    Random,
    Recent,
    Alphabetical,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalizationAlgorithm {
    BecauseYouWatched,
    SuggestionsForYou,
}

macro_rules! wire_enum_strings {
    ($ty:ident, $label:literal, [$($variant:ident),+ $(,)?]) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("Invalid ", $label, ": {}"), s)),
                }
            }
        }
    };
}

wire_enum_strings!(SelectionStrategy, "selection strategy", [Manual, Automatic, Personalized]);
wire_enum_strings!(FilterRule, "filter rule", [Random, Recent, Alphabetical, Top]);
wire_enum_strings!(
    PersonalizationAlgorithm,
    "personalization algorithm",
    [BecauseYouWatched, SuggestionsForYou]
);

/// Shelf configuration as stored and exchanged with the persistence layer.
///
/// Strategy parameters are flat optional fields rather than an enum payload:
/// an editor moves through intermediate states (strategy switched, required
/// parameter not yet filled in) that must still round-trip. Parameters of
/// inactive strategies are cleared by
/// [`on_strategy_change`](crate::selection::on_strategy_change).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfConfig {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub strategy: SelectionStrategy,

    /// Domain of `selected_items` for manual shelves
    #[serde(default)]
    pub domain: Domain,
    /// Manual selection, order significant, no duplicates
    #[serde(default)]
    pub selected_items: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_rule: Option<FilterRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<String>,

    /// Size cap shared by automatic and personalized shelves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<PersonalizationAlgorithm>,

    #[serde(default = "super::enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<DateTime<Utc>>,
}

impl ShelfConfig {
    fn blank(id: impl Into<String>, strategy: SelectionStrategy) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            strategy,
            domain: Domain::default(),
            selected_items: Vec::new(),
            filter_domain: None,
            filter_rule: None,
            filter_field: None,
            filter_value: None,
            limit: None,
            algorithm: None,
            enabled: true,
            schedule_date: None,
        }
    }

    pub fn manual(id: impl Into<String>, domain: Domain) -> Self {
        Self {
            domain,
            ..Self::blank(id, SelectionStrategy::Manual)
        }
    }

    pub fn automatic(
        id: impl Into<String>,
        filter_domain: Domain,
        filter_rule: FilterRule,
        limit: u32,
    ) -> Self {
        Self {
            filter_domain: Some(filter_domain),
            filter_rule: Some(filter_rule),
            limit: Some(limit),
            ..Self::blank(id, SelectionStrategy::Automatic)
        }
    }

    pub fn personalized(
        id: impl Into<String>,
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> Self {
        Self {
            algorithm: Some(algorithm),
            limit: Some(limit),
            ..Self::blank(id, SelectionStrategy::Personalized)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_selected_items<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_items = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_field_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_field = Some(field.into());
        self.filter_value = Some(value.into());
        self
    }

    pub fn with_schedule(mut self, enabled: bool, schedule_date: Option<DateTime<Utc>>) -> Self {
        self.enabled = enabled;
        self.schedule_date = schedule_date;
        self
    }

    pub fn is_manual(&self) -> bool {
        self.strategy == SelectionStrategy::Manual
    }

    pub fn has_filter_parameters(&self) -> bool {
        self.filter_domain.is_some()
            || self.filter_rule.is_some()
            || self.filter_field.is_some()
            || self.filter_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_string_conversion() {
        assert_eq!(SelectionStrategy::Personalized.to_string(), "Personalized");
        assert_eq!("Top".parse::<FilterRule>().unwrap(), FilterRule::Top);
        assert_eq!(
            "SuggestionsForYou".parse::<PersonalizationAlgorithm>().unwrap(),
            PersonalizationAlgorithm::SuggestionsForYou
        );
        assert_eq!(
            "top".parse::<FilterRule>().unwrap_err(),
            "Invalid filter rule: top"
        );
    }

    #[test]
    fn test_cleared_parameters_are_omitted() {
        let shelf = ShelfConfig::manual("s1", Domain::Content).with_selected_items(["v1", "v2"]);
        let json = serde_json::to_value(&shelf).unwrap();

        assert_eq!(json["strategy"], "Manual");
        assert_eq!(json["domain"], "CONTENT");
        assert_eq!(json["selectedItems"], serde_json::json!(["v1", "v2"]));
        for absent in ["filterDomain", "filterRule", "limit", "algorithm", "scheduleDate"] {
            assert!(json.get(absent).is_none(), "{absent} should be omitted");
        }
    }

    #[test]
    fn test_deserialize_from_wire_names() {
        let json = serde_json::json!({
            "id": "s9",
            "strategy": "Automatic",
            "filterDomain": "NEWS",
            "filterRule": "Recent",
            "filterField": "category",
            "filterValue": "football",
            "limit": 12,
            "scheduleDate": "2024-05-01T10:00:00Z"
        });
        let shelf: ShelfConfig = serde_json::from_value(json).unwrap();

        assert_eq!(shelf.strategy, SelectionStrategy::Automatic);
        assert_eq!(shelf.filter_domain, Some(Domain::News));
        assert_eq!(shelf.filter_rule, Some(FilterRule::Recent));
        assert_eq!(shelf.limit, Some(12));
        assert!(shelf.enabled);
        assert!(shelf.selected_items.is_empty());
        assert!(shelf.schedule_date.is_some());
    }

    #[test]
    fn test_constructors_only_set_their_strategy_parameters() {
        let automatic = ShelfConfig::automatic("a", Domain::Content, FilterRule::Top, 10);
        assert!(automatic.algorithm.is_none());
        assert!(automatic.selected_items.is_empty());

        let personalized =
            ShelfConfig::personalized("p", PersonalizationAlgorithm::BecauseYouWatched, 8);
        assert!(!personalized.has_filter_parameters());
        assert_eq!(personalized.limit, Some(8));
    }
}
