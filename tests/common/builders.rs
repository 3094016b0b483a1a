//! Test data builders shared by the integration suites.

#![allow(dead_code)] // Each test crate uses a different subset

use chrono::{DateTime, Duration, TimeZone, Utc};
use curator_core::composition::add_shelf;
use curator_core::lookup::{AdapterRegistry, CatalogEntry, InMemoryCatalog, StaticRecommendations};
use curator_core::models::{
    ContentReference, Domain, PageConfig, PersonalizationAlgorithm, ShelfConfig,
};

/// Fixed reference instant so schedule tests never depend on the wall clock
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 14, 18, 30, 0).unwrap()
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    reference_now() + Duration::days(days)
}

/// Builder pattern for creating test PageConfigs
pub struct PageBuilder {
    id: String,
    name: String,
    shelf_ids: Vec<String>,
    enabled: bool,
    schedule_date: Option<DateTime<Utc>>,
}

impl PageBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            shelf_ids: Vec::new(),
            enabled: true,
            schedule_date: None,
        }
    }

    pub fn with_shelves(mut self, ids: &[&str]) -> Self {
        self.shelf_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn scheduled_for(mut self, date: DateTime<Utc>) -> Self {
        self.schedule_date = Some(date);
        self
    }

    /// Placements go through `add_shelf` so orders are always contiguous
    pub fn build(self) -> PageConfig {
        let mut page = PageConfig::new(self.id, self.name);
        page.enabled = self.enabled;
        page.schedule_date = self.schedule_date;
        self.shelf_ids.iter().fold(page, |page, id| {
            add_shelf(page, &ShelfConfig::manual(id.as_str(), Domain::Content)).into_value()
        })
    }
}

pub fn reference(id: &str, domain: Domain) -> ContentReference {
    ContentReference::new(id, domain, format!("Title {id}"))
}

/// Registry with Content, News and Agent catalogs plus one recommendation
/// source for each algorithm.
///
/// Content ids `v1..=v6` carry increasing scores and publish dates, so
/// `Top` and `Recent` both yield `v6, v5, ...`.
pub fn sample_registry() -> AdapterRegistry {
    let mut content = InMemoryCatalog::new(Domain::Content);
    for i in 1..=6i64 {
        let id = format!("v{i}");
        let sport = if i % 2 == 0 { "football" } else { "tennis" };
        content
            .insert(
                CatalogEntry::new(reference(&id, Domain::Content))
                    .published_at(days_from_now(-10 + i))
                    .with_score(i * 10)
                    .with_attribute("sport", sport),
            )
            .unwrap();
    }

    let mut news = InMemoryCatalog::new(Domain::News);
    for id in ["n1", "n2"] {
        news.insert(CatalogEntry::new(reference(id, Domain::News)))
            .unwrap();
    }

    let mut agents = InMemoryCatalog::new(Domain::Agent);
    for id in ["p1", "p2", "p3"] {
        agents
            .insert(CatalogEntry::new(reference(id, Domain::Agent)))
            .unwrap();
    }

    let mut registry = AdapterRegistry::new();
    registry
        .register_adapter(content)
        .register_adapter(news)
        .register_adapter(agents)
        .register_recommendations(
            PersonalizationAlgorithm::BecauseYouWatched,
            StaticRecommendations::new(
                ["v3", "v1", "v5"]
                    .iter()
                    .map(|id| reference(id, Domain::Content))
                    .collect(),
            ),
        )
        .register_recommendations(
            PersonalizationAlgorithm::SuggestionsForYou,
            StaticRecommendations::new(vec![reference("n2", Domain::News)]),
        );
    registry
}

pub fn ids(items: &[ContentReference]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}
