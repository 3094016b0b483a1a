//! In-memory adapters, for tests and for hosts that preload a catalog.

use super::registry::{DomainAdapter, RecommendationSource};
use super::traits::{FilterQuery, LookupError, LookupResult};
use crate::models::{ContentReference, Domain, FilterRule, PersonalizationAlgorithm};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

/// One catalog item plus the attributes filter rules sort and match on
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub reference: ContentReference,
    pub published_at: DateTime<Utc>,
    /// Popularity used by [`FilterRule::Top`]
    pub score: i64,
    pub attributes: HashMap<String, String>,
}

impl CatalogEntry {
    pub fn new(reference: ContentReference) -> Self {
        Self {
            reference,
            published_at: DateTime::<Utc>::UNIX_EPOCH,
            score: 0,
            attributes: HashMap::new(),
        }
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = at;
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Field filter: no field matches everything, a field without a value
    /// requires the attribute to be present
    fn matches(&self, field: Option<&str>, value: Option<&str>) -> bool {
        match (field, value) {
            (None, _) => true,
            (Some(field), None) => self.attributes.contains_key(field),
            (Some(field), Some(value)) => {
                self.attributes.get(field).map(String::as_str) == Some(value)
            }
        }
    }
}

/// Catalog of a single domain held in memory
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    domain: Domain,
    entries: Vec<CatalogEntry>,
}

impl InMemoryCatalog {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            entries: Vec::new(),
        }
    }

    /// Add or replace an entry. Entries from another domain are refused.
    pub fn insert(&mut self, entry: CatalogEntry) -> LookupResult<()> {
        if entry.reference.domain != self.domain {
            return Err(LookupError::DomainMismatch {
                expected: self.domain,
                actual: entry.reference.domain,
            });
        }
        self.entries
            .retain(|existing| existing.reference.id != entry.reference.id);
        self.entries.push(entry);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<CatalogEntry> {
        let position = self.entries.iter().position(|e| e.reference.id == id)?;
        Some(self.entries.remove(position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DomainAdapter for InMemoryCatalog {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn fetch(&self, ids: &[String]) -> LookupResult<Vec<ContentReference>> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(self
            .entries
            .iter()
            .filter(|entry| wanted.contains(entry.reference.id.as_str()))
            .map(|entry| entry.reference.clone())
            .collect())
    }

    fn filter(&self, query: &FilterQuery) -> LookupResult<Vec<ContentReference>> {
        if query.domain != self.domain {
            return Err(LookupError::DomainMismatch {
                expected: self.domain,
                actual: query.domain,
            });
        }

        let mut matches: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.matches(query.field.as_deref(), query.value.as_deref()))
            .collect();

        match query.rule {
            FilterRule::Random => matches.shuffle(&mut rand::rng()),
            FilterRule::Recent => matches.sort_by(|a, b| {
                b.published_at
                    .cmp(&a.published_at)
                    .then_with(|| a.reference.id.cmp(&b.reference.id))
            }),
            FilterRule::Alphabetical => matches.sort_by(|a, b| {
                a.reference
                    .title
                    .to_lowercase()
                    .cmp(&b.reference.title.to_lowercase())
                    .then_with(|| a.reference.id.cmp(&b.reference.id))
            }),
            FilterRule::Top => matches.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.reference.id.cmp(&b.reference.id))
            }),
        }

        Ok(matches
            .into_iter()
            .take(query.limit as usize)
            .map(|entry| entry.reference.clone())
            .collect())
    }
}

/// Fixed recommendation list, returned in order up to the limit
#[derive(Debug, Clone, Default)]
pub struct StaticRecommendations {
    items: Vec<ContentReference>,
}

impl StaticRecommendations {
    pub fn new(items: Vec<ContentReference>) -> Self {
        Self { items }
    }
}

impl RecommendationSource for StaticRecommendations {
    fn recommend(
        &self,
        _algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> LookupResult<Vec<ContentReference>> {
        Ok(self.items.iter().take(limit as usize).cloned().collect())
    }
}
