//! Typed form of a shelf's active strategy, ready to run against a lookup.

use crate::constants::events;
use crate::log_shelf;
use crate::lookup::{ContentLookup, FilterQuery, LookupResult};
use crate::models::{ContentReference, Domain, PersonalizationAlgorithm, SelectionStrategy};
use std::collections::{HashMap, HashSet};

/// What a shelf asks the content repository for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPlan {
    Manual { domain: Domain, ids: Vec<String> },
    Automatic(FilterQuery),
    Personalized {
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    },
}

impl SelectionPlan {
    pub fn strategy(&self) -> SelectionStrategy {
        match self {
            Self::Manual { .. } => SelectionStrategy::Manual,
            Self::Automatic(_) => SelectionStrategy::Automatic,
            Self::Personalized { .. } => SelectionStrategy::Personalized,
        }
    }

    /// Run the plan for the shelf `shelf_id`.
    ///
    /// Manual plans keep the stored order, skip repeated ids and drop ids the
    /// lookup no longer knows. Computed plans are capped at their limit.
    pub fn execute<L: ContentLookup + ?Sized>(
        &self,
        shelf_id: &str,
        lookup: &L,
    ) -> LookupResult<Vec<ContentReference>> {
        match self {
            Self::Manual { domain, ids } => resolve_manual(shelf_id, *domain, ids, lookup),
            Self::Automatic(query) => {
                let mut items = lookup.filter(query)?;
                items.retain(|item| item.domain == query.domain);
                items.truncate(query.limit as usize);
                Ok(items)
            }
            Self::Personalized { algorithm, limit } => {
                let mut items = lookup.by_algorithm(*algorithm, *limit)?;
                items.truncate(*limit as usize);
                Ok(items)
            }
        }
    }
}

fn resolve_manual<L: ContentLookup + ?Sized>(
    shelf_id: &str,
    domain: Domain,
    ids: &[String],
    lookup: &L,
) -> LookupResult<Vec<ContentReference>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut found: HashMap<String, ContentReference> = lookup
        .by_ids(domain, ids)?
        .into_iter()
        .filter(|item| item.domain == domain)
        .map(|item| (item.id.clone(), item))
        .collect();

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            continue;
        }
        match found.remove(id) {
            Some(item) => resolved.push(item),
            None => {
                log_shelf!(
                    warn,
                    events::SHELF_ITEM_UNRESOLVED,
                    shelf_id: shelf_id,
                    item_id: id,
                    domain: domain,
                );
            }
        }
    }

    Ok(resolved)
}
