//! # Adapter Registry
//!
//! Routes each lookup call to the adapter registered for its domain, or to
//! the recommendation source registered for its algorithm. The resolver
//! never branches on domain itself; adding a domain means registering
//! another [`DomainAdapter`].
//!
//! ```rust
//! use curator_core::lookup::{AdapterRegistry, CatalogEntry, ContentLookup, InMemoryCatalog};
//! use curator_core::models::{ContentReference, Domain};
//!
//! let mut news = InMemoryCatalog::new(Domain::News);
//! news.insert(CatalogEntry::new(ContentReference::new("n1", Domain::News, "Derby recap")))
//!     .unwrap();
//!
//! let mut registry = AdapterRegistry::new();
//! registry.register_adapter(news);
//!
//! let found = registry.by_ids(Domain::News, &["n1".to_string()]).unwrap();
//! assert_eq!(found.len(), 1);
//! ```

use super::traits::{ContentLookup, FilterQuery, LookupError, LookupResult};
use crate::models::{ContentReference, Domain, PersonalizationAlgorithm};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Per-domain fetch and filter backend
pub trait DomainAdapter: Send + Sync {
    fn domain(&self) -> Domain;

    fn fetch(&self, ids: &[String]) -> LookupResult<Vec<ContentReference>>;

    fn filter(&self, query: &FilterQuery) -> LookupResult<Vec<ContentReference>>;
}

/// Backend for one or more personalization algorithms
pub trait RecommendationSource: Send + Sync {
    fn recommend(
        &self,
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> LookupResult<Vec<ContentReference>>;
}

/// Registry statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub domains: Vec<Domain>,
    pub algorithms: Vec<PersonalizationAlgorithm>,
}

#[derive(Default, Clone)]
pub struct AdapterRegistry {
    adapters: HashMap<Domain, Arc<dyn DomainAdapter>>,
    recommendations: HashMap<PersonalizationAlgorithm, Arc<dyn RecommendationSource>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its own domain, replacing any previous one
    pub fn register_adapter<A: DomainAdapter + 'static>(&mut self, adapter: A) -> &mut Self {
        let domain = adapter.domain();
        if self.adapters.insert(domain, Arc::new(adapter)).is_some() {
            debug!(domain = %domain, "Replaced content adapter");
        }
        self
    }

    pub fn register_recommendations<S: RecommendationSource + 'static>(
        &mut self,
        algorithm: PersonalizationAlgorithm,
        source: S,
    ) -> &mut Self {
        self.recommendations.insert(algorithm, Arc::new(source));
        self
    }

    pub fn has_adapter(&self, domain: Domain) -> bool {
        self.adapters.contains_key(&domain)
    }

    pub fn stats(&self) -> RegistryStats {
        let mut domains: Vec<_> = self.adapters.keys().copied().collect();
        domains.sort_by_key(|d| d.as_str());
        let mut algorithms: Vec<_> = self.recommendations.keys().copied().collect();
        algorithms.sort_by_key(|a| a.as_str());
        RegistryStats {
            domains,
            algorithms,
        }
    }

    fn adapter(&self, domain: Domain) -> LookupResult<&Arc<dyn DomainAdapter>> {
        self.adapters
            .get(&domain)
            .ok_or(LookupError::NoAdapter { domain })
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("AdapterRegistry")
            .field("domains", &stats.domains)
            .field("algorithms", &stats.algorithms)
            .finish()
    }
}

impl ContentLookup for AdapterRegistry {
    fn filter(&self, query: &FilterQuery) -> LookupResult<Vec<ContentReference>> {
        let adapter = self.adapter(query.domain)?;
        DomainAdapter::filter(adapter.as_ref(), query)
    }

    fn by_algorithm(
        &self,
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> LookupResult<Vec<ContentReference>> {
        self.recommendations
            .get(&algorithm)
            .ok_or(LookupError::NoRecommendationSource { algorithm })?
            .recommend(algorithm, limit)
    }

    fn by_ids(&self, domain: Domain, ids: &[String]) -> LookupResult<Vec<ContentReference>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.adapter(domain)?.fetch(ids)
    }
}
