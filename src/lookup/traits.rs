//! Content lookup contract consumed by the selection resolver.

use crate::models::{ContentReference, Domain, FilterRule, PersonalizationAlgorithm};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No content adapter registered for domain {domain}")]
    NoAdapter { domain: Domain },

    #[error("No recommendation source registered for algorithm {algorithm}")]
    NoRecommendationSource { algorithm: PersonalizationAlgorithm },

    #[error("Reference belongs to domain {actual}, expected {expected}")]
    DomainMismatch { expected: Domain, actual: Domain },

    #[error("Content backend failed: {reason}")]
    Backend { reason: String },
}

pub type LookupResult<T> = Result<T, LookupError>;

/// Parameters of an automatic shelf, as handed to the content repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub domain: Domain,
    pub rule: FilterRule,
    pub field: Option<String>,
    pub value: Option<String>,
    pub limit: u32,
}

impl FilterQuery {
    pub fn new(domain: Domain, rule: FilterRule, limit: u32) -> Self {
        Self {
            domain,
            rule,
            field: None,
            value: None,
            limit,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self.value = Some(value.into());
        self
    }
}

/// Read access to the content repository.
///
/// Implementations do the actual filtering and ranking; the core only
/// decides which of the three calls a shelf needs.
pub trait ContentLookup {
    fn filter(&self, query: &FilterQuery) -> LookupResult<Vec<ContentReference>>;

    fn by_algorithm(
        &self,
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> LookupResult<Vec<ContentReference>>;

    /// References for the ids that still exist. Order of the result is not
    /// significant and unknown ids are simply absent.
    fn by_ids(&self, domain: Domain, ids: &[String]) -> LookupResult<Vec<ContentReference>>;
}

impl<L: ContentLookup + ?Sized> ContentLookup for &L {
    fn filter(&self, query: &FilterQuery) -> LookupResult<Vec<ContentReference>> {
        (**self).filter(query)
    }

    fn by_algorithm(
        &self,
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> LookupResult<Vec<ContentReference>> {
        (**self).by_algorithm(algorithm, limit)
    }

    fn by_ids(&self, domain: Domain, ids: &[String]) -> LookupResult<Vec<ContentReference>> {
        (**self).by_ids(domain, ids)
    }
}

impl<L: ContentLookup + ?Sized> ContentLookup for Arc<L> {
    fn filter(&self, query: &FilterQuery) -> LookupResult<Vec<ContentReference>> {
        (**self).filter(query)
    }

    fn by_algorithm(
        &self,
        algorithm: PersonalizationAlgorithm,
        limit: u32,
    ) -> LookupResult<Vec<ContentReference>> {
        (**self).by_algorithm(algorithm, limit)
    }

    fn by_ids(&self, domain: Domain, ids: &[String]) -> LookupResult<Vec<ContentReference>> {
        (**self).by_ids(domain, ids)
    }
}
