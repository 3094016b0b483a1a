//! # Content Lookup
//!
//! The one interface through which shelves reach the content repository,
//! plus an adapter registry that dispatches it per domain.
//!
//! ```text
//! ContentLookup
//! ├── AdapterRegistry         (dispatch by domain / algorithm)
//! │   ├── DomainAdapter       (fetch + filter for one domain)
//! │   └── RecommendationSource
//! └── InMemoryCatalog         (DomainAdapter over preloaded entries)
//! ```

pub mod memory;
pub mod registry;
pub mod traits;

pub use memory::{CatalogEntry, InMemoryCatalog, StaticRecommendations};
pub use registry::{AdapterRegistry, DomainAdapter, RecommendationSource, RegistryStats};
pub use traits::{ContentLookup, FilterQuery, LookupError, LookupResult};
