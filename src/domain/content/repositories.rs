//! Read-side traits over the host system's entity storage

use async_trait::async_trait;

use crate::domain::cache::CacheMetadata;
use crate::domain::content::entities::{ContentEntity, TaxonomyTerm, Viewer};

/// Outcome of a field-level access check, carrying whatever cache
/// dependencies the decision was based on
#[derive(Debug, Clone, Default)]
pub struct AccessDecision {
    pub allowed: bool,
    pub cache: CacheMetadata,
}

impl AccessDecision {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            cache: CacheMetadata::new(),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            allowed: false,
            cache: CacheMetadata::new(),
        }
    }

    pub fn with_cache(mut self, cache: CacheMetadata) -> Self {
        self.cache = cache;
        self
    }
}

/// Lookup of content entities by type and id
#[async_trait]
pub trait EntityRepository: Send + Sync {
    async fn find(&self, entity_type: &str, id: &str) -> Option<ContentEntity>;
}

/// Lookup of taxonomy terms
#[async_trait]
pub trait TermRepository: Send + Sync {
    async fn find(&self, id: &str) -> Option<TaxonomyTerm>;

    /// Terms of one bundle in stable storage order.
    ///
    /// `root_only` keeps terms without a parent; `parent_id` keeps direct
    /// children of the given term. The two filters are mutually exclusive at
    /// the call site; when both are passed, both apply.
    async fn terms_of_bundle(
        &self,
        bundle: &str,
        root_only: bool,
        parent_id: Option<&str>,
    ) -> Vec<TaxonomyTerm>;
}

/// Field-level view access policy
#[async_trait]
pub trait FieldAccessChecker: Send + Sync {
    async fn check(&self, entity: &ContentEntity, field: &str, viewer: &Viewer) -> AccessDecision;
}
