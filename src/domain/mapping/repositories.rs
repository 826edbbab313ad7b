//! Mapping repository trait

use async_trait::async_trait;

use super::entities::PropertyMapping;

/// Persistence boundary for property mappings.
///
/// Lookups for unmapped pairs return `None`/empty rather than erroring;
/// callers treat the absence of a record as "nothing to export".
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Deterministic single-record fetch by composite key
    async fn find_by_ids(&self, entity_type: &str, bundle: &str) -> Option<PropertyMapping>;

    /// Inverse lookup: every mapping whose `public_type` matches, optionally
    /// narrowed by `public_datatype`
    async fn find_by_public_type(
        &self,
        public_type: &str,
        public_datatype: Option<&str>,
    ) -> Vec<PropertyMapping>;

    /// All records in declaration order
    async fn all(&self) -> Vec<PropertyMapping>;

    /// Insert or replace the record for the mapping's `(entity_type, bundle)`
    async fn save(&self, mapping: PropertyMapping);

    /// Remove a single record; no-op when absent
    async fn remove(&self, entity_type: &str, bundle: &str);

    /// Config-dependency cascade: a deleted bundle takes its mapping with it
    async fn remove_bundle(&self, entity_type: &str, bundle: &str);
}
