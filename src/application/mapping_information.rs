//! Mapping resolution façade
//!
//! Wraps the mapping repository with the lookups the controllers and the
//! facet projector need: forward resolution by `(entity_type, bundle)`, the
//! public vocabulary listing, and inverse resolution from a public
//! vocabulary name back to the internal bundle.

use std::sync::Arc;

use crate::domain::mapping::{
    FieldMap, MappingRepository, PropertyMapping, DEFAULT_BUNDLE, TAXONOMY_ENTITY_TYPE,
    TAXONOMY_PUBLIC_TYPE,
};

pub struct MappingInformation {
    mappings: Arc<dyn MappingRepository>,
}

impl MappingInformation {
    pub fn new(mappings: Arc<dyn MappingRepository>) -> Self {
        Self { mappings }
    }

    /// Resolve the mapping record for a `(entity_type, bundle)` pair, trying
    /// the bundle's own record first and the `__default` record second
    pub async fn mapping_record(&self, entity_type: &str, bundle: &str) -> Option<PropertyMapping> {
        if let Some(mapping) = self.mappings.find_by_ids(entity_type, bundle).await {
            return Some(mapping);
        }
        self.mappings.find_by_ids(entity_type, DEFAULT_BUNDLE).await
    }

    /// Resolve the field translation table for a pair and context
    pub async fn mapping_for(
        &self,
        entity_type: &str,
        bundle: &str,
        context: &str,
        exact: bool,
    ) -> Option<FieldMap> {
        self.mapping_record(entity_type, bundle)
            .await
            .map(|mapping| mapping.get_mapping(context, exact))
    }

    /// The public class a pair maps to, when configured
    pub async fn public_type_of(&self, entity_type: &str, bundle: &str) -> Option<String> {
        self.mapping_record(entity_type, bundle)
            .await
            .and_then(|mapping| mapping.public_type().map(str::to_owned))
    }

    /// Public vocabulary name of a taxonomy-like mapping: its
    /// `public_datatype` when set, otherwise the raw bundle name
    pub fn vocabulary_name(mapping: &PropertyMapping) -> String {
        if mapping.public_datatype().is_empty() {
            mapping.mapped_bundle().to_owned()
        } else {
            mapping.public_datatype().to_owned()
        }
    }

    /// Every exported vocabulary name, deduplicated in declaration order.
    /// Taxonomy bundles without a configured public type are not exported.
    pub async fn vocabularies(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for mapping in self.mappings.all().await {
            if mapping.mapped_entity_type() != TAXONOMY_ENTITY_TYPE
                || mapping.public_type().is_none()
            {
                continue;
            }
            let name = Self::vocabulary_name(&mapping);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Inverse lookup from a public vocabulary name to the internal
    /// `(entity_type, bundle)` it is exported from.
    ///
    /// The datatype index answers most queries; vocabularies exported under
    /// their bundle name (empty `public_datatype`) are matched by scanning
    /// the taxonomy-typed records.
    pub async fn internal_target(&self, vocabulary: &str) -> Option<(String, String)> {
        let by_datatype = self
            .mappings
            .find_by_public_type(TAXONOMY_PUBLIC_TYPE, Some(vocabulary))
            .await;
        if let Some(mapping) = by_datatype.first() {
            return Some((
                mapping.mapped_entity_type().to_owned(),
                mapping.mapped_bundle().to_owned(),
            ));
        }

        self.mappings
            .find_by_public_type(TAXONOMY_PUBLIC_TYPE, None)
            .await
            .into_iter()
            .find(|mapping| Self::vocabulary_name(mapping) == vocabulary)
            .map(|mapping| {
                (
                    mapping.mapped_entity_type().to_owned(),
                    mapping.mapped_bundle().to_owned(),
                )
            })
    }
}
