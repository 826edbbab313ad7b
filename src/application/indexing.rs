//! Taxonomy facet projection for the search index
//!
//! At index time every entity contributes two derived multi-valued fields:
//! the public vocabulary names and the public term ids of every taxonomy
//! term it references through a mapped taxonomy-carrying field. The
//! projection is best-effort: an entity or term without a mapping, or a
//! dangling reference, contributes nothing and raises no error.

use std::sync::Arc;

use tracing::debug;

use crate::application::mapping_information::MappingInformation;
use crate::domain::content::{ContentEntity, TaxonomyTerm, TermRepository};
use crate::domain::mapping::{ROOT_CONTEXT, TAXONOMY_ENTITY_TYPE};

/// Index property carrying the public vocabulary names
pub const VOCABULARY_PROPERTY: &str = "localgov_openreferral_vocabulary";

/// Index property carrying the public term ids
pub const TAXONOMY_PROPERTY: &str = "localgov_openreferral_taxonomy";

/// Public property names marking a field as taxonomy-carrying
const TAXONOMY_FIELD_ROLES: [&str; 2] = ["service_taxonomys", "link_taxonomy"];

/// The two derived facet fields for one indexed entity.
///
/// Values are deduplicated in first-seen order: referencing the same term
/// through several qualifying fields contributes it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexFields {
    pub vocabulary: Vec<String>,
    pub taxonomy: Vec<String>,
}

impl IndexFields {
    fn push_vocabulary(&mut self, value: String) {
        if !self.vocabulary.contains(&value) {
            self.vocabulary.push(value);
        }
    }

    fn push_taxonomy(&mut self, value: String) {
        if !self.taxonomy.contains(&value) {
            self.taxonomy.push(value);
        }
    }
}

pub struct TaxonomyFacetProjector {
    mapping_info: Arc<MappingInformation>,
    terms: Arc<dyn TermRepository>,
}

impl TaxonomyFacetProjector {
    pub fn new(mapping_info: Arc<MappingInformation>, terms: Arc<dyn TermRepository>) -> Self {
        Self {
            mapping_info,
            terms,
        }
    }

    /// Compute the facet fields for one entity
    pub async fn project(&self, entity: &ContentEntity) -> IndexFields {
        let mut fields = IndexFields::default();

        let Some(field_map) = self
            .mapping_info
            .mapping_for(&entity.entity_type, &entity.bundle, ROOT_CONTEXT, false)
            .await
        else {
            return fields;
        };

        // Internal names of the fields whose public role carries taxonomy terms
        let taxonomy_fields: Vec<&String> = field_map
            .iter()
            .filter(|(_, public)| TAXONOMY_FIELD_ROLES.contains(&public.as_str()))
            .map(|(internal, _)| internal)
            .collect();

        for field_name in taxonomy_fields {
            let Some(value) = entity.fields.get(field_name) else {
                continue;
            };
            for term_id in value.term_ids() {
                let Some(term) = self.terms.find(term_id).await else {
                    debug!(term_id, "skipping dangling term reference");
                    continue;
                };
                self.contribute_term(&term, &mut fields).await;
            }
        }

        fields
    }

    async fn contribute_term(&self, term: &TaxonomyTerm, fields: &mut IndexFields) {
        let Some(record) = self
            .mapping_info
            .mapping_record(TAXONOMY_ENTITY_TYPE, &term.bundle)
            .await
        else {
            debug!(term_id = %term.id, bundle = %term.bundle, "term bundle has no mapping");
            return;
        };

        fields.push_vocabulary(MappingInformation::vocabulary_name(&record));

        // The term's own mapping names the internal field exported as `id`
        let term_map = record.get_mapping(ROOT_CONTEXT, false);
        let id_field = term_map
            .iter()
            .find(|(_, public)| public.as_str() == "id")
            .map(|(internal, _)| internal);
        let Some(id_field) = id_field else {
            return;
        };
        if let Some(value) = term.field_value(id_field) {
            if let Some(id) = json_scalar_to_string(&value) {
                fields.push_taxonomy(id);
            }
        }
    }
}

fn json_scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
