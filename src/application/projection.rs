//! Public-shape projection of a single entity
//!
//! Builds the serializable view of one content entity: fields the viewer may
//! not see are nulled out (not omitted), remaining fields are renamed to
//! their public property names through the entity's default-context mapping,
//! and every access decision's cache dependencies are folded into the
//! response metadata so a more privileged request is never served the
//! less privileged cached copy.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::mapping_information::MappingInformation;
use crate::domain::cache::CacheMetadata;
use crate::domain::content::{ContentEntity, FieldAccessChecker, Viewer};
use crate::domain::mapping::DEFAULT_CONTEXT;

/// A projected entity plus the cache metadata the projection depended on
#[derive(Debug, Clone)]
pub struct ProjectedEntity {
    pub body: Value,
    pub cache: CacheMetadata,
}

pub struct PublicEntityProjector {
    mapping_info: Arc<MappingInformation>,
    access: Arc<dyn FieldAccessChecker>,
}

impl PublicEntityProjector {
    pub fn new(mapping_info: Arc<MappingInformation>, access: Arc<dyn FieldAccessChecker>) -> Self {
        Self {
            mapping_info,
            access,
        }
    }

    pub async fn project(&self, entity: &ContentEntity, viewer: &Viewer) -> ProjectedEntity {
        let mut cache = CacheMetadata::new()
            .with_tag(CacheMetadata::entity_tag(&entity.entity_type, &entity.id));

        let field_map = self
            .mapping_info
            .mapping_for(&entity.entity_type, &entity.bundle, DEFAULT_CONTEXT, false)
            .await
            .unwrap_or_default();
        let public_type = self
            .mapping_info
            .public_type_of(&entity.entity_type, &entity.bundle)
            .await;

        let mut body = Map::new();
        body.insert("id".to_owned(), Value::String(entity.id.clone()));
        body.insert(
            "type".to_owned(),
            Value::String(public_type.unwrap_or_else(|| entity.entity_type.clone())),
        );

        for (name, value) in &entity.fields {
            let decision = self.access.check(entity, name, viewer).await;
            cache.merge(&decision.cache);

            // Unmapped fields keep their internal name
            let public_name = field_map.get(name).cloned().unwrap_or_else(|| name.clone());
            let projected = if decision.allowed {
                value.to_json()
            } else {
                Value::Null
            };
            body.insert(public_name, projected);
        }

        ProjectedEntity {
            body: Value::Object(body),
            cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::FieldValue;
    use crate::domain::mapping::entities::field_map;
    use crate::domain::mapping::{MappingRepository, PropertyMapping};
    use crate::infrastructure::access::{FieldAccessRule, PolicyFieldAccessChecker};
    use crate::infrastructure::mapping::InMemoryMappingRepository;

    async fn projector(rules: Vec<FieldAccessRule>) -> PublicEntityProjector {
        let repo = Arc::new(InMemoryMappingRepository::new());
        repo.save(
            PropertyMapping::new("node", "article")
                .with_public_type("service")
                .with_mapping(field_map([("title", "name")]), DEFAULT_CONTEXT),
        )
        .await;
        PublicEntityProjector::new(
            Arc::new(MappingInformation::new(repo)),
            Arc::new(PolicyFieldAccessChecker::new(rules)),
        )
    }

    fn article() -> ContentEntity {
        ContentEntity::new("node", "article", "42")
            .with_field("title", FieldValue::text("Housing advice"))
            .with_field("internal_notes", FieldValue::text("do not publish"))
    }

    #[tokio::test]
    async fn fields_are_renamed_through_default_mapping() {
        let projector = projector(Vec::new()).await;
        let projected = projector.project(&article(), &Viewer::anonymous()).await;

        assert_eq!(projected.body["type"], "service");
        assert_eq!(projected.body["name"], "Housing advice");
        // Unmapped field keeps its internal name
        assert_eq!(projected.body["internal_notes"], "do not publish");
        assert_eq!(projected.cache.tags(), ["node:42"]);
    }

    #[tokio::test]
    async fn restricted_fields_are_nulled_and_vary_the_cache() {
        let rules = vec![FieldAccessRule {
            entity_type: "node".to_owned(),
            field: "internal_notes".to_owned(),
            required_role: "editor".to_owned(),
        }];
        let projector = projector(rules).await;

        let anonymous = projector.project(&article(), &Viewer::anonymous()).await;
        assert_eq!(anonymous.body["internal_notes"], Value::Null);
        assert!(anonymous
            .cache
            .contexts()
            .contains(&"x-viewer-roles".to_owned()));

        let editor = projector
            .project(&article(), &Viewer::with_roles(["editor"]))
            .await;
        assert_eq!(editor.body["internal_notes"], "do not publish");
    }

    #[tokio::test]
    async fn unmapped_bundle_projects_with_internal_names() {
        let projector = projector(Vec::new()).await;
        let entity = ContentEntity::new("node", "news", "7")
            .with_field("title", FieldValue::text("Road closure"));
        let projected = projector.project(&entity, &Viewer::anonymous()).await;

        assert_eq!(projected.body["type"], "node");
        assert_eq!(projected.body["title"], "Road closure");
    }
}
