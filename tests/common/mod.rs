//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;

use openreferral_api::application::{MappingInformation, PublicEntityProjector};
use openreferral_api::config::Config;
use openreferral_api::domain::content::{ContentEntity, FieldValue, TaxonomyTerm};
use openreferral_api::domain::mapping::entities::field_map;
use openreferral_api::domain::mapping::{
    MappingRepository, PropertyMapping, DEFAULT_CONTEXT, ROOT_CONTEXT, TAXONOMY_ENTITY_TYPE,
    TAXONOMY_PUBLIC_TYPE,
};
use openreferral_api::infrastructure::access::{FieldAccessRule, PolicyFieldAccessChecker};
use openreferral_api::infrastructure::content::InMemoryContentStore;
use openreferral_api::infrastructure::mapping::InMemoryMappingRepository;
use openreferral_api::presentation::{create_router, AppState};

/// Router over a small mapped content set:
/// - `node/article` -> `service`, with `tags` references through
///   `service_taxonomys`
/// - `taxonomy_term/tags` -> `taxonomy` exported as `esdNeeds`
/// - `taxonomy_term/topics` -> `taxonomy` exported under its bundle name
/// - `internal_notes` on nodes restricted to the `editor` role
pub async fn test_router() -> Router {
    let mappings = Arc::new(InMemoryMappingRepository::new());
    mappings
        .save(
            PropertyMapping::new("node", "article")
                .with_public_type("service")
                .with_mapping(
                    field_map([("title", "name"), ("body", "description")]),
                    DEFAULT_CONTEXT,
                )
                .with_mapping(
                    field_map([("title", "name"), ("field_topics", "service_taxonomys")]),
                    ROOT_CONTEXT,
                ),
        )
        .await;
    mappings
        .save(
            PropertyMapping::new(TAXONOMY_ENTITY_TYPE, "tags")
                .with_public_type(TAXONOMY_PUBLIC_TYPE)
                .with_public_datatype("esdNeeds")
                .with_mapping(field_map([("tid", "id"), ("name", "name")]), DEFAULT_CONTEXT),
        )
        .await;
    mappings
        .save(
            PropertyMapping::new(TAXONOMY_ENTITY_TYPE, "topics")
                .with_public_type(TAXONOMY_PUBLIC_TYPE)
                .with_mapping(field_map([("tid", "id")]), DEFAULT_CONTEXT),
        )
        .await;

    let store = Arc::new(InMemoryContentStore::new());
    store.insert_entity(
        ContentEntity::new("node", "article", "1")
            .with_field("title", FieldValue::text("Housing advice"))
            .with_field("body", FieldValue::text("Advice for private tenants."))
            .with_field("internal_notes", FieldValue::text("do not publish"))
            .with_field("field_topics", FieldValue::terms(["7"])),
    );
    store.insert_term(TaxonomyTerm::new("7", "tags", "Benefits"));
    store.insert_term(TaxonomyTerm::new("8", "tags", "Housing"));
    store.insert_term(TaxonomyTerm::new("9", "tags", "Housing benefit").with_parent("7"));
    store.insert_term(TaxonomyTerm::new("10", "topics", "Community"));

    let config = Arc::new(Config::default());
    let mapping_info = Arc::new(MappingInformation::new(mappings));
    let access = Arc::new(PolicyFieldAccessChecker::new(vec![FieldAccessRule {
        entity_type: "node".to_owned(),
        field: "internal_notes".to_owned(),
        required_role: "editor".to_owned(),
    }]));

    let state = AppState {
        mapping_info: mapping_info.clone(),
        entities: store.clone(),
        terms: store,
        entity_projector: Arc::new(PublicEntityProjector::new(mapping_info, access)),
        config: config.clone(),
        startup_time: Instant::now(),
    };

    create_router(state, config)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn get_with_roles(uri: &str, roles: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-viewer-roles", roles)
        .body(Body::empty())
        .expect("request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
