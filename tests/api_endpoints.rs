//! End-to-end tests of the HTTP surface against in-memory fixtures

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, get_with_roles, test_router};

#[tokio::test]
async fn vocabulary_lists_exported_names_in_declaration_order() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/vocabulary"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("cache-tags").unwrap(),
        "property_mapping_list"
    );
    assert_eq!(body_json(response).await, json!(["esdNeeds", "topics"]));
}

#[tokio::test]
async fn taxonomies_returns_terms_of_the_resolved_bundle() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/taxonomies?vocabulary=esdNeeds"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("cache-tags").unwrap(),
        "taxonomy_term_list"
    );
    assert_eq!(
        response.headers().get("cache-contexts").unwrap(),
        "query:vocabulary"
    );

    let body = body_json(response).await;
    assert_eq!(body["total_items"], 3);
    assert_eq!(body["page"], 0);
    let ids: Vec<&str> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["7", "8", "9"]);
    assert_eq!(body["content"][0]["vocabulary"], "esdNeeds");
}

#[tokio::test]
async fn taxonomies_resolves_bundle_named_vocabularies() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/taxonomies?vocabulary=topics"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_items"], 1);
    assert_eq!(body["content"][0]["id"], "10");
}

#[tokio::test]
async fn taxonomies_rejects_unknown_vocabulary_with_not_found() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/taxonomies?vocabulary=nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VOCABULARY_NOT_FOUND");
}

#[tokio::test]
async fn taxonomies_requires_the_vocabulary_parameter() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/taxonomies"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn taxonomies_applies_root_only_and_parent_filters() {
    let router = test_router().await;

    let response = router
        .clone()
        .oneshot(get(
            "/openreferral/v1/taxonomies?vocabulary=esdNeeds&root_only=true",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let ids: Vec<&str> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["7", "8"]);

    let response = router
        .oneshot(get(
            "/openreferral/v1/taxonomies?vocabulary=esdNeeds&parent_id=7",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_items"], 1);
    assert_eq!(body["content"][0]["id"], "9");
    assert_eq!(body["content"][0]["parent_id"], "7");
}

#[tokio::test]
async fn taxonomies_paginates_with_defaults_for_bad_params() {
    let router = test_router().await;

    let response = router
        .clone()
        .oneshot(get(
            "/openreferral/v1/taxonomies?vocabulary=esdNeeds&per_page=1&page=1",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["per_page"], 1);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["content"][0]["id"], "8");

    // A page past the end is empty, with the totals intact
    let response = router
        .oneshot(get(
            "/openreferral/v1/taxonomies?vocabulary=esdNeeds&per_page=2&page=9",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_items"], 3);
    assert!(body["content"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn single_nulls_restricted_fields_for_anonymous_viewers() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/entity/node/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cache_tags = response.headers().get("cache-tags").unwrap().clone();
    assert!(cache_tags.to_str().unwrap().contains("node:1"));
    // The CORS layer appends its own Vary values, so scan them all
    let varies: Vec<String> = response
        .headers()
        .get_all("vary")
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect();
    assert!(varies.iter().any(|v| v.contains("x-viewer-roles")));

    let body = body_json(response).await;
    assert_eq!(body["type"], "service");
    assert_eq!(body["name"], "Housing advice");
    assert_eq!(body["description"], "Advice for private tenants.");
    assert_eq!(body["internal_notes"], serde_json::Value::Null);
}

#[tokio::test]
async fn single_shows_restricted_fields_to_the_granted_role() {
    let router = test_router().await;
    let response = router
        .oneshot(get_with_roles("/openreferral/v1/entity/node/1", "editor"))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["internal_notes"], "do not publish");
}

#[tokio::test]
async fn single_returns_not_found_for_unknown_entities() {
    let router = test_router().await;
    let response = router
        .oneshot(get("/openreferral/v1/entity/node/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "ENTITY_NOT_FOUND");
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router().await;
    let response = router.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
