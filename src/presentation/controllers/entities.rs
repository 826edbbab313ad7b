//! Single-entity read endpoint

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use tracing::instrument;

use crate::domain::content::EntityRepository;
use crate::presentation::controllers::{cached_json, not_found, viewer_from_headers, AppState};

/// GET /openreferral/v1/entity/{entity_type}/{id} - Read one entity in its
/// public shape
#[utoipa::path(
    get,
    path = "/openreferral/v1/entity/{entity_type}/{id}",
    params(
        ("entity_type" = String, Path, description = "Internal entity type, e.g. node"),
        ("id" = String, Path, description = "Entity id")
    ),
    responses(
        (status = 200, description = "Entity in its public shape; fields the viewer may not see are null"),
        (status = 404, description = "Unknown entity", body = crate::presentation::models::ErrorResponse)
    ),
    tag = "entities"
)]
#[instrument(skip(state, headers))]
pub async fn single(
    State(state): State<AppState>,
    Path((entity_type, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let Some(entity) = state.entities.find(&entity_type, &id).await else {
        return not_found(
            "ENTITY_NOT_FOUND",
            format!("No {entity_type} entity with id {id}"),
        );
    };

    let viewer = viewer_from_headers(&headers);
    let projected = state.entity_projector.project(&entity, &viewer).await;

    cached_json(&projected.cache, projected.body)
}
