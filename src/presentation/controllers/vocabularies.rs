//! Vocabulary listing endpoint

use axum::extract::State;
use axum::response::Response;
use tracing::instrument;

use crate::domain::cache::CacheMetadata;
use crate::presentation::controllers::{cached_json, AppState};

/// GET /openreferral/v1/vocabulary - List exported vocabulary names
#[utoipa::path(
    get,
    path = "/openreferral/v1/vocabulary",
    responses(
        (status = 200, description = "Public vocabulary names in mapping declaration order", body = Vec<String>)
    ),
    tag = "taxonomies"
)]
#[instrument(skip(state))]
pub async fn vocabulary(State(state): State<AppState>) -> Response {
    let names = state.mapping_info.vocabularies().await;

    // The listing depends on the full mapping record set
    let cache = CacheMetadata::new().with_tag(CacheMetadata::list_tag("property_mapping"));
    cached_json(&cache, names)
}
