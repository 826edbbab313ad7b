//! API controllers

pub mod entities;
pub mod health;
pub mod taxonomies;
pub mod vocabularies;

use std::sync::Arc;
use std::time::Instant;

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, VARY};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::application::{MappingInformation, PublicEntityProjector};
use crate::config::Config;
use crate::domain::cache::CacheMetadata;
use crate::domain::content::{EntityRepository, TermRepository, Viewer};
use crate::infrastructure::access::VIEWER_ROLES_HEADER;
use crate::presentation::models::ErrorResponse;

/// Shared application state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub mapping_info: Arc<MappingInformation>,
    pub entities: Arc<dyn EntityRepository>,
    pub terms: Arc<dyn TermRepository>,
    pub entity_projector: Arc<PublicEntityProjector>,
    pub config: Arc<Config>,
    pub startup_time: Instant,
}

/// Response header listing the cache invalidation tags of the body
pub const CACHE_TAGS_HEADER: &str = "cache-tags";

/// Response header listing every cache context, including query contexts
/// that have no Vary equivalent
pub const CACHE_CONTEXTS_HEADER: &str = "cache-contexts";

/// Resolve the requesting viewer from the roles header
pub(crate) fn viewer_from_headers(headers: &HeaderMap) -> Viewer {
    headers
        .get(VIEWER_ROLES_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|roles| {
            Viewer::with_roles(
                roles
                    .split(',')
                    .map(str::trim)
                    .filter(|role| !role.is_empty()),
            )
        })
        .unwrap_or_else(Viewer::anonymous)
}

/// Serialize a body as JSON with the cache metadata emitted as headers.
///
/// Tags go to `cache-tags`; contexts naming request headers additionally go
/// to `Vary` so HTTP caches split their entries correctly; `query:` contexts
/// only appear in `cache-contexts`.
pub(crate) fn cached_json<T: serde::Serialize>(cache: &CacheMetadata, body: T) -> Response {
    let mut headers = HeaderMap::new();

    if !cache.tags().is_empty() {
        if let Ok(value) = HeaderValue::from_str(&cache.tags().join(" ")) {
            headers.insert(HeaderName::from_static(CACHE_TAGS_HEADER), value);
        }
    }
    if !cache.contexts().is_empty() {
        if let Ok(value) = HeaderValue::from_str(&cache.contexts().join(", ")) {
            headers.insert(HeaderName::from_static(CACHE_CONTEXTS_HEADER), value);
        }
    }

    let vary: Vec<&str> = cache
        .contexts()
        .iter()
        .filter(|context| !context.starts_with("query:"))
        .map(String::as_str)
        .collect();
    if !vary.is_empty() {
        if let Ok(value) = HeaderValue::from_str(&vary.join(", ")) {
            headers.insert(VARY, value);
        }
    }

    if let Some(max_age) = cache.max_age() {
        if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={max_age}")) {
            headers.insert(CACHE_CONTROL, value);
        }
    }

    (StatusCode::OK, headers, Json(body)).into_response()
}

/// Uniform "not found" response
pub(crate) fn not_found(code: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(code, message)),
    )
        .into_response()
}
