//! Route definitions and server setup

use std::sync::Arc;
use std::time::Duration;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::presentation::controllers::{
    entities::single, health::health_check, taxonomies::taxonomies, vocabularies::vocabulary,
    AppState,
};
use crate::presentation::models::*;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::entities::single,
        crate::presentation::controllers::vocabularies::vocabulary,
        crate::presentation::controllers::taxonomies::taxonomies,
        crate::presentation::controllers::health::health_check
    ),
    components(schemas(ErrorResponse, TermDto, TaxonomiesResponse, HealthResponse)),
    tags(
        (name = "entities", description = "Single-entity reads in the public Open Referral shape"),
        (name = "taxonomies", description = "Vocabulary and taxonomy term export"),
        (name = "health", description = "System health monitoring")
    ),
    info(
        title = "Open Referral API",
        version = "0.1.0",
        description = "Read-only Open Referral compatible export of mapped content entities and taxonomies.",
        license(
            name = "AGPL-3.0",
            url = "https://www.gnu.org/licenses/agpl-3.0.html"
        )
    )
)]
pub struct ApiDoc;

/// Create the application router with the middleware stack
pub fn create_router(state: AppState, config: Arc<Config>) -> Router {
    let api_routes = Router::new()
        .route("/entity/{entity_type}/{id}", get(single))
        .route("/vocabulary", get(vocabulary))
        .route("/taxonomies", get(taxonomies));

    async fn root_handler() -> Response {
        axum::Json(serde_json::json!({
            "name": "Open Referral API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "health": "/health",
                "api": "/openreferral/v1",
                "docs": "/docs"
            }
        }))
        .into_response()
    }

    let health_routes = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check));

    // For cookie-less read-only APIs a wildcard origin is acceptable
    let cors_layer = if config.server.allowed_origins.len() == 1
        && config.server.allowed_origins[0] == "*"
    {
        CorsLayer::new()
            .allow_origin(tower_http::cors::AllowOrigin::any())
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static("x-viewer-roles"),
            ])
            .max_age(Duration::from_secs(3600))
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                axum::http::HeaderValue::from_str(origin)
                    .map_err(|_| {
                        tracing::warn!(%origin, "Invalid CORS origin in config; skipping");
                    })
                    .ok()
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static("x-viewer-roles"),
            ])
            .max_age(Duration::from_secs(3600))
    };

    let mut router = Router::new()
        .nest("/openreferral/v1", api_routes)
        .merge(health_routes);

    // Avoid leaking docs in production deployments that disable them
    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )));

    router.layer(service_builder).with_state(state)
}
