//! Application setup and wiring

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::application::{MappingInformation, PublicEntityProjector};
use crate::config::Config;
use crate::domain::content::{EntityRepository, TermRepository};
use crate::domain::mapping::MappingRepository;
use crate::infrastructure::access::PolicyFieldAccessChecker;
use crate::infrastructure::content::InMemoryContentStore;
use crate::infrastructure::mapping::InMemoryMappingRepository;
use crate::presentation::controllers::AppState;
use crate::presentation::routes::create_router;

/// Handle returned from create_app for graceful shutdown coordination
pub struct AppHandle {
    pub router: Router,
    pub shutdown_token: CancellationToken,
}

/// Create the application router and return an AppHandle for shutdown
/// coordination
pub async fn create_app(
    config: Config,
) -> Result<AppHandle, Box<dyn std::error::Error + Send + Sync>> {
    let startup_time = Instant::now();
    let config_arc = Arc::new(config.clone());
    let shutdown_token = CancellationToken::new();

    // Load the persisted mapping set and the content fixtures
    tracing::info!(
        mappings = %config.data.mappings_file.display(),
        content = %config.data.content_file.display(),
        "Loading seed data"
    );
    let mappings: Arc<dyn MappingRepository> = Arc::new(
        InMemoryMappingRepository::from_seed_file(&config.data.mappings_file).map_err(|e| {
            tracing::error!("Failed to load mapping seed: {}", e);
            e
        })?,
    );
    let store = Arc::new(
        InMemoryContentStore::from_seed_file(&config.data.content_file).map_err(|e| {
            tracing::error!("Failed to load content seed: {}", e);
            e
        })?,
    );
    let entities: Arc<dyn EntityRepository> = store.clone();
    let terms: Arc<dyn TermRepository> = store;

    // Wire the use-case services
    let mapping_info = Arc::new(MappingInformation::new(mappings));
    let access = Arc::new(PolicyFieldAccessChecker::new(config.access.rules.clone()));
    let entity_projector = Arc::new(PublicEntityProjector::new(mapping_info.clone(), access));

    let state = AppState {
        mapping_info,
        entities,
        terms,
        entity_projector,
        config: config_arc.clone(),
        startup_time,
    };

    let router = create_router(state, config_arc);

    Ok(AppHandle {
        router,
        shutdown_token,
    })
}
