//! Taxonomy term listing endpoint

use axum::extract::{Query, State};
use axum::response::Response;
use tracing::instrument;

use crate::application::pager::{paginate, PagerParams, PagerSettings};
use crate::domain::cache::CacheMetadata;
use crate::domain::content::TermRepository;
use crate::domain::mapping::TAXONOMY_ENTITY_TYPE;
use crate::presentation::controllers::{cached_json, not_found, AppState};
use crate::presentation::models::{TaxonomiesQuery, TaxonomiesResponse, TermDto};

/// GET /openreferral/v1/taxonomies - List the terms of one exported
/// vocabulary
#[utoipa::path(
    get,
    path = "/openreferral/v1/taxonomies",
    params(TaxonomiesQuery),
    responses(
        (status = 200, description = "Page of taxonomy terms with pager metadata", body = TaxonomiesResponse),
        (status = 404, description = "The vocabulary is not exported by any mapping", body = crate::presentation::models::ErrorResponse)
    ),
    tag = "taxonomies"
)]
#[instrument(skip(state, query), fields(vocabulary = query.vocabulary.as_deref().unwrap_or("")))]
pub async fn taxonomies(
    State(state): State<AppState>,
    Query(query): Query<TaxonomiesQuery>,
) -> Response {
    let Some(vocabulary) = query.vocabulary.as_deref().filter(|v| !v.is_empty()) else {
        return not_found("VOCABULARY_NOT_FOUND", "Missing vocabulary parameter");
    };

    let Some((_, bundle)) = state.mapping_info.internal_target(vocabulary).await else {
        return not_found(
            "VOCABULARY_NOT_FOUND",
            format!("No property mapping exports a vocabulary named '{vocabulary}'"),
        );
    };

    let terms = state
        .terms
        .terms_of_bundle(
            &bundle,
            query.root_only.unwrap_or(false),
            query.parent_id.as_deref(),
        )
        .await;

    let pager_params = PagerParams {
        page: query.page,
        per_page: query.per_page,
    };
    let settings = PagerSettings {
        default_per_page: state.config.pager.default_per_page,
        max_per_page: state.config.pager.max_per_page,
    };
    let (pager, page) = paginate(terms, &pager_params, settings);

    let content = page
        .iter()
        .map(|term| TermDto::from_term(term, vocabulary))
        .collect();

    // The page depends only on the term list and the vocabulary argument
    let cache = CacheMetadata::new()
        .with_tag(CacheMetadata::list_tag(TAXONOMY_ENTITY_TYPE))
        .with_context("query:vocabulary");

    cached_json(&cache, TaxonomiesResponse { pager, content })
}
