//! In-memory content store
//!
//! The host system owns entity storage; this service only reads it. For a
//! self-contained deployment the store is seeded from a JSON content file at
//! startup. Term listing preserves seed order, which is the stable storage
//! order the pager relies on.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::domain::content::{ContentEntity, EntityRepository, TaxonomyTerm, TermRepository};
use crate::infrastructure::mapping::SeedError;

#[derive(Debug, Default, Deserialize)]
struct ContentSeed {
    #[serde(default)]
    entities: Vec<ContentEntity>,
    #[serde(default)]
    terms: Vec<TaxonomyTerm>,
}

#[derive(Default)]
struct StoreState {
    entities: HashMap<(String, String), ContentEntity>,
    term_order: Vec<String>,
    terms: HashMap<String, TaxonomyTerm>,
}

pub struct InMemoryContentStore {
    state: RwLock<StoreState>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let seed: ContentSeed = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::new();
        for entity in seed.entities {
            store.insert_entity(entity);
        }
        for term in seed.terms {
            store.insert_term(term);
        }
        {
            let state = store.state.read().expect("content lock poisoned");
            info!(
                path = %path.display(),
                entities = state.entities.len(),
                terms = state.terms.len(),
                "loaded content seed"
            );
        }
        Ok(store)
    }

    pub fn insert_entity(&self, entity: ContentEntity) {
        let mut state = self.state.write().expect("content lock poisoned");
        state
            .entities
            .insert((entity.entity_type.clone(), entity.id.clone()), entity);
    }

    pub fn insert_term(&self, term: TaxonomyTerm) {
        let mut state = self.state.write().expect("content lock poisoned");
        if !state.terms.contains_key(&term.id) {
            state.term_order.push(term.id.clone());
        }
        state.terms.insert(term.id.clone(), term);
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityRepository for InMemoryContentStore {
    async fn find(&self, entity_type: &str, id: &str) -> Option<ContentEntity> {
        let state = self.state.read().expect("content lock poisoned");
        state
            .entities
            .get(&(entity_type.to_owned(), id.to_owned()))
            .cloned()
    }
}

#[async_trait]
impl TermRepository for InMemoryContentStore {
    async fn find(&self, id: &str) -> Option<TaxonomyTerm> {
        let state = self.state.read().expect("content lock poisoned");
        state.terms.get(id).cloned()
    }

    async fn terms_of_bundle(
        &self,
        bundle: &str,
        root_only: bool,
        parent_id: Option<&str>,
    ) -> Vec<TaxonomyTerm> {
        let state = self.state.read().expect("content lock poisoned");
        state
            .term_order
            .iter()
            .filter_map(|id| state.terms.get(id))
            .filter(|term| term.bundle == bundle)
            .filter(|term| !root_only || term.parent.is_none())
            .filter(|term| parent_id.is_none_or(|parent| term.parent.as_deref() == Some(parent)))
            .cloned()
            .collect()
    }
}
