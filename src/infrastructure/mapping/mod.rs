//! In-memory property-mapping registry
//!
//! Mappings are persisted configuration in the host system; here they are
//! read from a JSON seed file at startup and held in memory with two
//! indexes: the composite key `(entity_type, bundle)` and the inverse
//! `public_type`. The set is read-many/write-rarely, so both indexes are
//! rebuilt on every write.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::info;

use crate::domain::mapping::{MappingRepository, PropertyMapping};

/// Error raised while loading the mapping seed file
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default)]
struct RegistryState {
    /// Declaration order of composite ids; drives `all()` and the
    /// vocabulary listing
    order: Vec<String>,
    records: HashMap<String, PropertyMapping>,
    /// Inverse index: public type -> composite ids, in declaration order
    by_public_type: HashMap<String, Vec<String>>,
}

impl RegistryState {
    fn rebuild_inverse(&mut self) {
        self.by_public_type.clear();
        for id in &self.order {
            let record = &self.records[id];
            if let Some(public_type) = record.public_type() {
                self.by_public_type
                    .entry(public_type.to_owned())
                    .or_default()
                    .push(id.clone());
            }
        }
    }

    fn insert(&mut self, mapping: PropertyMapping) {
        let id = mapping.id();
        if !self.records.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.records.insert(id, mapping);
        self.rebuild_inverse();
    }

    fn remove(&mut self, entity_type: &str, bundle: &str) {
        let id = format!("{entity_type}.{bundle}");
        if self.records.remove(&id).is_some() {
            self.order.retain(|existing| existing != &id);
            self.rebuild_inverse();
        }
    }
}

#[derive(Debug)]
pub struct InMemoryMappingRepository {
    state: RwLock<RegistryState>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Build a registry from a JSON seed file: an array of mapping records
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let seeds: Vec<PropertyMapping> =
            serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let repository = Self::new();
        {
            let mut state = repository.state.write().expect("registry lock poisoned");
            for mapping in seeds {
                state.insert(mapping);
            }
        }
        info!(
            path = %path.display(),
            count = repository.state.read().expect("registry lock poisoned").order.len(),
            "loaded property mapping seed"
        );
        Ok(repository)
    }
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_ids(&self, entity_type: &str, bundle: &str) -> Option<PropertyMapping> {
        let state = self.state.read().expect("registry lock poisoned");
        state.records.get(&format!("{entity_type}.{bundle}")).cloned()
    }

    async fn find_by_public_type(
        &self,
        public_type: &str,
        public_datatype: Option<&str>,
    ) -> Vec<PropertyMapping> {
        let state = self.state.read().expect("registry lock poisoned");
        let Some(ids) = state.by_public_type.get(public_type) else {
            return Vec::new();
        };
        ids.iter()
            .map(|id| state.records[id].clone())
            .filter(|record| {
                public_datatype.is_none_or(|datatype| record.public_datatype() == datatype)
            })
            .collect()
    }

    async fn all(&self) -> Vec<PropertyMapping> {
        let state = self.state.read().expect("registry lock poisoned");
        state
            .order
            .iter()
            .map(|id| state.records[id].clone())
            .collect()
    }

    async fn save(&self, mapping: PropertyMapping) {
        let mut state = self.state.write().expect("registry lock poisoned");
        state.insert(mapping);
    }

    async fn remove(&self, entity_type: &str, bundle: &str) {
        let mut state = self.state.write().expect("registry lock poisoned");
        state.remove(entity_type, bundle);
    }

    async fn remove_bundle(&self, entity_type: &str, bundle: &str) {
        info!(entity_type, bundle, "bundle deleted; removing its property mapping");
        let mut state = self.state.write().expect("registry lock poisoned");
        state.remove(entity_type, bundle);
    }
}
