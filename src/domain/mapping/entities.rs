//! Property mapping records

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Context holding the baseline field translation table
pub const DEFAULT_CONTEXT: &str = "default";

/// Context used when an entity is serialized as the top of a response or
/// projected into the search index
pub const ROOT_CONTEXT: &str = "__root";

/// Fallback bundle value matching any bundle of the mapped entity type
pub const DEFAULT_BUNDLE: &str = "__default";

/// Internal entity type whose bundles are exported as public vocabularies
pub const TAXONOMY_ENTITY_TYPE: &str = "taxonomy_term";

/// Public type denoting a taxonomy-like mapping, the only kind for which
/// `public_datatype` carries meaning
pub const TAXONOMY_PUBLIC_TYPE: &str = "taxonomy";

/// Translation table from internal field names to public property names
pub type FieldMap = BTreeMap<String, String>;

/// A persisted record associating one `(entity_type, bundle)` pair with a
/// public type and per-context field translation tables.
///
/// Exactly one record exists per pair; the identity is
/// `entity_type + "." + bundle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMapping {
    entity_type: String,
    bundle: String,
    #[serde(default)]
    public_type: Option<String>,
    /// External vocabulary discriminator ("curie"); empty unless the record
    /// is taxonomy-like
    #[serde(default)]
    public_datatype: String,
    #[serde(default)]
    property_mappings: HashMap<String, FieldMap>,
}

impl PropertyMapping {
    pub fn new(entity_type: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            public_type: None,
            public_datatype: String::new(),
            property_mappings: HashMap::new(),
        }
    }

    /// Composite identity, `entity_type + "." + bundle`
    pub fn id(&self) -> String {
        format!("{}.{}", self.entity_type, self.bundle)
    }

    pub fn mapped_entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn mapped_bundle(&self) -> &str {
        &self.bundle
    }

    pub fn public_type(&self) -> Option<&str> {
        self.public_type.as_deref()
    }

    pub fn set_public_type(&mut self, public_type: impl Into<String>) {
        self.public_type = Some(public_type.into());
    }

    pub fn public_datatype(&self) -> &str {
        &self.public_datatype
    }

    pub fn set_public_datatype(&mut self, public_datatype: impl Into<String>) {
        self.public_datatype = public_datatype.into();
    }

    /// Store the field translation table for a context
    pub fn set_mapping(&mut self, field_map: FieldMap, context: impl Into<String>) {
        self.property_mappings.insert(context.into(), field_map);
    }

    /// Retrieve the field translation table for a context.
    ///
    /// A missing context falls back to the `"default"` map; with `exact` set
    /// the fallback is suppressed and an empty map is returned instead.
    pub fn get_mapping(&self, context: &str, exact: bool) -> FieldMap {
        if let Some(map) = self.property_mappings.get(context) {
            return map.clone();
        }
        if exact {
            return FieldMap::new();
        }
        self.property_mappings
            .get(DEFAULT_CONTEXT)
            .cloned()
            .unwrap_or_default()
    }

    /// Builder-style variants used by seeds and tests
    pub fn with_public_type(mut self, public_type: impl Into<String>) -> Self {
        self.set_public_type(public_type);
        self
    }

    pub fn with_public_datatype(mut self, public_datatype: impl Into<String>) -> Self {
        self.set_public_datatype(public_datatype);
        self
    }

    pub fn with_mapping(mut self, field_map: FieldMap, context: impl Into<String>) -> Self {
        self.set_mapping(field_map, context);
        self
    }
}

/// Convenience constructor for field maps: `field_map([("title", "name")])`
pub fn field_map<I, K, V>(pairs: I) -> FieldMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
