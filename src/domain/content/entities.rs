//! Content entity and taxonomy term models
//!
//! These stand in for the host system's entity storage, which this service
//! only ever reads. Field values are either plain JSON or a list of taxonomy
//! term references; the reference shape (`{"target_id": "..."}`) is what
//! makes taxonomy-reference fields recognizable to the facet projector.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A reference to a taxonomy term by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRef {
    pub target_id: String,
}

/// A single field value on a content entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Taxonomy reference field, a list of term ids
    Terms(Vec<TermRef>),
    /// Anything else, kept as raw JSON
    Json(serde_json::Value),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Json(serde_json::Value::String(value.into()))
    }

    pub fn terms<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Terms(
            ids.into_iter()
                .map(|id| TermRef {
                    target_id: id.into(),
                })
                .collect(),
        )
    }

    /// Term ids carried by this value, empty unless it is a reference field
    pub fn term_ids(&self) -> Vec<&str> {
        match self {
            FieldValue::Terms(refs) => refs.iter().map(|r| r.target_id.as_str()).collect(),
            FieldValue::Json(_) => Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// A content entity of some `(entity_type, bundle)` with named fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntity {
    pub entity_type: String,
    pub bundle: String,
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl ContentEntity {
    pub fn new(
        entity_type: impl Into<String>,
        bundle: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

/// A taxonomy term: a labelled, optionally hierarchical record in a bundle
/// (the bundle is the internal vocabulary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: String,
    pub bundle: String,
    pub label: String,
    #[serde(default)]
    pub parent: Option<String>,
    /// Additional fields beyond the built-in ones
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl TaxonomyTerm {
    pub fn new(id: impl Into<String>, bundle: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bundle: bundle.into(),
            label: label.into(),
            parent: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Look up a field by internal name, covering the built-in fields the
    /// mapping layer may address (`tid`, `name`, `parent`) as well as extras
    pub fn field_value(&self, name: &str) -> Option<serde_json::Value> {
        match name {
            "tid" | "id" => Some(serde_json::Value::String(self.id.clone())),
            "name" | "label" => Some(serde_json::Value::String(self.label.clone())),
            "parent" => self
                .parent
                .as_ref()
                .map(|p| serde_json::Value::String(p.clone())),
            other => self.fields.get(other).cloned(),
        }
    }
}

/// The requesting principal, as far as field access is concerned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub roles: BTreeSet<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_reference_fields_deserialize_as_terms() {
        let value: FieldValue =
            serde_json::from_str(r#"[{"target_id": "7"}, {"target_id": "9"}]"#).unwrap();
        assert_eq!(value.term_ids(), ["7", "9"]);
    }

    #[test]
    fn scalar_fields_deserialize_as_json() {
        let value: FieldValue = serde_json::from_str(r#""Housing advice""#).unwrap();
        assert!(value.term_ids().is_empty());
        assert_eq!(value.to_json(), serde_json::json!("Housing advice"));
    }

    #[test]
    fn term_builtin_field_lookup() {
        let term = TaxonomyTerm::new("7", "tags", "Benefits")
            .with_field("field_curie_id", serde_json::json!("esd:1234"));

        assert_eq!(term.field_value("tid"), Some(serde_json::json!("7")));
        assert_eq!(term.field_value("name"), Some(serde_json::json!("Benefits")));
        assert_eq!(term.field_value("parent"), None);
        assert_eq!(
            term.field_value("field_curie_id"),
            Some(serde_json::json!("esd:1234"))
        );
        assert_eq!(term.field_value("missing"), None);
    }
}
