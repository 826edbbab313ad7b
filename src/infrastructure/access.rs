//! Configured field-level access policy
//!
//! A rule restricts one field of an entity type to viewers holding a role.
//! Any decision that consulted a rule depends on the viewer's roles, so it
//! carries the `x-viewer-roles` cache context; unrestricted fields are
//! allowed with no added cache dependencies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::cache::CacheMetadata;
use crate::domain::content::{AccessDecision, ContentEntity, FieldAccessChecker, Viewer};

/// Request header the viewer's roles are read from, and therefore the cache
/// context restricted responses vary on
pub const VIEWER_ROLES_HEADER: &str = "x-viewer-roles";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldAccessRule {
    pub entity_type: String,
    pub field: String,
    pub required_role: String,
}

pub struct PolicyFieldAccessChecker {
    rules: Vec<FieldAccessRule>,
}

impl PolicyFieldAccessChecker {
    pub fn new(rules: Vec<FieldAccessRule>) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl FieldAccessChecker for PolicyFieldAccessChecker {
    async fn check(&self, entity: &ContentEntity, field: &str, viewer: &Viewer) -> AccessDecision {
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.entity_type == entity.entity_type && rule.field == field);

        match rule {
            None => AccessDecision::allowed(),
            Some(rule) => AccessDecision {
                allowed: viewer.has_role(&rule.required_role),
                cache: CacheMetadata::new().with_context(VIEWER_ROLES_HEADER),
            },
        }
    }
}
