//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::pager::PagerMeta;
use crate::domain::content::TaxonomyTerm;

/// Standard error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "VOCABULARY_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "No property mapping exports a vocabulary named 'esdNeeds'")]
    pub message: String,

    /// Additional error context
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Query parameters of the taxonomies listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TaxonomiesQuery {
    /// Public vocabulary name to list terms from
    pub vocabulary: Option<String>,
    /// Keep only terms without a parent
    pub root_only: Option<bool>,
    /// Keep only direct children of this term
    pub parent_id: Option<String>,
    /// Zero-based page number
    pub page: Option<usize>,
    /// Items per page
    pub per_page: Option<usize>,
}

/// One taxonomy term as exported by the taxonomies endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct TermDto {
    #[schema(example = "7")]
    pub id: String,
    #[schema(example = "Benefits")]
    pub label: String,
    /// Parent term id, absent for root terms
    pub parent_id: Option<String>,
    /// Public vocabulary the term belongs to
    #[schema(example = "esdNeeds")]
    pub vocabulary: String,
}

impl TermDto {
    pub fn from_term(term: &TaxonomyTerm, vocabulary: &str) -> Self {
        Self {
            id: term.id.clone(),
            label: term.label.clone(),
            parent_id: term.parent.clone(),
            vocabulary: vocabulary.to_owned(),
        }
    }
}

/// Page of taxonomy terms plus pager metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct TaxonomiesResponse {
    #[serde(flatten)]
    #[schema(inline)]
    pub pager: PagerMeta,
    pub content: Vec<TermDto>,
}

/// Health endpoint response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub uptime_seconds: u64,
}
