//! Content entities, taxonomy terms, and their repository traits

pub mod entities;
pub mod repositories;

pub use entities::{ContentEntity, FieldValue, TaxonomyTerm, TermRef, Viewer};
pub use repositories::{AccessDecision, EntityRepository, FieldAccessChecker, TermRepository};
