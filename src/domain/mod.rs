//! Domain layer: entities, value objects, and repository traits

pub mod cache;
pub mod content;
pub mod mapping;
