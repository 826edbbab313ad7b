//! Property mappings: the translation table between internal entities and
//! the public Open Referral vocabulary

pub mod entities;
pub mod repositories;

pub use entities::{
    FieldMap, PropertyMapping, DEFAULT_BUNDLE, DEFAULT_CONTEXT, ROOT_CONTEXT,
    TAXONOMY_ENTITY_TYPE, TAXONOMY_PUBLIC_TYPE,
};
pub use repositories::MappingRepository;
