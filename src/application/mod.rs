//! Application layer: use-case services over the domain traits

pub mod indexing;
pub mod mapping_information;
pub mod pager;
pub mod projection;

pub use indexing::{IndexFields, TaxonomyFacetProjector};
pub use mapping_information::MappingInformation;
pub use pager::{PagerMeta, PagerParams, PagerSettings};
pub use projection::{ProjectedEntity, PublicEntityProjector};
