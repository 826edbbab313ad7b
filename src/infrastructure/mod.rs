//! Infrastructure layer: in-memory registry/store implementations and the
//! configured field access policy

pub mod access;
pub mod content;
pub mod mapping;
