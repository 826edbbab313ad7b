//! Open Referral API - Main application library
//!
//! Exposes mapped content entities and taxonomies in an Open Referral
//! compatible shape:
//!
//! - [`domain`] — property mappings, content entities, repository traits
//! - [`application`] — mapping resolution, entity projection, taxonomy facet
//!   projection, pager
//! - [`infrastructure`] — in-memory registry/store, field access policy
//! - [`presentation`] — axum controllers and router
//! - [`config`] — strongly-typed configuration with TOML and environment
//!   variable support (`OPENREFERRAL__` prefix, `__` separator)

mod app;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use app::{create_app, AppHandle};
pub use config::Config;
pub use logging::init_tracing;
