//! Presentation layer: axum controllers, DTOs, and the router

pub mod controllers;
pub mod models;
pub mod routes;

pub use controllers::AppState;
pub use routes::create_router;
