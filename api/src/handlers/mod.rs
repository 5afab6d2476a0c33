//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod index;
pub mod packages;

pub use index::index;
pub use packages::{create_package, get_packages};
