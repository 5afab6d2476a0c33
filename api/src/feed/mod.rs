//! Feed module
//!
//! Server-side rendering of the package list.

pub mod renderer;

pub use renderer::render_index;
