//! Test utilities
//!
//! Hand-written `PackageSource` mocks, payload fixtures and log capture for
//! unit tests.

pub mod fixtures;
pub mod logs;
pub mod mocks;

pub use fixtures::*;
pub use logs::*;
pub use mocks::*;
