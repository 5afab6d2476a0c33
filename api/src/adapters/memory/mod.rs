//! In-memory adapters
//!
//! Packages live for the lifetime of the process.

mod package_repo;

pub use package_repo::InMemoryPackageRepository;
