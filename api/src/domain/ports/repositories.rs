//! Repository port traits
//!
//! These traits define the interface for package storage.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{NewPackage, Package};
use crate::error::DomainError;

/// Repository for Package entities
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// All packages, oldest first
    async fn find_all(&self) -> Result<Vec<Package>, DomainError>;

    /// Record a new package, assigning its id and timestamp
    async fn create(&self, package: &NewPackage) -> Result<Package, DomainError>;
}
