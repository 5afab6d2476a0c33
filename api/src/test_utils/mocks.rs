//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{NewPackage, Package};
use crate::domain::ports::PackageRepository;
use crate::error::DomainError;

/// Repository whose every call fails with a storage error
pub struct FailingPackageRepository;

#[async_trait]
impl PackageRepository for FailingPackageRepository {
    async fn find_all(&self) -> Result<Vec<Package>, DomainError> {
        Err(DomainError::Storage("store unavailable".to_string()))
    }

    async fn create(&self, _package: &NewPackage) -> Result<Package, DomainError> {
        Err(DomainError::Storage("store unavailable".to_string()))
    }
}
