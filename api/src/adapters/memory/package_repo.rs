use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewPackage, Package, PackageId};
use crate::domain::ports::PackageRepository;
use crate::error::DomainError;

#[derive(Default, Clone)]
pub struct InMemoryPackageRepository {
    packages: Arc<RwLock<Vec<Package>>>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Storage("package store lock poisoned".to_string())
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn find_all(&self) -> Result<Vec<Package>, DomainError> {
        let packages = self.packages.read().map_err(poisoned)?;
        Ok(packages.clone())
    }

    async fn create(&self, package: &NewPackage) -> Result<Package, DomainError> {
        let package = Package {
            id: PackageId::new(),
            ip: package.ip,
            attack_type: package.attack_type.clone(),
            timestamp: Utc::now(),
        };

        let mut packages = self.packages.write().map_err(poisoned)?;
        packages.push(package.clone());
        Ok(package)
    }
}
