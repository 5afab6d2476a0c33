//! Package service
//!
//! Records detected malicious traffic and lists it for the feed.

use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::entities::{NewPackage, Package};
use crate::domain::ports::PackageRepository;
use crate::error::DomainError;

/// Service for recording and listing packages
pub struct PackageService<PR>
where
    PR: PackageRepository,
{
    packages: Arc<PR>,
}

impl<PR> PackageService<PR>
where
    PR: PackageRepository,
{
    pub fn new(packages: Arc<PR>) -> Self {
        Self { packages }
    }

    /// All recorded packages, oldest first
    pub async fn get_packages(&self) -> Result<Vec<Package>, DomainError> {
        self.packages.find_all().await
    }

    /// Record a package after validating its fields
    pub async fn create_package(&self, ip: &str, attack_type: &str) -> Result<Package, DomainError> {
        let ip: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| DomainError::Validation(format!("Invalid IP address: {:?}", ip)))?;

        let attack_type = attack_type.trim();
        if attack_type.is_empty() {
            return Err(DomainError::Validation(
                "attack_type must not be empty".to_string(),
            ));
        }

        let package = self
            .packages
            .create(&NewPackage {
                ip,
                attack_type: attack_type.to_string(),
            })
            .await?;

        tracing::info!(
            id = %package.id,
            ip = %package.ip,
            attack_type = %package.attack_type,
            "Malicious traffic recorded"
        );

        Ok(package)
    }
}
