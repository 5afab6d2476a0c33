//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use chrono::Utc;

use crate::adapters::InMemoryPackageRepository;
use crate::app::PackageService;
use crate::domain::entities::{NewPackage, Package, PackageId};
use crate::AppState;

/// Create a new-package request with default values
pub fn test_new_package() -> NewPackage {
    NewPackage {
        ip: "203.0.113.5".parse().unwrap(),
        attack_type: "DDoS".to_string(),
    }
}

/// Create a stored package with the given fields
pub fn test_package(ip: &str, attack_type: &str) -> Package {
    Package {
        id: PackageId::new(),
        ip: ip.parse().unwrap(),
        attack_type: attack_type.to_string(),
        timestamp: Utc::now(),
    }
}

/// App state backed by an empty in-memory store
pub fn test_state() -> AppState {
    AppState {
        package_service: Arc::new(PackageService::new(Arc::new(
            InMemoryPackageRepository::new(),
        ))),
    }
}
