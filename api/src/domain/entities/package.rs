//! Package domain entity
//!
//! A package is one detected malicious-traffic occurrence: the source IP and
//! the attack type it was classified as.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId(pub Uuid);

impl PackageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PackageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded malicious-traffic event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    /// Source IP of the traffic
    pub ip: IpAddr,
    /// Attack label, e.g. "DDoS" or "PortScan"
    pub attack_type: String,
    /// When the package was recorded
    pub timestamp: DateTime<Utc>,
}

/// Data for recording a new package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPackage {
    pub ip: IpAddr,
    pub attack_type: String,
}
